use std::mem::MaybeUninit;

use log::LevelFilter;
use match_table_core::TournamentId;
use serde::{Deserialize, Serialize};

use crate::styles::ClassNames;

/// The global config.
///
/// This instance always lives for the lifetime of the program.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// The base url of the fixtures api.
    pub api_base: Box<str>,
    /// The id of the element to mount the application at. Mounts at `<body>` if `None`.
    #[serde(default)]
    pub mountpoint: Option<Box<str>>,
    /// The tournament to show the matches of.
    #[serde(default)]
    pub tournament_id: Option<TournamentId>,
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
    #[serde(default)]
    pub classes: ClassNames,
}

impl Config {
    #[inline]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

static mut CONFIG: MaybeUninit<Config> = MaybeUninit::uninit();

#[inline]
pub fn config() -> &'static Config {
    // SAFETY: `set_config` must have been at the start of the program.
    // CONFIG is initialized.
    unsafe { CONFIG.assume_init_ref() }
}

/// Sets the config. You must call this function only once during the lifetime of the program.
///
/// # Safety
///
/// While this function executes there must be no references to the config. A reference can be
/// obtained by calling [`config`]. You must also only call this function once in the lifetime of
/// the program.
#[inline]
pub(super) unsafe fn set_config(config: Config) {
    CONFIG.write(config);
}
