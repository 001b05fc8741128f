#![deny(unused_crate_dependencies)]
// Fix for html! macro doing unit value assignments. (yew 0.19.3)
#![allow(clippy::let_unit_value)]

mod app;
mod components;
mod logger;
mod services;
mod statics;
mod styles;
mod utils;

use wasm_bindgen::prelude::*;
use yew::start_app_in_element;

pub use components::{MatchTable, MatchTableProps};
pub use statics::Config;
pub use styles::ClassNames;

use app::App;

/// Starts the application using the config object passed from javascript.
#[wasm_bindgen]
pub fn run(config: JsValue) {
    // SAFETY: Called from a single threaded context. No race conditions can occur.
    unsafe {
        logger::init();
    }

    match serde_wasm_bindgen::from_value(config) {
        Ok(config) => run_with_config(config),
        Err(err) => {
            log::error!("Failed to parse config: {}", err);
            log::error!("Fatal error: Failed to mount app");
        }
    }
}

pub fn run_with_config(config: Config) {
    log::set_max_level(config.log_level);

    let document = utils::document();

    let element = match config.mountpoint.as_deref() {
        Some(id) => match document.get_element_by_id(id) {
            Some(element) => element,
            None => {
                log::error!("Cannot find element with id {}", id);
                log::error!("Fatal error: Failed to mount app");

                return;
            }
        },
        None => match document.body() {
            Some(body) => body.into(),
            None => {
                log::error!("Fatal error: No document body to mount app");
                return;
            }
        },
    };

    // SAFETY: There are no references to the config.
    unsafe {
        statics::set_config(config);
    }

    start_app_in_element::<App>(element);
}
