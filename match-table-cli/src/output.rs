use std::fs;
use std::io;
use std::path::PathBuf;

use match_table_core::notify::Level;
use match_table_core::{CsvFile, Download, Notification, Notifier};

/// Prints notifications to the terminal. Errors go to stderr.
#[derive(Copy, Clone, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => println!("{}", notification.message),
            Level::Error => eprintln!("{}", notification.message),
        }
    }
}

/// Writes exported files into a directory.
///
/// The file is first written to a temporary path next to the destination and then moved into
/// place, an existing file is never left half written.
#[derive(Clone, Debug)]
pub struct FileDownload {
    dir: PathBuf,
}

impl FileDownload {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { dir: dir.into() }
    }

    pub fn path(&self, file: &CsvFile) -> PathBuf {
        self.dir.join(&file.file_name)
    }
}

impl Download for FileDownload {
    type Error = io::Error;

    fn download(&self, file: &CsvFile) -> Result<(), Self::Error> {
        let path = self.path(file);
        let tmp = self.dir.join(format!(".{}.part", file.file_name));

        fs::write(&tmp, file.content.as_bytes())?;

        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        log::debug!("Wrote {}", path.display());

        Ok(())
    }
}
