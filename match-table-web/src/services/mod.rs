pub mod download;
pub mod toast;

pub use download::BrowserDownload;
pub use toast::{ToastBus, ToastNotifier};
