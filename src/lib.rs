pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::rest::RestBackend;
pub use adapters::session_file::FileSessionStore;
pub use core::admin::AdminGate;
pub use core::grouper::group_by_category;
pub use core::menu::MenuLoader;
pub use utils::error::{MenuError, Result};
