pub mod admin;
pub mod grouper;
pub mod menu;

pub use crate::domain::model::{CategorySection, Categorized, MenuSnapshot};
pub use crate::domain::ports::{BackendClient, ConfigProvider, SessionStore};
pub use crate::utils::error::Result;
