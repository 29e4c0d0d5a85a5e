// Application modules
pub mod ai;
pub mod config;
pub mod core;
pub mod logger;
pub mod profile;
pub mod terminal;

pub use ai::local::{classify, select_response, Category, CATEGORY_TABLE, FALLBACK_RESPONSE};
pub use config::Config;
pub use crate::core::{PortfolioAgent, ResponseSource};
