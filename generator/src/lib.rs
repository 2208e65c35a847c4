pub mod config;
pub mod error;
pub mod files;
pub mod page;
pub mod site;

pub use config::SiteConfig;
pub use error::GenerateError;
pub use site::{BuildSummary, PageFailure, Site};
