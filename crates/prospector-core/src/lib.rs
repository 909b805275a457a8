//! Shared domain types, configuration, and slug generation for Prospector.
//!
//! Every other crate in the workspace depends on this one. It holds the
//! canonical [`NormalizedLead`] record, the [`LeadCollection`] produced by a
//! search, the validated [`SearchParams`] a search is run with, and the
//! environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod error;
pub mod leads;
pub mod search;
pub mod slug;

pub use app_config::{AppConfig, Environment, ExtractStrategy};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use leads::{LeadCollection, NormalizedLead, EMAIL_NOT_AVAILABLE, UNNAMED_BUSINESS};
pub use search::{SearchParams, DEFAULT_CITY, DEFAULT_LIMIT, DEFAULT_QUERY, MAX_LIMIT};
pub use slug::slugify;
