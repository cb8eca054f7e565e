pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::json_model::ModelDocument;
pub use crate::adapters::sink::{CollectingSink, TracingSink};
pub use crate::config::RunSettings;
pub use crate::core::extractor::ExtractionPolicy;
pub use crate::core::pass::{AttrInitPass, PassOptions, PassReport};
pub use crate::core::scanner::{customization_uris, is_customization_tag_name, NAMESPACE_URI, OPTION_NAME, TAG_NAME};
pub use crate::utils::error::{AttrInitError, Result};
