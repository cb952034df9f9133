pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::TomlConfig;
pub use crate::core::{etl::ConversionSummary, etl::EtlEngine, pipeline::CatalogPipeline};
pub use domain::model::{FileReport, ProductRecord, SkipReason, StoreOffer};
pub use utils::error::{EtlError, Result};
