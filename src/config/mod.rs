#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::ports::DEFAULT_OUTPUT_PATH;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_output_path, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "csv-to-json")]
#[command(about = "Convert per-store CSV product exports into one JSON catalog")]
pub struct CliConfig {
    /// Folder containing the CSV files (defaults to the first of
    /// data/csv, app/data/csv, csv, downloads, . that holds CSV files)
    pub csv_folder: Option<String>,

    /// Output JSON file [default: app/data/products.json]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Attach the size token found in the product name as `size`
    #[arg(long)]
    pub include_size: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn csv_folder(&self) -> Option<&str> {
        self.csv_folder.as_deref()
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn include_size(&self) -> bool {
        self.include_size
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(folder) = &self.csv_folder {
            validate_path("csv_folder", folder)?;
        }
        validate_output_path("output", self.output_path())
    }
}
