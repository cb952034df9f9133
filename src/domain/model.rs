use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry, serialized exactly as the downstream catalog app reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub is_promotional: bool,
    pub last_updated: String,
    pub stores: Vec<StoreOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOffer {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    pub in_stock: bool,
    pub store_id: String,
}

/// A CSV file selected for conversion together with the store it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub file_name: String,
    pub store: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MissingName,
    MissingPrice,
    NonPositivePrice(f64),
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "no product name"),
            SkipReason::MissingPrice => write!(f, "no price column"),
            SkipReason::NonPositivePrice(price) => write!(f, "price {} is not positive", price),
            SkipReason::Malformed(message) => write!(f, "malformed row: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(Box<ProductRecord>),
    Skipped(SkippedRow),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: String,
    pub store: String,
    pub delimiter: u8,
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

impl FileReport {
    pub fn malformed_rows(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::Malformed(_)))
            .count()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub products: Vec<ProductRecord>,
    pub reports: Vec<FileReport>,
}

impl TransformResult {
    pub fn total_skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped.len()).sum()
    }
}

/// A store brand recognized by a substring of the CSV filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownStore {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl KnownStore {
    pub fn new(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn builtin() -> Vec<KnownStore> {
        vec![
            KnownStore::new("Araz", &["araz"]),
            KnownStore::new("Bravo", &["bravo"]),
            KnownStore::new("BazarStore", &["bazarstore", "bazar"]),
        ]
    }
}
