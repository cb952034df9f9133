use crate::core::parser::{parse_csv, RowContext};
use crate::core::scanner::scan_sources;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{SourceFile, TransformResult};
use crate::utils::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};

pub struct CatalogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    timestamp: Option<DateTime<Utc>>,
}

impl<S: Storage, C: ConfigProvider> CatalogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            timestamp: None,
        }
    }

    /// Pins `lastUpdated` instead of using the wall clock.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn last_updated(&self) -> String {
        self.timestamp
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CatalogPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceFile>> {
        let sources = scan_sources(&self.storage, &self.config).await?;
        tracing::debug!("Selected {} CSV file(s)", sources.len());
        Ok(sources)
    }

    async fn transform(&self, files: Vec<SourceFile>) -> Result<TransformResult> {
        let last_updated = self.last_updated();
        let mut products = Vec::new();
        let mut reports = Vec::with_capacity(files.len());

        for file in &files {
            tracing::info!("📄 Reading {}...", file.file_name);
            let contents = self.storage.read_file(&file.path).await?;

            let ctx = RowContext {
                store: file.store.clone(),
                fallback_category: self.config.fallback_category().to_string(),
                include_size: self.config.include_size(),
                last_updated: last_updated.clone(),
            };
            let (file_products, report) = parse_csv(file, &contents, &ctx)?;

            tracing::debug!(
                "{}: {} loaded, {} skipped",
                file.file_name,
                report.loaded,
                report.skipped.len()
            );
            products.extend(file_products);
            reports.push(report);
        }

        Ok(TransformResult { products, reports })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        let json_data = serde_json::to_vec_pretty(&result.products)?;
        tracing::debug!(
            "Writing {} products ({} bytes) to {}",
            result.products.len(),
            json_data.len(),
            output_path
        );
        self.storage.write_file(&output_path, &json_data).await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{MockConfig, MockStorage};
    use crate::domain::model::ProductRecord;
    use crate::utils::error::EtlError;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_extract_detects_stores() {
        let storage = MockStorage::new();
        storage.put("csv/araz_march.csv", b"name,price\n").await;
        storage.put("csv/store_export.csv", b"name,price\n").await;

        let pipeline = CatalogPipeline::new(storage, MockConfig::new(Some("csv")));
        let sources = pipeline.extract().await.unwrap();

        let stores: Vec<&str> = sources.iter().map(|s| s.store.as_str()).collect();
        assert_eq!(stores, vec!["Araz", "Store Export"]);
    }

    #[tokio::test]
    async fn test_transform_keeps_file_then_row_order() {
        let storage = MockStorage::new();
        storage
            .put("csv/araz.csv", "name,price\nMilk 1L,2.50\nTea,3\n".as_bytes())
            .await;
        storage
            .put("csv/bravo.csv", "Məhsul;Qiymət\nMilk 1L;2,30\n".as_bytes())
            .await;

        let pipeline = CatalogPipeline::new(storage, MockConfig::new(Some("csv")))
            .with_timestamp(fixed_time());
        let files = pipeline.extract().await.unwrap();
        let result = pipeline.transform(files).await.unwrap();

        let summary: Vec<(&str, &str, f64)> = result
            .products
            .iter()
            .map(|p| (p.name.as_str(), p.stores[0].name.as_str(), p.stores[0].price))
            .collect();
        assert_eq!(
            summary,
            vec![("Milk 1L", "Araz", 2.50), ("Tea", "Araz", 3.0), ("Milk 1L", "Bravo", 2.30)]
        );
        assert_eq!(result.reports.len(), 2);
        assert_eq!(result.reports[1].delimiter, b';');
        assert!(result
            .products
            .iter()
            .all(|p| p.last_updated == "2024-03-01T10:00:00.000Z"));
    }

    #[tokio::test]
    async fn test_transform_missing_file_is_an_error() {
        let storage = MockStorage::new();
        let pipeline = CatalogPipeline::new(storage, MockConfig::new(Some("csv")));
        let files = vec![SourceFile {
            path: "csv/gone.csv".to_string(),
            file_name: "gone.csv".to_string(),
            store: "Gone".to_string(),
        }];

        let err = pipeline.transform(files).await.unwrap_err();
        assert!(matches!(err, EtlError::IoError(_)));
    }

    #[tokio::test]
    async fn test_load_writes_pretty_unescaped_json() {
        let storage = MockStorage::new();
        storage
            .put("csv/araz.csv", "name,price,discount\nSüd 1L,2.50,0%\n".as_bytes())
            .await;

        let pipeline = CatalogPipeline::new(storage.clone(), MockConfig::new(Some("csv")))
            .with_timestamp(fixed_time());
        let files = pipeline.extract().await.unwrap();
        let result = pipeline.transform(files).await.unwrap();
        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "out/products.json");
        let written = storage.get_file("out/products.json").await.unwrap();
        let text = String::from_utf8(written).unwrap();

        assert!(text.starts_with("[\n  {\n    \"id\": \"araz_2_"));
        assert!(text.contains("\"name\": \"Süd 1L\""));
        assert!(text.contains("\"category\": \"Digər\""));
        assert!(!text.contains("discount"));
        assert!(!text.contains("\"size\""));

        let parsed: Vec<ProductRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].stores[0].price, 2.50);
    }
}
