use crate::core::Pipeline;
use crate::domain::model::{FileReport, ProductRecord};
use crate::utils::error::{EtlError, Result};

const SAMPLE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub output_path: String,
    pub files: usize,
    pub products: usize,
    pub skipped_rows: usize,
    pub reports: Vec<FileReport>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ConversionSummary> {
        println!("{}", "=".repeat(60));
        println!("📊 CSV TO JSON CONVERTER");
        println!("{}", "=".repeat(60));
        println!();

        // Extract
        println!("📥 Converting CSV files to JSON...\n");
        let files = self.pipeline.extract().await?;
        println!("Found {} CSV file(s):\n", files.len());
        let file_count = files.len();

        // Transform
        let result = self.pipeline.transform(files).await?;
        for report in &result.reports {
            println!("   📄 {}", report.path);
            println!(
                "      ✅ Loaded {} products from {}",
                report.loaded, report.store
            );
            if !report.skipped.is_empty() {
                println!(
                    "      ⚠️  Skipped {} row(s) ({} malformed)",
                    report.skipped.len(),
                    report.malformed_rows()
                );
            }
        }
        println!("\n📊 Total products loaded: {}\n", result.products.len());

        if result.products.is_empty() {
            return Err(EtlError::NoProducts);
        }

        print_samples(&result.products);

        let products = result.products.len();
        let skipped_rows = result.total_skipped();
        let reports = result.reports.clone();

        // Load
        let output_path = self.pipeline.load(result).await?;
        println!("💾 Saved {} products to {}\n", products, output_path);
        tracing::info!(
            "Converted {} file(s): {} products, {} rows skipped",
            file_count,
            products,
            skipped_rows
        );

        Ok(ConversionSummary {
            output_path,
            files: file_count,
            products,
            skipped_rows,
            reports,
        })
    }
}

fn print_samples(products: &[ProductRecord]) {
    println!("📝 Sample products:\n");
    for (i, product) in products.iter().take(SAMPLE_COUNT).enumerate() {
        println!("{}\n", format_sample(i + 1, product));
    }
}

pub fn format_sample(position: usize, product: &ProductRecord) -> String {
    let mut lines = vec![
        format!("   {}. {}", position, product.name),
        format!("      Category: {}", product.category),
    ];

    if let Some(store) = product.stores.first() {
        let discount = store
            .discount
            .map(|d| format!(" (-{:.0}%)", d))
            .unwrap_or_default();
        lines.push(format!(
            "      Store: {} - {:.2}₼{}",
            store.name, store.price, discount
        ));
    }

    lines.join("\n")
}
