use crate::core::cleaning::{clean_discount, clean_price, extract_size};
use crate::core::columns::{Cell, ColumnMap, Field};
use crate::core::dialect::detect_delimiter;
use crate::core::ids::{product_id, store_offer_id};
use crate::domain::model::{
    FileReport, ProductRecord, RowOutcome, SkipReason, SkippedRow, SourceFile, StoreOffer,
};
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord};

/// Settings shared by every row of a conversion run.
#[derive(Debug, Clone)]
pub struct RowContext {
    pub store: String,
    pub fallback_category: String,
    pub include_size: bool,
    pub last_updated: String,
}

/// Builds a record from one CSV row, or explains why the row is skipped.
pub fn parse_row(
    row: usize,
    record: &StringRecord,
    columns: &ColumnMap,
    ctx: &RowContext,
) -> RowOutcome {
    // short rows may drop the price or discount cell, never a text cell
    for field in [Field::Name, Field::Category, Field::Image] {
        if columns.cell(field, record) == Cell::Missing {
            let message = format!("no {:?} cell in a row of {} fields", field, record.len());
            return skipped(row, SkipReason::Malformed(message));
        }
    }

    let name = match columns.get(Field::Name, record).map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return skipped(row, SkipReason::MissingName),
    };

    let price = match columns.cell(Field::Price, record) {
        Cell::Value(raw) => clean_price(raw),
        Cell::Missing => 0.0,
        Cell::Unmapped => return skipped(row, SkipReason::MissingPrice),
    };
    if price <= 0.0 {
        return skipped(row, SkipReason::NonPositivePrice(price));
    }

    let category = columns
        .get(Field::Category, record)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(ctx.fallback_category.as_str())
        .to_string();
    let image = columns
        .get(Field::Image, record)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let discount = columns.get(Field::Discount, record).and_then(clean_discount);

    let size = if ctx.include_size {
        Some(extract_size(name)).filter(|s| !s.is_empty())
    } else {
        None
    };

    RowOutcome::Accepted(Box::new(ProductRecord {
        id: product_id(&ctx.store, row, name),
        name: name.to_string(),
        category,
        image,
        size,
        is_promotional: discount.is_some(),
        last_updated: ctx.last_updated.clone(),
        stores: vec![StoreOffer {
            name: ctx.store.clone(),
            price,
            discount,
            in_stock: true,
            store_id: store_offer_id(&ctx.store, name),
        }],
    }))
}

fn skipped(row: usize, reason: SkipReason) -> RowOutcome {
    RowOutcome::Skipped(SkippedRow { row, reason })
}

/// Parses a whole CSV file. Only an unreadable header row fails the file;
/// every other problem is recorded per row in the report.
pub fn parse_csv(
    file: &SourceFile,
    contents: &[u8],
    ctx: &RowContext,
) -> Result<(Vec<ProductRecord>, FileReport)> {
    let contents = contents.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(contents);
    let delimiter = detect_delimiter(contents);

    tracing::debug!(
        "Detected delimiter {:?} for {}",
        delimiter as char,
        file.file_name
    );

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(contents);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers);
    tracing::debug!("Resolved columns for {}: {:?}", file.file_name, columns);

    let mut products = Vec::new();
    let mut skipped_rows = Vec::new();

    // the header is row 1
    for (row, result) in reader.records().enumerate().map(|(i, r)| (i + 2, r)) {
        let outcome = match result {
            Ok(record) => parse_row(row, &record, &columns, ctx),
            Err(e) => skipped(row, SkipReason::Malformed(e.to_string())),
        };

        match outcome {
            RowOutcome::Accepted(product) => products.push(*product),
            RowOutcome::Skipped(skip) => {
                if let SkipReason::Malformed(_) = skip.reason {
                    tracing::warn!("⚠️  Error on row {}: {}", skip.row, skip.reason);
                } else {
                    tracing::debug!("Skipping row {}: {}", skip.row, skip.reason);
                }
                skipped_rows.push(skip);
            }
        }
    }

    let report = FileReport {
        path: file.path.clone(),
        store: file.store.clone(),
        delimiter,
        loaded: products.len(),
        skipped: skipped_rows,
    };

    Ok((products, report))
}
