use lazy_static::lazy_static;
use regex::Regex;

const CURRENCY_TOKENS: [&str; 2] = ["₼", "AZN"];

lazy_static! {
    // 1l, 2 L, 500ml, 1,5kq, 100qr, 10 ədəd ...
    static ref SIZE_TOKEN: Regex = Regex::new(
        r"(?i)(\d+[.,]?\d*)\s*(l|lt|litr|ml|kq|q|qr|qram|gr|gram|kg|əd|ədəd)"
    ).expect("SIZE_TOKEN regex is valid");
}

/// Parses a price cell such as `"12,50 ₼"` or `"AZN 12.50"`.
///
/// Anything that does not parse to a finite number becomes `0.0`, which the
/// row acceptance check later rejects.
pub fn clean_price(raw: &str) -> f64 {
    let mut value = raw.to_string();
    for token in CURRENCY_TOKENS {
        value = value.replace(token, "");
    }
    let value = value.trim().replace(',', ".");

    match value.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => price,
        _ => 0.0,
    }
}

/// Parses a discount cell such as `"-10%"`. Only strictly positive values count.
pub fn clean_discount(raw: &str) -> Option<f64> {
    let value = raw.replace(['%', '-'], "");

    match value.trim().parse::<f64>() {
        Ok(discount) if discount.is_finite() && discount > 0.0 => Some(discount),
        _ => None,
    }
}

/// Returns the first size token in a product name verbatim, or `""`.
pub fn extract_size(name: &str) -> String {
    SIZE_TOKEN
        .find(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
