use crate::domain::model::KnownStore;
use std::path::Path;

/// Derives the store display name from a CSV filename.
///
/// Known brands are matched case-insensitively by alias substring, in list
/// order. Unknown files fall back to a title-cased version of the file stem.
pub fn detect_store_name(file_name: &str, known_stores: &[KnownStore]) -> String {
    let lower = file_name.to_lowercase();

    for store in known_stores {
        if store
            .aliases
            .iter()
            .any(|alias| lower.contains(&alias.to_lowercase()))
        {
            return store.name.clone();
        }
    }

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    title_case(&stem.replace('_', " "))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_alpha = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_alpha {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_alpha = true;
        } else {
            result.push(ch);
            previous_is_alpha = false;
        }
    }

    result
}
