use crate::core::store::detect_store_name;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::SourceFile;
use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub fn is_csv(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// CSV file names directly inside `folder`, sorted. A missing folder has none.
pub async fn list_csv_files<S: Storage>(storage: &S, folder: &str) -> Result<Vec<String>> {
    if !storage.dir_exists(folder).await {
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = storage
        .list_files(folder)
        .await?
        .into_iter()
        .filter(|name| is_csv(name))
        .collect();
    names.sort();
    Ok(names)
}

/// Uses the explicit folder when given, otherwise the first candidate that
/// holds at least one CSV file.
pub async fn locate_csv_folder<S: Storage>(
    storage: &S,
    explicit: Option<&str>,
    candidates: &[String],
) -> Result<String> {
    if let Some(folder) = explicit {
        return Ok(folder.to_string());
    }

    for candidate in candidates {
        match list_csv_files(storage, candidate).await {
            Ok(names) if !names.is_empty() => {
                tracing::debug!("Using default CSV folder: {}", candidate);
                return Ok(candidate.clone());
            }
            Ok(_) => tracing::debug!("No CSV files in candidate folder: {}", candidate),
            Err(e) => tracing::debug!("Cannot list candidate folder {}: {}", candidate, e),
        }
    }

    Err(EtlError::NoInputFolder {
        searched: candidates.to_vec(),
    })
}

pub async fn scan_sources<S: Storage, C: ConfigProvider>(
    storage: &S,
    config: &C,
) -> Result<Vec<SourceFile>> {
    let folder =
        locate_csv_folder(storage, config.csv_folder(), &config.candidate_folders()).await?;
    let names = list_csv_files(storage, &folder).await?;

    if names.is_empty() {
        return Err(EtlError::NoCsvFiles { folder });
    }

    let known_stores = config.known_stores();
    let sources = names
        .into_iter()
        .map(|file_name| SourceFile {
            path: Path::new(&folder)
                .join(&file_name)
                .to_string_lossy()
                .to_string(),
            store: detect_store_name(&file_name, &known_stores),
            file_name,
        })
        .collect();

    Ok(sources)
}
