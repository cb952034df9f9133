use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{EtlError, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    unreadable: Arc<Mutex<HashSet<String>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, path: &str, data: &[u8]) {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
    }

    /// Makes `list_files` fail for `dir`, as for a folder without read permission.
    pub async fn deny_listing(&self, dir: &str) {
        self.unreadable.lock().await.insert(dir.to_string());
    }

    pub async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned()
    }
}

fn parent_dir(path: &str) -> &Path {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl Storage for MockStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            EtlError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn list_files(&self, dir: &str) -> Result<Vec<String>> {
        if self.unreadable.lock().await.contains(dir) {
            return Err(EtlError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", dir),
            )));
        }

        let files = self.files.lock().await;
        let mut names: Vec<String> = files
            .keys()
            .filter(|path| parent_dir(path) == Path::new(dir))
            .filter_map(|path| Path::new(path).file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn dir_exists(&self, dir: &str) -> bool {
        let files = self.files.lock().await;
        files
            .keys()
            .any(|path| parent_dir(path).starts_with(Path::new(dir)))
    }
}

pub struct MockConfig {
    pub csv_folder: Option<String>,
    pub output_path: String,
    pub include_size: bool,
}

impl MockConfig {
    pub fn new(csv_folder: Option<&str>) -> Self {
        Self {
            csv_folder: csv_folder.map(str::to_string),
            output_path: "out/products.json".to_string(),
            include_size: false,
        }
    }
}

impl ConfigProvider for MockConfig {
    fn csv_folder(&self) -> Option<&str> {
        self.csv_folder.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn include_size(&self) -> bool {
        self.include_size
    }
}
