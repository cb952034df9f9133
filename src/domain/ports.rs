use crate::domain::model::{KnownStore, SourceFile, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_OUTPUT_PATH: &str = "app/data/products.json";
pub const DEFAULT_FALLBACK_CATEGORY: &str = "Digər";
pub const DEFAULT_CANDIDATE_FOLDERS: [&str; 5] = ["data/csv", "app/data/csv", "csv", "downloads", "."];

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Names of the regular files directly inside `dir`, sorted.
    fn list_files(&self, dir: &str)
        -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn dir_exists(&self, dir: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Folder given explicitly by the user, if any.
    fn csv_folder(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn include_size(&self) -> bool;

    fn candidate_folders(&self) -> Vec<String> {
        DEFAULT_CANDIDATE_FOLDERS
            .iter()
            .map(|f| f.to_string())
            .collect()
    }

    fn fallback_category(&self) -> &str {
        DEFAULT_FALLBACK_CATEGORY
    }

    fn known_stores(&self) -> Vec<KnownStore> {
        KnownStore::builtin()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceFile>>;
    async fn transform(&self, files: Vec<SourceFile>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
