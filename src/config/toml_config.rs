use crate::core::ConfigProvider;
use crate::domain::model::KnownStore;
use crate::domain::ports::{
    DEFAULT_CANDIDATE_FOLDERS, DEFAULT_FALLBACK_CATEGORY, DEFAULT_OUTPUT_PATH,
};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_output_path, validate_path, Validate,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

lazy_static! {
    static ref ENV_VAR: Regex = Regex::new(r"\$\{([^}]+)\}").expect("ENV_VAR regex is valid");
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    #[serde(default)]
    pub stores: Vec<KnownStore>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub folder: Option<String>,
    pub candidate_folders: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub include_size: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    pub fallback_category: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CSV_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// Command line values take precedence over the file.
    pub fn with_overrides(
        mut self,
        csv_folder: Option<String>,
        output_path: Option<String>,
        include_size: bool,
    ) -> Self {
        if csv_folder.is_some() {
            self.source.folder = csv_folder;
        }
        if output_path.is_some() {
            self.output.path = output_path;
        }
        if include_size {
            self.output.include_size = Some(true);
        }
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(folder) = &self.source.folder {
            validate_path("source.folder", folder)?;
        }

        if let Some(candidates) = &self.source.candidate_folders {
            for candidate in candidates {
                validate_path("source.candidate_folders", candidate)?;
            }
        }

        validate_output_path("output.path", self.output_path())?;

        if let Some(category) = &self.transform.fallback_category {
            validate_non_empty_string("transform.fallback_category", category)?;
        }

        for store in &self.stores {
            validate_non_empty_string("stores.name", &store.name)?;
            for alias in &store.aliases {
                validate_non_empty_string("stores.aliases", alias)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn csv_folder(&self) -> Option<&str> {
        self.source.folder.as_deref()
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn include_size(&self) -> bool {
        self.output.include_size.unwrap_or(false)
    }

    fn candidate_folders(&self) -> Vec<String> {
        match &self.source.candidate_folders {
            Some(candidates) => candidates.clone(),
            None => DEFAULT_CANDIDATE_FOLDERS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }

    fn fallback_category(&self) -> &str {
        self.transform
            .fallback_category
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK_CATEGORY)
    }

    /// Built-in brands first, then the configured ones. A store without
    /// aliases is matched by its own name.
    fn known_stores(&self) -> Vec<KnownStore> {
        let mut stores = KnownStore::builtin();
        stores.extend(self.stores.iter().map(|store| {
            let mut store = store.clone();
            if store.aliases.is_empty() {
                store.aliases.push(store.name.to_lowercase());
            }
            store
        }));
        stores
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
