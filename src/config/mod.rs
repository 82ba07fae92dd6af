#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::catalog::BoardCatalog;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::{resolve, ScaffoldConfig};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// 合併旗標、環境變數與設定檔後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    base_path: PathBuf,
    catalog: BoardCatalog,
}

impl Settings {
    pub fn new(base_path: PathBuf, catalog: BoardCatalog) -> Self {
        Self { base_path, catalog }
    }

    /// 優先順序：明確指定的值 > 設定檔 > `cwd`。
    /// `constraints_dir` 未設定時與 base path 相同。
    pub fn resolve(
        file: &ScaffoldConfig,
        base_path: Option<&Path>,
        constraints_dir: Option<&Path>,
        cwd: &Path,
    ) -> Result<Self> {
        file.validate()?;

        let base_path = match (base_path, &file.base_path) {
            (Some(path), _) => cwd.join(path),
            (None, Some(path)) => resolve(cwd, path),
            (None, None) => cwd.to_path_buf(),
        };
        let constraints_dir = match (constraints_dir, &file.constraints_dir) {
            (Some(path), _) => cwd.join(path),
            (None, Some(path)) => resolve(cwd, path),
            (None, None) => base_path.clone(),
        };

        let settings = Self {
            catalog: file.build_catalog(&constraints_dir)?,
            base_path,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn catalog(&self) -> &BoardCatalog {
        &self.catalog
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("base_path", &self.base_path.to_string_lossy())?;
        self.catalog.validate()
    }
}
