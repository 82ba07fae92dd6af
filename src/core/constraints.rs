use crate::core::catalog::BoardCatalog;
use crate::domain::model::{Board, ScaffoldLayout};
use crate::utils::error::{Result, ScaffoldError};
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

const STAGE: &str = "copy constraints file";

#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintsProvisioner;

impl ConstraintsProvisioner {
    pub fn new() -> Self {
        Self
    }

    /// 依檔名決定約束檔在新專案中的位置
    pub fn destination(source: &Path, project_root: &Path) -> Result<PathBuf> {
        let file_name = source.file_name().ok_or_else(|| {
            ScaffoldError::filesystem(
                STAGE,
                source,
                Error::new(ErrorKind::InvalidInput, "constraints source has no file name"),
            )
        })?;
        Ok(ScaffoldLayout::constraints_dir(project_root).join(file_name))
    }

    /// 將開發板的約束檔原封不動複製到 `constraints/`
    pub fn provision(
        &self,
        catalog: &BoardCatalog,
        board: Board,
        project_root: &Path,
    ) -> Result<PathBuf> {
        let profile = catalog.profile(board)?;
        let source = &profile.constraints_source;
        let destination = Self::destination(source, project_root)?;

        if !source.is_file() {
            return Err(ScaffoldError::filesystem(
                STAGE,
                source,
                Error::new(ErrorKind::NotFound, "constraints source file not found"),
            ));
        }

        let bytes = fs::copy(source, &destination)
            .map_err(|e| ScaffoldError::filesystem(STAGE, source, e))?;
        tracing::debug!(
            "Copied {} ({} bytes) to {}",
            source.display(),
            bytes,
            destination.display()
        );

        Ok(destination)
    }
}
