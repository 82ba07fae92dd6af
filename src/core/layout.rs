use crate::domain::model::{ProjectName, ScaffoldLayout};
use crate::utils::error::{Result, ScaffoldError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const STAGE: &str = "create project directory";

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryBuilder;

impl DirectoryBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 建立 `<base>/<name>` 以及固定的子目錄，回傳專案根目錄。
    ///
    /// 根目錄已存在時回傳 `PathConflict`，不會合併進既有目錄。
    /// 失敗時不會清除已建立的目錄。
    pub fn build(&self, base: &Path, name: &ProjectName) -> Result<PathBuf> {
        let root = base.join(name.as_str());

        // create_dir 本身就會在目錄已存在時失敗，不需要先檢查
        match fs::create_dir(&root) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ScaffoldError::PathConflict { path: root });
            }
            Err(e) => return Err(ScaffoldError::filesystem(STAGE, root, e)),
        }
        tracing::debug!("Created project root {}", root.display());

        for dir in ScaffoldLayout::DIRECTORIES {
            let path = root.join(dir);
            fs::create_dir(&path).map_err(|e| ScaffoldError::filesystem(STAGE, &path, e))?;
            tracing::debug!("Created {}", path.display());
        }

        Ok(root)
    }
}
