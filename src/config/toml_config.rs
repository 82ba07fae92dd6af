use crate::core::catalog::BoardCatalog;
use crate::domain::model::{Board, BoardProfile};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub base_path: Option<String>,
    pub constraints_dir: Option<String>,
    /// 以開發板名稱 (`arty_s7_25`, `pynq_z1`) 為鍵，逐欄覆寫內建設定
    #[serde(default)]
    pub boards: BTreeMap<String, BoardProfileConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardProfileConfig {
    pub constraints: Option<String>,
    pub part: Option<String>,
    pub board_preset: Option<String>,
    pub processing_system: Option<bool>,
}

impl ScaffoldConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::ConfigError {
                message: format!("cannot read {}: {}", path.display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOME})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScaffoldError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將 `[boards]` 覆寫套用到內建對照表上
    pub fn build_catalog(&self, constraints_dir: &Path) -> Result<BoardCatalog> {
        let mut catalog = BoardCatalog::builtin(constraints_dir);

        for (key, overrides) in &self.boards {
            let board = board_from_key(key)?;
            let mut profile: BoardProfile = catalog.profile(board)?.clone();

            if let Some(constraints) = &overrides.constraints {
                validate_path(&format!("boards.{}.constraints", key), constraints)?;
                profile.constraints_source = resolve(constraints_dir, constraints);
            }
            if let Some(part) = &overrides.part {
                profile.part = part.clone();
            }
            if let Some(board_preset) = &overrides.board_preset {
                profile.board_preset = board_preset.clone();
            }
            if let Some(processing_system) = overrides.processing_system {
                profile.processing_system = processing_system;
            }

            catalog.insert(board, profile)?;
        }

        catalog.validate()?;
        Ok(catalog)
    }
}

impl Validate for ScaffoldConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_path) = &self.base_path {
            validate_path("base_path", base_path)?;
        }
        if let Some(constraints_dir) = &self.constraints_dir {
            validate_path("constraints_dir", constraints_dir)?;
        }
        for key in self.boards.keys() {
            board_from_key(key)?;
        }
        Ok(())
    }
}

fn board_from_key(key: &str) -> Result<Board> {
    match key {
        "arty_s7_25" => Ok(Board::ArtyS7),
        "pynq_z1" => Ok(Board::PynqZ1),
        other => Err(ScaffoldError::InvalidConfigValueError {
            field: "boards".to_string(),
            value: other.to_string(),
            reason: "Unknown board. Valid boards: arty_s7_25, pynq_z1".to_string(),
        }),
    }
}

/// 相對路徑以 `base` 為起點
pub fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
base_path = "/opt/projects"
constraints_dir = "/opt/boards"

[boards.pynq_z1]
part = "xc7z020clg400-2"
"#;

        let config = ScaffoldConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_path.as_deref(), Some("/opt/projects"));
        assert!(config.validate().is_ok());

        let catalog = config.build_catalog(Path::new("/opt/boards")).unwrap();
        let pynq = catalog.profile(Board::PynqZ1).unwrap();
        assert_eq!(pynq.part, "xc7z020clg400-2");
        // 未覆寫的欄位沿用內建值
        assert!(pynq.processing_system);
        assert_eq!(
            pynq.constraints_source,
            PathBuf::from("/opt/boards/PYNQ-Z1_C.xdc")
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FPGA_SCAFFOLD_TEST_HOME", "/home/tester");

        let toml_content = r#"
base_path = "${FPGA_SCAFFOLD_TEST_HOME}/Xilinx_projects"
constraints_dir = "${FPGA_SCAFFOLD_TEST_UNSET_VAR}/boards"
"#;

        let config = ScaffoldConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.base_path.as_deref(),
            Some("/home/tester/Xilinx_projects")
        );
        assert_eq!(
            config.constraints_dir.as_deref(),
            Some("${FPGA_SCAFFOLD_TEST_UNSET_VAR}/boards")
        );

        std::env::remove_var("FPGA_SCAFFOLD_TEST_HOME");
    }

    #[test]
    fn test_relative_constraints_override() {
        let toml_content = r#"
[boards.arty_s7_25]
constraints = "digilent/Arty-S7-25.xdc"
"#;
        let config = ScaffoldConfig::from_toml_str(toml_content).unwrap();
        let catalog = config.build_catalog(Path::new("/opt/boards")).unwrap();
        assert_eq!(
            catalog.profile(Board::ArtyS7).unwrap().constraints_source,
            PathBuf::from("/opt/boards/digilent/Arty-S7-25.xdc")
        );
    }

    #[test]
    fn test_config_validation() {
        let unknown_board = r#"
[boards.basys3]
part = "xc7a35tcpg236-1"
"#;
        let config = ScaffoldConfig::from_toml_str(unknown_board).unwrap();
        assert!(config.validate().is_err());
        assert!(config.build_catalog(Path::new("/opt/boards")).is_err());

        let empty_part = r#"
[boards.arty_s7_25]
part = ""
"#;
        let config = ScaffoldConfig::from_toml_str(empty_part).unwrap();
        assert!(config.build_catalog(Path::new("/opt/boards")).is_err());

        let arty_with_ps = r#"
[boards.arty_s7_25]
processing_system = true
"#;
        let config = ScaffoldConfig::from_toml_str(arty_with_ps).unwrap();
        assert!(config.build_catalog(Path::new("/opt/boards")).is_err());

        assert!(ScaffoldConfig::from_toml_str("base_path = 3").is_err());
        assert!(ScaffoldConfig::from_toml_str("unknown_key = \"x\"").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"base_path = \"/srv/fpga\"\n")
            .unwrap();

        let config = ScaffoldConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_path.as_deref(), Some("/srv/fpga"));
    }
}
