use crate::config::toml_config::ScaffoldConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "fpga-scaffold.toml";

#[derive(Debug, Clone, Parser)]
#[command(name = "fpga-scaffold")]
#[command(about = "Scaffold a new Vivado project with board constraints and a project Tcl script")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./fpga-scaffold.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory in which the new project is created
    #[arg(long, env = "FPGA_SCAFFOLD_BASE_PATH")]
    pub base_path: Option<PathBuf>,

    /// Directory holding the board constraints (.xdc) files
    #[arg(long, env = "FPGA_SCAFFOLD_CONSTRAINTS_DIR")]
    pub constraints_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// 讀取設定檔；未指定時僅在預設檔案存在才讀取
    pub fn load_file(&self, cwd: &Path) -> Result<ScaffoldConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                ScaffoldConfig::from_file(cwd.join(path))
            }
            None => {
                let default_path = cwd.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    tracing::info!("📁 Loading configuration from: {}", default_path.display());
                    ScaffoldConfig::from_file(default_path)
                } else {
                    tracing::debug!("No configuration file, using built-in boards");
                    Ok(ScaffoldConfig::default())
                }
            }
        }
    }

    pub fn settings(&self, cwd: &Path) -> Result<Settings> {
        let file = self.load_file(cwd)?;
        Settings::resolve(
            &file,
            self.base_path.as_deref(),
            self.constraints_dir.as_deref(),
            cwd,
        )
    }
}
