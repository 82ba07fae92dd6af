use crate::utils::error::Result;
use crate::utils::validation::validate_project_name;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// 支援的開發板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Board {
    /// Digilent Arty S7-25
    #[serde(rename = "arty_s7_25")]
    ArtyS7,
    /// Digilent PYNQ-Z1 (Zynq-7020)
    #[serde(rename = "pynq_z1")]
    PynqZ1,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::ArtyS7, Board::PynqZ1];

    /// 互動輸入時使用的單一字元代號
    pub fn token(self) -> &'static str {
        match self {
            Board::ArtyS7 => "A",
            Board::PynqZ1 => "P",
        }
    }

    /// 解析代號，大小寫不敏感
    pub fn from_token(token: &str) -> Option<Board> {
        Board::ALL
            .into_iter()
            .find(|board| board.token().eq_ignore_ascii_case(token.trim()))
    }

    /// 是否具備 Zynq processing system
    pub fn has_processing_system(self) -> bool {
        match self {
            Board::ArtyS7 => false,
            Board::PynqZ1 => true,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Board::ArtyS7 => "Arty S7-25",
            Board::PynqZ1 => "PYNQ-Z1",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 已驗證的專案名稱
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        validate_project_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRequest {
    pub name: ProjectName,
    pub board: Board,
    /// 只有支援 processing system 的開發板才會有值
    pub include_processing_system: Option<bool>,
}

impl ProjectRequest {
    pub fn wants_processing_system(&self) -> bool {
        self.include_processing_system.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardProfile {
    pub constraints_source: PathBuf,
    pub part: String,
    pub board_preset: String,
    pub processing_system: bool,
}

/// 專案根目錄下固定的子目錄配置
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldLayout;

impl ScaffoldLayout {
    pub const SIMULATION: &'static str = "sim";
    pub const SOURCES: &'static str = "src";
    pub const CONSTRAINTS: &'static str = "constraints";
    pub const IP: &'static str = "ip";
    pub const SCRIPT: &'static str = "tcl";

    /// 建立順序
    pub const DIRECTORIES: [&'static str; 5] = [
        Self::SIMULATION,
        Self::SOURCES,
        Self::CONSTRAINTS,
        Self::IP,
        Self::SCRIPT,
    ];

    pub const SCRIPT_FILE: &'static str = "new_project_gen.tcl";

    pub fn constraints_dir(root: &Path) -> PathBuf {
        root.join(Self::CONSTRAINTS)
    }

    pub fn script_path(root: &Path) -> PathBuf {
        root.join(Self::SCRIPT).join(Self::SCRIPT_FILE)
    }
}

/// 產生的 Tcl 腳本，只能附加
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedScript {
    lines: Vec<String>,
}

impl GeneratedScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 每一行都以換行字元結尾
    pub fn to_text(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}
