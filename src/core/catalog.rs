use crate::domain::model::{Board, BoardProfile};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::collections::BTreeMap;
use std::path::Path;

pub const ARTY_S7_25_CONSTRAINTS: &str = "Arty-S7-25-Master.xdc";
pub const PYNQ_Z1_CONSTRAINTS: &str = "PYNQ-Z1_C.xdc";

/// 開發板 -> 設定檔的靜態對照表
#[derive(Debug, Clone, Default)]
pub struct BoardCatalog {
    profiles: BTreeMap<Board, BoardProfile>,
}

impl BoardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 內建的開發板設定，約束檔位於 `constraints_dir`
    pub fn builtin(constraints_dir: &Path) -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            Board::ArtyS7,
            BoardProfile {
                constraints_source: constraints_dir.join(ARTY_S7_25_CONSTRAINTS),
                part: "xc7s25csga324-1".to_string(),
                board_preset:
                    "set_property board_part digilentinc.com:arty-s7-25:part0:1.1 [current_project]"
                        .to_string(),
                processing_system: false,
            },
        );
        profiles.insert(
            Board::PynqZ1,
            BoardProfile {
                constraints_source: constraints_dir.join(PYNQ_Z1_CONSTRAINTS),
                part: "xc7z020clg400-1".to_string(),
                board_preset:
                    "set_property board_part www.digilentinc.com:pynq-z1:part0:1.0 [current_project]"
                        .to_string(),
                processing_system: true,
            },
        );
        Self { profiles }
    }

    /// 加入或取代設定，不接受欄位不完整的設定
    pub fn insert(&mut self, board: Board, profile: BoardProfile) -> Result<()> {
        validate_profile(board, &profile)?;
        self.profiles.insert(board, profile);
        Ok(())
    }

    pub fn profile(&self, board: Board) -> Result<&BoardProfile> {
        self.profiles
            .get(&board)
            .ok_or_else(|| ScaffoldError::ProfileNotFound {
                board: board.display_name().to_string(),
            })
    }

    pub fn boards(&self) -> impl Iterator<Item = Board> + '_ {
        self.profiles.keys().copied()
    }
}

impl Validate for BoardCatalog {
    fn validate(&self) -> Result<()> {
        for board in Board::ALL {
            validate_profile(board, self.profile(board)?)?;
        }
        Ok(())
    }
}

fn validate_profile(board: Board, profile: &BoardProfile) -> Result<()> {
    let field = |name: &str| format!("boards.{}.{}", board.token(), name);
    validate_path(
        &field("constraints"),
        &profile.constraints_source.to_string_lossy(),
    )?;
    validate_non_empty_string(&field("part"), &profile.part)?;
    validate_non_empty_string(&field("board_preset"), &profile.board_preset)?;
    if profile.processing_system && !board.has_processing_system() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field("processing_system"),
            value: "true".to_string(),
            reason: format!("{} has no Zynq processing system", board.display_name()),
        });
    }
    Ok(())
}
