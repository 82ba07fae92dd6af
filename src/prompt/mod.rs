use crate::core::catalog::BoardCatalog;
use crate::domain::model::{Board, ProjectName, ProjectRequest};
use crate::domain::ports::RequestSource;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::validate_project_name;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::ErrorKind;

/// 對話式提示的主題
pub fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// 以 dialoguer 在終端互動收集專案資訊。
/// 名稱不合法時由 dialoguer 重新詢問；Esc / Ctrl+C 視為中止。
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self { theme: theme() }
    }

    pub fn input_project_name(&self) -> Result<ProjectName> {
        let raw: String = Input::with_theme(&self.theme)
            .with_prompt("Project name")
            .validate_with(|input: &String| project_name_error(input))
            .interact_text()
            .map_err(cancelled)?;
        ProjectName::parse(&raw)
    }

    pub fn select_board(&self, catalog: &BoardCatalog) -> Result<Board> {
        let boards: Vec<Board> = catalog.boards().collect();
        let items: Vec<String> = boards.iter().map(|board| board_label(*board)).collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select board")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(cancelled)?;

        selection
            .and_then(|index| boards.get(index).copied())
            .ok_or(ScaffoldError::Aborted)
    }

    pub fn select_processing_system(&self) -> Result<bool> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Use the ZYNQ processing system?")
            .items(&["Yes", "No"])
            .default(0)
            .interact_opt()
            .map_err(cancelled)?;

        match selection {
            None => Err(ScaffoldError::Aborted),
            Some(index) => Ok(index == 0),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSource for TerminalPrompt {
    fn collect(&mut self, catalog: &BoardCatalog) -> Result<ProjectRequest> {
        let name = self.input_project_name()?;
        let board = self.select_board(catalog)?;

        let include_processing_system = if catalog.profile(board)?.processing_system {
            Some(self.select_processing_system()?)
        } else {
            None
        };

        Ok(ProjectRequest {
            name,
            board,
            include_processing_system,
        })
    }
}

fn board_label(board: Board) -> String {
    format!("{} ({})", board.display_name(), board.token())
}

/// dialoguer 的驗證訊息只需要原因
fn project_name_error(input: &str) -> std::result::Result<(), String> {
    validate_project_name(input.trim()).map_err(|e| match e {
        ScaffoldError::InvalidInput { reason, .. } => reason,
        other => other.to_string(),
    })
}

/// Ctrl+C 在 dialoguer 中會以 Interrupted 的 IO 錯誤回傳
fn cancelled(err: dialoguer::Error) -> ScaffoldError {
    let dialoguer::Error::IO(err) = err;
    if err.kind() == ErrorKind::Interrupted {
        ScaffoldError::Aborted
    } else {
        ScaffoldError::IoError(err)
    }
}
