use crate::core::catalog::BoardCatalog;
use crate::domain::model::{Board, ProjectName, ProjectRequest};
use crate::domain::ports::RequestSource;
use crate::utils::error::{Result, ScaffoldError};
use std::io::{BufRead, Write};

pub const NAME_PROMPT: &str = "Enter project name: ";
pub const BOARD_PROMPT: &str = "Type \"P\" for PYNQ-Z1 board, or \"A\" for Arty S7-25 board: ";
pub const PROCESSING_SYSTEM_PROMPT: &str =
    "Do you want to use the ZYNQ processing system? type Y/N: ";

pub const BOARD_ERROR: &str = "Error, undefined board entered.";
pub const CHOICE_ERROR: &str = "Error, please type a choice";

/// 在開發板與 Y/N 提示下輸入此字串即可中止
pub const ABORT_TOKEN: &str = "abort";

/// 從終端收集專案資訊，輸入不合法時會重新詢問
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 讀取一行；EOF 時回傳 Aborted
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("End of input reached while prompting");
            return Err(ScaffoldError::Aborted);
        }
        Ok(line.trim().to_string())
    }

    /// 選項提示額外接受 abort；專案名稱可以叫 abort
    fn ask_choice(&mut self, prompt: &str) -> Result<String> {
        let answer = self.ask(prompt)?;
        if answer.eq_ignore_ascii_case(ABORT_TOKEN) {
            return Err(ScaffoldError::Aborted);
        }
        Ok(answer)
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn prompt_project_name(&mut self) -> Result<ProjectName> {
        loop {
            let answer = self.ask(NAME_PROMPT)?;
            match ProjectName::parse(&answer) {
                Ok(name) => return Ok(name),
                Err(ScaffoldError::InvalidInput { reason, .. }) => {
                    tracing::debug!("Rejected project name {:?}: {}", answer, reason);
                    self.complain(&format!("Error, invalid project name: {}", reason))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn prompt_board(&mut self) -> Result<Board> {
        loop {
            let answer = self.ask_choice(BOARD_PROMPT)?;
            match Board::from_token(&answer) {
                Some(board) => return Ok(board),
                None => self.complain(BOARD_ERROR)?,
            }
        }
    }

    pub fn prompt_processing_system(&mut self) -> Result<bool> {
        loop {
            let answer = self.ask_choice(PROCESSING_SYSTEM_PROMPT)?;
            if answer.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            self.complain(CHOICE_ERROR)?;
        }
    }
}

impl<R: BufRead, W: Write> RequestSource for InputCollector<R, W> {
    fn collect(&mut self, catalog: &BoardCatalog) -> Result<ProjectRequest> {
        let name = self.prompt_project_name()?;
        let board = self.prompt_board()?;

        let include_processing_system = if catalog.profile(board)?.processing_system {
            Some(self.prompt_processing_system()?)
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

/// 已決定好的請求，用於測試或非互動情境
impl RequestSource for ProjectRequest {
    fn collect(&mut self, _catalog: &BoardCatalog) -> Result<ProjectRequest> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    fn collector(script: &str) -> InputCollector<Cursor<Vec<u8>>, Vec<u8>> {
        InputCollector::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_board_reprompts_until_valid() {
        let mut input = collector("x\nZYNQ\n\np\n");
        assert_eq!(input.prompt_board().unwrap(), Board::PynqZ1);

        let transcript = String::from_utf8(input.into_output()).unwrap();
        assert_eq!(transcript.matches(BOARD_PROMPT).count(), 4);
        assert_eq!(transcript.matches(BOARD_ERROR).count(), 3);
    }

    #[test]
    fn test_name_reprompts_on_invalid() {
        let mut input = collector("\nmy project\ndemo1\n");
        assert_eq!(input.prompt_project_name().unwrap().as_str(), "demo1");

        let transcript = String::from_utf8(input.into_output()).unwrap();
        assert_eq!(transcript.matches("Error, invalid project name").count(), 2);
    }

    #[test]
    fn test_processing_system_choice() {
        let mut input = collector("maybe\nN\n");
        assert!(!input.prompt_processing_system().unwrap());

        let mut input = collector("y\n");
        assert!(input.prompt_processing_system().unwrap());
    }

    #[test]
    fn test_abort_and_eof() {
        let mut input = collector("demo\nABORT\n");
        assert!(input.prompt_project_name().is_ok());
        assert!(matches!(input.prompt_board(), Err(ScaffoldError::Aborted)));

        let mut input = collector("P\nabort\n");
        assert!(input.prompt_board().is_ok());
        assert!(matches!(
            input.prompt_processing_system(),
            Err(ScaffoldError::Aborted)
        ));

        // EOF 在任何提示下都會中止
        let mut input = collector("demo\nq\n");
        assert!(input.prompt_project_name().is_ok());
        assert!(matches!(input.prompt_board(), Err(ScaffoldError::Aborted)));
        assert!(matches!(
            collector("").prompt_project_name(),
            Err(ScaffoldError::Aborted)
        ));
    }

    #[test]
    fn test_abort_is_a_valid_project_name() {
        let mut input = collector("abort\n");
        assert_eq!(input.prompt_project_name().unwrap().as_str(), "abort");
    }

    #[test]
    fn test_collect_skips_processing_system_for_arty() {
        let catalog = BoardCatalog::builtin(Path::new("/boards"));
        let mut input = collector("demo1\nA\n");
        let request = input.collect(&catalog).unwrap();

        assert_eq!(request.board, Board::ArtyS7);
        assert_eq!(request.include_processing_system, None);
        let transcript = String::from_utf8(input.into_output()).unwrap();
        assert!(!transcript.contains(PROCESSING_SYSTEM_PROMPT));
    }

    #[test]
    fn test_collect_asks_processing_system_for_pynq() {
        let catalog = BoardCatalog::builtin(Path::new("/boards"));
        let mut input = collector("demo2\nP\nY\n");
        let request = input.collect(&catalog).unwrap();

        assert_eq!(request.board, Board::PynqZ1);
        assert_eq!(request.include_processing_system, Some(true));
    }
}
