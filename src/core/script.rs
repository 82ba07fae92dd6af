use crate::domain::model::{BoardProfile, GeneratedScript, ProjectRequest, ScaffoldLayout};
use crate::utils::error::{Result, ScaffoldError};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const STAGE: &str = "write project script";

/// 建立 ZYNQ PS7 block design 的固定指令
pub const PROCESSING_SYSTEM_BLOCK: [&str; 7] = [
    "create_bd_design \"design_1\"",
    "update_compile_order -fileset sources_1",
    "startgroup",
    "create_bd_cell -type ip -vlnv xilinx.com:ip:processing_system7:5.5 processing_system7_0",
    "endgroup",
    "apply_bd_automation -rule xilinx.com:bd_rule:processing_system7 -config {make_external \"FIXED_IO, DDR\" apply_board_preset \"1\" Master \"Disable\" Slave \"Disable\" }  [get_bd_cells processing_system7_0]",
    "save_bd_design",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptEmitter;

impl ScriptEmitter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        request: &ProjectRequest,
        profile: &BoardProfile,
        project_root: &Path,
    ) -> GeneratedScript {
        let name = request.name.as_str();
        // Tcl 路徑一律使用正斜線
        let root = project_root.to_string_lossy().replace('\\', "/");

        let mut script = GeneratedScript::new();
        script.push(format!(
            "create_project {name}_proj {root}/{name}_proj -part {part}",
            part = profile.part
        ));
        script.push(profile.board_preset.clone());

        // PS 區塊只取決於開發板設定與使用者的選擇
        if profile.processing_system && request.wants_processing_system() {
            for line in PROCESSING_SYSTEM_BLOCK {
                script.push(line);
            }
        }

        script
    }

    /// 寫入 `tcl/new_project_gen.tcl` 並同步到磁碟
    pub fn emit(&self, script: &GeneratedScript, project_root: &Path) -> Result<PathBuf> {
        let path = ScaffoldLayout::script_path(project_root);
        let fs_err = |e| ScaffoldError::filesystem(STAGE, &path, e);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(fs_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(script.to_text().as_bytes()).map_err(fs_err)?;
        let file = writer.into_inner().map_err(|e| fs_err(e.into_error()))?;
        file.sync_all().map_err(fs_err)?;

        tracing::debug!("Wrote {} lines to {}", script.line_count(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::BoardCatalog;
    use crate::domain::model::{Board, ProjectName};
    use tempfile::TempDir;

    fn request(board: Board, include_processing_system: Option<bool>) -> ProjectRequest {
        ProjectRequest {
            name: ProjectName::parse("demo").unwrap(),
            board,
            include_processing_system,
        }
    }

    #[test]
    fn test_render_without_processing_system() {
        let catalog = BoardCatalog::builtin(Path::new("/boards"));
        let profile = catalog.profile(Board::ArtyS7).unwrap();
        let script = ScriptEmitter::new().render(
            &request(Board::ArtyS7, None),
            profile,
            Path::new("/work/demo"),
        );

        assert_eq!(
            script.lines(),
            &[
                "create_project demo_proj /work/demo/demo_proj -part xc7s25csga324-1".to_string(),
                profile.board_preset.clone(),
            ]
        );
    }

    #[test]
    fn test_render_processing_system_opt_out() {
        let catalog = BoardCatalog::builtin(Path::new("/boards"));
        let profile = catalog.profile(Board::PynqZ1).unwrap();
        let script = ScriptEmitter::new().render(
            &request(Board::PynqZ1, Some(false)),
            profile,
            Path::new("/work/demo"),
        );
        assert_eq!(script.line_count(), 2);
    }

    #[test]
    fn test_render_processing_system_block() {
        let catalog = BoardCatalog::builtin(Path::new("/boards"));
        let profile = catalog.profile(Board::PynqZ1).unwrap();
        let script = ScriptEmitter::new().render(
            &request(Board::PynqZ1, Some(true)),
            profile,
            Path::new("/work/demo"),
        );

        assert_eq!(script.line_count(), 2 + PROCESSING_SYSTEM_BLOCK.len());
        assert_eq!(&script.lines()[2..], &PROCESSING_SYSTEM_BLOCK.map(String::from));
    }

    #[test]
    fn test_render_follows_profile_capability() {
        let catalog = BoardCatalog::builtin(Path::new("/boards"));
        let mut profile = catalog.profile(Board::PynqZ1).unwrap().clone();
        profile.processing_system = false;

        let script = ScriptEmitter::new().render(
            &request(Board::PynqZ1, Some(true)),
            &profile,
            Path::new("/work/demo"),
        );
        assert_eq!(script.line_count(), 2);
    }

    #[test]
    fn test_render_uses_forward_slashes() {
        let catalog = BoardCatalog::builtin(Path::new("/boards"));
        let profile = catalog.profile(Board::ArtyS7).unwrap();
        let script = ScriptEmitter::new().render(
            &request(Board::ArtyS7, None),
            profile,
            Path::new("C:\\Users\\me\\demo"),
        );
        assert!(script.lines()[0].contains("C:/Users/me/demo/demo_proj"));
    }

    #[test]
    fn test_emit_writes_file_once() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("tcl")).unwrap();
        let mut script = GeneratedScript::new();
        script.push("line one");
        script.push("line two");

        let emitter = ScriptEmitter::new();
        let path = emitter.emit(&script, temp_dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line one\nline two\n");

        // 不覆寫既有腳本
        let err = emitter.emit(&script, temp_dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }
}
