use crate::core::constraints::ConstraintsProvisioner;
use crate::core::layout::DirectoryBuilder;
use crate::core::script::ScriptEmitter;
use crate::domain::model::{GeneratedScript, ProjectRequest, ScaffoldLayout};
use crate::domain::ports::{ConfigProvider, RequestSource};
use crate::utils::error::Result;
use serde::Serialize;
use std::path::PathBuf;

/// 成功執行後產生的檔案位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub request: ProjectRequest,
    pub project_root: PathBuf,
    pub constraints_file: PathBuf,
    pub script_path: PathBuf,
    pub script_lines: usize,
}

/// dry run 時輸出的計畫，不會寫入任何檔案
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    pub request: ProjectRequest,
    pub project_root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub constraints_source: PathBuf,
    pub constraints_destination: PathBuf,
    pub script_path: PathBuf,
    pub script: GeneratedScript,
}

pub struct ScaffoldEngine<C: ConfigProvider> {
    config: C,
    builder: DirectoryBuilder,
    provisioner: ConstraintsProvisioner,
    emitter: ScriptEmitter,
}

impl<C: ConfigProvider> ScaffoldEngine<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            builder: DirectoryBuilder::new(),
            provisioner: ConstraintsProvisioner::new(),
            emitter: ScriptEmitter::new(),
        }
    }

    /// 收集輸入 -> 建立目錄 -> 複製約束檔 -> 產生腳本
    ///
    /// 任何一步失敗都會直接中止，已建立的檔案保持原狀。
    pub fn run<S: RequestSource>(&self, source: &mut S) -> Result<ScaffoldOutcome> {
        let catalog = self.config.catalog();
        let request = source.collect(catalog)?;
        tracing::info!(
            "📝 Project '{}' on {} (processing system: {})",
            request.name,
            request.board,
            request.wants_processing_system()
        );
        self.warn_on_unquoted_base_path();

        // 先查表，避免在設定不一致時建立任何目錄
        let profile = catalog.profile(request.board)?;

        let project_root = self.builder.build(self.config.base_path(), &request.name)?;
        tracing::info!("📁 Created project layout at {}", project_root.display());

        let constraints_file = self
            .provisioner
            .provision(catalog, request.board, &project_root)?;
        tracing::info!("📌 Copied constraints to {}", constraints_file.display());

        let script = self.emitter.render(&request, profile, &project_root);
        let script_path = self.emitter.emit(&script, &project_root)?;
        tracing::info!(
            "📜 Generated {} ({} lines)",
            script_path.display(),
            script.line_count()
        );

        Ok(ScaffoldOutcome {
            request,
            project_root,
            constraints_file,
            script_path,
            script_lines: script.line_count(),
        })
    }

    /// 只收集輸入並計算結果，不動檔案系統
    pub fn plan<S: RequestSource>(&self, source: &mut S) -> Result<ScaffoldPlan> {
        let catalog = self.config.catalog();
        let request = source.collect(catalog)?;
        let profile = catalog.profile(request.board)?;
        self.warn_on_unquoted_base_path();

        let project_root = self.config.base_path().join(request.name.as_str());
        let directories = ScaffoldLayout::DIRECTORIES
            .iter()
            .map(|dir| project_root.join(dir))
            .collect();
        let constraints_destination =
            ConstraintsProvisioner::destination(&profile.constraints_source, &project_root)?;
        let script = self.emitter.render(&request, profile, &project_root);

        if project_root.exists() {
            tracing::warn!(
                "⚠️ {} already exists, a real run would fail",
                project_root.display()
            );
        }

        Ok(ScaffoldPlan {
            request,
            directories,
            constraints_source: profile.constraints_source.clone(),
            constraints_destination,
            script_path: ScaffoldLayout::script_path(&project_root),
            script,
            project_root,
        })
    }

    fn warn_on_unquoted_base_path(&self) {
        let base = self.config.base_path().to_string_lossy();
        if base.chars().any(char::is_whitespace) {
            tracing::warn!(
                "⚠️ Base path '{}' contains whitespace; the generated Tcl is not quoted",
                base
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::BoardCatalog;
    use crate::domain::model::{Board, ProjectName};
    use crate::utils::error::ScaffoldError;
    use std::path::Path;
    use tempfile::TempDir;

    struct MockConfig {
        base_path: PathBuf,
        catalog: BoardCatalog,
    }

    impl ConfigProvider for MockConfig {
        fn base_path(&self) -> &Path {
            &self.base_path
        }

        fn catalog(&self) -> &BoardCatalog {
            &self.catalog
        }
    }

    fn request(name: &str, board: Board, ps: Option<bool>) -> ProjectRequest {
        ProjectRequest {
            name: ProjectName::parse(name).unwrap(),
            board,
            include_processing_system: ps,
        }
    }

    #[test]
    fn test_plan_does_not_touch_filesystem() {
        let temp_dir = TempDir::new().unwrap();
        let engine = ScaffoldEngine::new(MockConfig {
            base_path: temp_dir.path().to_path_buf(),
            catalog: BoardCatalog::builtin(Path::new("/boards")),
        });

        let plan = engine
            .plan(&mut request("demo2", Board::PynqZ1, Some(true)))
            .unwrap();
        assert_eq!(plan.project_root, temp_dir.path().join("demo2"));
        assert_eq!(plan.directories.len(), 5);
        assert_eq!(
            plan.constraints_destination,
            temp_dir.path().join("demo2/constraints/PYNQ-Z1_C.xdc")
        );
        assert_eq!(plan.script.line_count(), 9);
        assert!(!plan.project_root.exists());
    }

    #[test]
    fn test_missing_profile_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let engine = ScaffoldEngine::new(MockConfig {
            base_path: temp_dir.path().to_path_buf(),
            catalog: BoardCatalog::new(),
        });

        let err = engine
            .run(&mut request("demo1", Board::ArtyS7, None))
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ProfileNotFound { .. }));
        assert!(!temp_dir.path().join("demo1").exists());
    }
}
