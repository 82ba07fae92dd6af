use crate::core::catalog::BoardCatalog;
use crate::domain::model::ProjectRequest;
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    /// 新專案建立在此目錄之下
    fn base_path(&self) -> &Path;
    fn catalog(&self) -> &BoardCatalog;
}

/// 產生 ProjectRequest 的來源 (互動式終端或測試用的固定值)
pub trait RequestSource {
    fn collect(&mut self, catalog: &BoardCatalog) -> Result<ProjectRequest>;
}
