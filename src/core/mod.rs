pub mod catalog;
pub mod constraints;
pub mod input;
pub mod layout;
pub mod scaffold;
pub mod script;

pub use crate::domain::model::{Board, BoardProfile, GeneratedScript, ProjectRequest};
pub use crate::domain::ports::{ConfigProvider, RequestSource};
pub use crate::utils::error::Result;
