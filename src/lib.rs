//! 答卷批改提交工具库
//!
//! 提供表单状态管理、文件信息探测与提交快照构建
//! 遵循MVVM架构模式，UI层由Slint渲染

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::form_state::{FormError, FormState, SelectedFile, Strictness, SubmissionSnapshot};
pub use utils::fs::probe_file;
