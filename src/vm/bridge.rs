//! VM桥接层：连接Slint UI与FormState数据模型
//!
//! 注意：此模块的具体实现在main.rs中，因为依赖于Slint生成的类型
//! 这里只提供公共常量

use std::time::Duration;

// === 常量定义（消除魔法值） ===
pub const STATUS_READY: &str = "Ready";
pub const STATUS_FILE_CHOSEN: &str = "File selected";
pub const STATUS_NO_FILE_CHOSEN: &str = "No file selected";
pub const STATUS_SUBMITTING: &str = "Processing...";
pub const STATUS_SUBMITTED: &str = "Submission complete";
pub const STATUS_ERROR_PREFIX: &str = "Error: ";

/// 文件选择对话框的扩展名过滤器（仅作提示，不做程序化强制校验）
pub const ACCEPT_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// 提交后复位延迟：模拟后端处理时间的一次性定时器，不可取消
pub const SUBMIT_RESET_DELAY: Duration = Duration::from_millis(1500);
