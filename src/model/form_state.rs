//! FormState：表单核心状态与提交生命周期

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// 用户选中的文件（仅记录元信息，内容不打开、不解析）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    /// 文件名（不含目录部分）
    pub name: String,
    /// 文件字节大小，来自文件系统元数据
    pub size_bytes: u64,
    /// 原始路径（记入提交快照，从不读取内容）
    pub path: PathBuf,
}

impl SelectedFile {
    /// 按 KiB 显示文件大小，固定保留两位小数（0字节显示为 "0.00 KB"）
    pub fn display_size(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// 批改严格度（闭合选项集合，默认Lenient）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Strictness {
    #[default]
    Lenient,
    Moderate,
    Strict,
}

impl Strictness {
    /// UI选择器的全部选项标签，顺序即展示顺序
    pub const LABELS: [&'static str; 3] = ["Lenient", "Moderate", "Strict"];

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Lenient => "Lenient",
            Self::Moderate => "Moderate",
            Self::Strict => "Strict",
        }
    }

    /// 从UI标签解析；选择器是闭合集合，未知标签返回None
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Lenient" => Some(Self::Lenient),
            "Moderate" => Some(Self::Moderate),
            "Strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("答卷文件尚未选择")]
    MissingStudentFile,
    #[error("标准答案文件尚未选择")]
    MissingAnswerKey,
    #[error("已有提交正在处理中")]
    SubmitInProgress,
}

/// 提交快照：点击提交瞬间捕获的内存元组，写入诊断日志
/// （真实后端调用将来从这里接入）
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionSnapshot {
    pub student_file: SelectedFile,
    pub answer_key_file: SelectedFile,
    pub strictness_level: Strictness,
}

/// 表单全部可变状态的唯一所有者
#[derive(Debug, Default)]
pub struct FormState {
    pub student_file: Option<SelectedFile>,
    pub answer_key_file: Option<SelectedFile>,
    pub strictness: Strictness,
    pub is_submitting: bool,
}

impl FormState {
    /// 替换答卷文件槽位（整体替换，不做合并；不影响其他槽位）
    pub fn select_student_file(&mut self, file: SelectedFile) {
        self.student_file = Some(file);
    }

    /// 替换标准答案文件槽位（与答卷槽位完全对称）
    pub fn select_answer_key_file(&mut self, file: SelectedFile) {
        self.answer_key_file = Some(file);
    }

    /// 替换批改严格度（任意时刻可调用，包括提交进行中）
    pub fn set_strictness(&mut self, level: Strictness) {
        self.strictness = level;
    }

    /// 提交按钮可用条件：两个文件槽位均已填充且没有提交在进行中
    pub fn can_submit(&self) -> bool {
        self.student_file.is_some() && self.answer_key_file.is_some() && !self.is_submitting
    }

    /// 缺少必选文件的提示横幅显示条件（提交进行中不显示）
    pub fn show_missing_banner(&self) -> bool {
        !self.can_submit() && !self.is_submitting
    }

    /// 开始提交：在操作内部重新校验前置条件（不依赖UI禁用层），
    /// 成功时置位提交标志并返回当前快照供日志记录
    pub fn begin_submit(&mut self) -> Result<SubmissionSnapshot, FormError> {
        if self.is_submitting {
            return Err(FormError::SubmitInProgress);
        }
        let student_file = self
            .student_file
            .clone()
            .ok_or(FormError::MissingStudentFile)?;
        let answer_key_file = self
            .answer_key_file
            .clone()
            .ok_or(FormError::MissingAnswerKey)?;

        self.is_submitting = true;
        Ok(SubmissionSnapshot {
            student_file,
            answer_key_file,
            strictness_level: self.strictness,
        })
    }

    /// 结束提交：复位提交标志（由一次性定时器在固定延迟后调用）
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }
}
