//! IO helper: metadata probe for user-picked files

use std::{fs, path::Path};

use crate::model::form_state::{FormError, SelectedFile};

/// 读取所选文件的名称与字节大小（文件作为不透明blob处理，不打开、不解析内容）
pub fn probe_file(p: &Path) -> Result<SelectedFile, FormError> {
    let meta = fs::metadata(p)?;
    let name = p
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| p.display().to_string());
    Ok(SelectedFile {
        name,
        size_bytes: meta.len(),
        path: p.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_probe_existing_file() {
        let mut file = NamedTempFile::new().expect("创建临时文件失败");
        file.write_all(&[0u8; 2048]).expect("写入临时文件失败");

        let selected = probe_file(file.path()).expect("探测已存在的文件应该成功");
        assert_eq!(selected.size_bytes, 2048, "字节大小应与写入量一致");
        assert_eq!(selected.display_size(), "2.00 KB", "显示大小应为2.00 KB");
        assert_eq!(selected.path, file.path(), "原始路径应被完整记录");
        assert!(!selected.name.is_empty(), "文件名不应为空");
    }

    #[test]
    fn test_probe_empty_file() {
        let file = NamedTempFile::new().expect("创建临时文件失败");

        let selected = probe_file(file.path()).expect("探测空文件应该成功");
        assert_eq!(selected.size_bytes, 0, "空文件大小应为0");
        assert_eq!(selected.display_size(), "0.00 KB", "0字节文件应显示为0.00 KB");
    }

    #[test]
    fn test_probe_missing_file() {
        let result = probe_file(Path::new("/nonexistent/script.pdf"));
        assert!(
            matches!(result, Err(FormError::Io(_))),
            "不存在的文件应返回IO错误"
        );
    }
}
