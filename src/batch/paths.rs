//! # 输出路径推导
//!
//! 按两种策略为每个输入文件推导 QPF 输出路径。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AutoQpfError, Result};

/// StaxRip 批处理模式：创建 `<stem>_temp` 兄弟目录并返回其中的
/// `<stem>.qpf` 路径
///
/// 目录创建是幂等的，已存在不报错。
pub fn staxrip_output(input: &Path) -> Result<PathBuf> {
    let stem = file_stem(input);
    let parent = input.parent().unwrap_or_else(|| Path::new("."));

    let output_dir = parent.join(format!("{}_temp", stem));
    fs::create_dir_all(&output_dir).map_err(|e| AutoQpfError::DirectoryCreate {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    Ok(output_dir.join(format!("{}.qpf", stem)))
}

/// 直接模式：显式输出路径优先，否则就地替换扩展名为 `.qpf`
pub fn direct_output(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("qpf"),
    }
}

/// 确保输出路径的父目录存在（幂等，按需创建中间目录）
pub fn ensure_parent_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| AutoQpfError::DirectoryCreate {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }
    Ok(())
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_staxrip_output_layout() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("movie.mkv");
        fs::write(&input, b"").unwrap();

        let output = staxrip_output(&input).unwrap();
        assert_eq!(output, dir.path().join("movie_temp").join("movie.qpf"));
        assert!(dir.path().join("movie_temp").is_dir());
    }

    #[test]
    fn test_staxrip_output_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("movie.mkv");
        fs::write(&input, b"").unwrap();

        let first = staxrip_output(&input).unwrap();
        let second = staxrip_output(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_direct_output_replaces_extension() {
        let output = direct_output(Path::new("/x/clip.mp4"), None);
        assert_eq!(output, PathBuf::from("/x/clip.qpf"));
    }

    #[test]
    fn test_direct_output_prefers_explicit_path() {
        let explicit = PathBuf::from("/y/custom.qpf");
        let output = direct_output(Path::new("/x/clip.mp4"), Some(&explicit));
        assert_eq!(output, explicit);
    }

    #[test]
    fn test_ensure_parent_dir_creates_intermediates() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("a/b/c.qpf");

        ensure_parent_dir(&output).unwrap();
        assert!(dir.path().join("a/b").is_dir());

        // 再次调用不报错
        ensure_parent_dir(&output).unwrap();
    }
}
