//! # 输入解析模块
//!
//! 将混合输入 token（文件路径、目录、glob 模式、递归 glob）展开为
//! 具体存在的普通文件列表。
//!
//! ## 算法
//! 1. 目录展平：目录 token 原位替换为其子树下的全部普通文件；
//!    含 `*` 的模式 token 不做目录检查，原样进入下一阶段
//! 2. 逐 token 解析：模式交给 `glob` 展开（`*` 不跨目录、`**` 递归，
//!    语义由模式本身决定），普通路径校验存在性后追加
//!
//! ## 顺序与重复
//! - 结果顺序 = token 顺序，token 内按字典序（glob 的字母序产出 +
//!   walkdir 按文件名排序），保证跨平台确定性
//! - 重叠的 token 匹配到同一文件时不去重，该文件会被处理多次
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 展开模式

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AutoQpfError, Result};

/// 展平后的中间 token
enum FlatToken {
    /// 目录展平阶段确认的普通文件
    File(PathBuf),
    /// 留待逐 token 解析的原始字符串（模式或普通路径）
    Candidate(String),
}

/// 将输入 token 列表解析为存在的普通文件列表
///
/// 空结果（所有模式均无匹配）是合法的，由调用方区别于
/// `InvalidInput`（某个 token 既非模式也非存在的文件）。
pub fn resolve_inputs(tokens: &[String]) -> Result<Vec<PathBuf>> {
    let mut resolved = Vec::new();

    for token in flatten_directories(tokens) {
        match token {
            FlatToken::File(path) => resolved.push(path),
            FlatToken::Candidate(raw) => {
                if raw.contains('*') {
                    resolved.extend(expand_pattern(&raw)?);
                } else if is_regular_file(&raw) {
                    resolved.push(PathBuf::from(&raw));
                } else {
                    return Err(AutoQpfError::InvalidInput { path: raw });
                }
            }
        }
    }

    Ok(resolved)
}

/// 目录展平：目录 token 原位替换为其子树下的所有普通文件
///
/// 模式 token（含 `*`）不做目录检查，原样传递。
fn flatten_directories(tokens: &[String]) -> Vec<FlatToken> {
    let mut flattened = Vec::new();

    for token in tokens {
        if token.contains('*') {
            flattened.push(FlatToken::Candidate(token.clone()));
            continue;
        }

        let path = Path::new(token);
        if path.is_dir() {
            // 深度不限；按文件名排序保证确定性
            let walker = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file());

            flattened.extend(walker.map(|e| FlatToken::File(e.path().to_path_buf())));
        } else {
            flattened.push(FlatToken::Candidate(token.clone()));
        }
    }

    flattened
}

/// 展开 glob 模式，只保留普通文件
///
/// 零匹配不是错误；语法非法的模式返回 `InvalidPattern`。
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| AutoQpfError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    Ok(paths
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect())
}

/// 非空、非纯空白且指向存在的普通文件
fn is_regular_file(token: &str) -> bool {
    !token.trim().is_empty() && Path::new(token).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_explicit_files_kept_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.mkv");
        let a = dir.path().join("a.mkv");
        touch(&b);
        touch(&a);

        let tokens = vec![b.display().to_string(), a.display().to_string()];
        let resolved = resolve_inputs(&tokens).unwrap();
        assert_eq!(resolved, vec![b, a]);
    }

    #[test]
    fn test_single_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("movie.mkv");
        touch(&file);

        let resolved = resolve_inputs(&[file.display().to_string()]).unwrap();
        assert_eq!(resolved, vec![file]);
    }

    #[test]
    fn test_directory_expands_recursively() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.mkv"));
        touch(&dir.path().join("nested/deep/b.mkv"));
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let resolved = resolve_inputs(&[dir.path().display().to_string()]).unwrap();
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_glob_is_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("top.mkv"));
        touch(&dir.path().join("sub/nested.mkv"));

        let pattern = format!("{}/*.mkv", dir.path().display());
        let resolved = resolve_inputs(&[pattern]).unwrap();
        assert_eq!(resolved, vec![dir.path().join("top.mkv")]);
    }

    #[test]
    fn test_recursive_glob_includes_nested_matches() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("top.mkv"));
        touch(&dir.path().join("sub/nested.mkv"));

        let pattern = format!("{}/**/*.mkv", dir.path().display());
        let resolved = resolve_inputs(&[pattern]).unwrap();
        assert_eq!(resolved.len(), 2);
        assert!(resolved.contains(&dir.path().join("sub/nested.mkv")));
    }

    #[test]
    fn test_zero_match_pattern_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();

        let pattern = format!("{}/*.mkv", dir.path().display());
        let resolved = resolve_inputs(&[pattern]).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_nonexistent_path_is_invalid_input() {
        let err = resolve_inputs(&["does/not/exist.mkv".to_string()]).unwrap_err();
        assert!(matches!(err, AutoQpfError::InvalidInput { .. }));
        assert_eq!(
            err.to_string(),
            "does/not/exist.mkv is not a valid input path"
        );
    }

    #[test]
    fn test_empty_and_whitespace_tokens_are_invalid() {
        assert!(matches!(
            resolve_inputs(&[String::new()]),
            Err(AutoQpfError::InvalidInput { .. })
        ));
        assert!(matches!(
            resolve_inputs(&["   ".to_string()]),
            Err(AutoQpfError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_invalid_token_aborts_without_partial_result() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("ok.mkv");
        touch(&good);

        let tokens = vec![good.display().to_string(), "missing.mkv".to_string()];
        assert!(resolve_inputs(&tokens).is_err());
    }

    #[test]
    fn test_overlapping_tokens_keep_duplicates() {
        // 目录 token 与模式 token 命中同一文件时不去重
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("movie.mkv");
        touch(&file);

        let tokens = vec![
            dir.path().display().to_string(),
            format!("{}/*.mkv", dir.path().display()),
        ];
        let resolved = resolve_inputs(&tokens).unwrap();
        assert_eq!(resolved, vec![file.clone(), file]);
    }

    #[test]
    fn test_directory_files_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("c.mkv"));
        touch(&dir.path().join("a.mkv"));
        touch(&dir.path().join("b.mkv"));

        let resolved = resolve_inputs(&[dir.path().display().to_string()]).unwrap();
        let names: Vec<_> = resolved
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.mkv", "b.mkv", "c.mkv"]);
    }

    #[test]
    fn test_pattern_token_is_never_directory_checked() {
        // 模式即使恰好匹配目录本身，也只按模式展开为文件
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub.mkv"));

        let pattern = format!("{}/sub*", dir.path().display());
        let resolved = resolve_inputs(&[pattern]).unwrap();
        assert_eq!(resolved, vec![dir.path().join("sub.mkv")]);
    }
}
