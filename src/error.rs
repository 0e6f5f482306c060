//! # 统一错误处理模块
//!
//! 定义 AutoQPF 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 包装 `qpf::GenerateError`（生成器的封闭错误枚举）

use thiserror::Error;

use crate::qpf::GenerateError;

/// AutoQPF 统一错误类型
#[derive(Error, Debug)]
pub enum AutoQpfError {
    // ─────────────────────────────────────────────────────────────
    // 输入解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("{path} is not a valid input path")]
    InvalidInput { path: String },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No input was provided")]
    NoInput,

    #[error("No input files were found")]
    NoFilesFound,

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create directory: {path}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // QPF 生成错误（章节错误与生成器 I/O）
    // ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AutoQpfError>;
