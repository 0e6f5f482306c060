//! # QPF 生成模块
//!
//! 定义生成器接口与封闭的生成错误枚举，并提供 OGM 章节文本实现。
//!
//! ## 设计
//! 三种章节错误对整个批处理是致命的（fail-fast），I/O 错误按普通
//! 致命错误传播；二者在同一枚举内用 `is_chapter_error` 区分。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 子模块: ogm

pub mod ogm;

pub use ogm::OgmGenerator;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// QPF 生成器接口
///
/// `auto_fps` 与 `chapter_chunks` 对具体实现是可选语义：携带自身
/// 帧率元数据的输入可用前者覆盖用户帧率，无章节的输入可按后者
/// 生成等分章节点。
pub trait ChapterGenerator {
    /// 从输入文件生成 QPF 文件，返回实际写入的路径
    fn generate(
        &self,
        input: &Path,
        output: &Path,
        fps: f64,
        auto_fps: bool,
        chapter_chunks: f64,
    ) -> std::result::Result<PathBuf, GenerateError>;
}

/// QPF 生成错误
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Issue getting the correct index from the chapters")]
    ChapterIndex,

    #[error("Input has improper or corrupted chapters")]
    ImproperChapter,

    #[error("Input has no chapter data")]
    NoChapterData,

    #[error("Failed to read file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// 是否为章节分类错误（终止整个批处理）
    pub fn is_chapter_error(&self) -> bool {
        matches!(
            self,
            Self::ChapterIndex | Self::ImproperChapter | Self::NoChapterData
        )
    }
}
