//! # 批处理循环
//!
//! 按解析顺序逐个处理文件：推导输出路径、调用生成器、分类结果。
//!
//! ## 失败策略
//! 三种章节错误表明批次级的数据问题，首个出现即终止整个批处理
//! （fail-fast），报告此前成功的数量；生成器的 I/O 错误与目录创建
//! 错误按普通致命错误向上传播。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/paths.rs` 推导输出路径
//! - 使用 `qpf::ChapterGenerator`，`utils/progress.rs` 显示进度

use std::path::PathBuf;

use crate::batch::paths;
use crate::error::Result;
use crate::qpf::{ChapterGenerator, GenerateError};
use crate::utils::{output, progress};

/// 批处理选项
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// StaxRip 批处理模式（为每个输入创建临时目录）
    pub staxrip_batch: bool,
    /// 源文件帧率
    pub fps: f64,
    /// 允许输入自带帧率覆盖用户帧率
    pub auto_fps: bool,
    /// 生成章节时的时长百分比
    pub chapter_chunks: f64,
    /// 显式输出路径（StaxRip 模式下忽略）
    pub output: Option<PathBuf>,
}

/// 批处理结果
///
/// `failure` 为 `Some` 表示循环被章节错误提前终止，`processed`
/// 是终止前成功的数量。
#[derive(Debug)]
pub struct BatchReport {
    /// 成功生成的文件数
    pub processed: usize,
    /// 终止整个批处理的章节错误
    pub failure: Option<GenerateError>,
}

/// 顺序处理文件列表
///
/// 严格按输入顺序执行，无并行；顺序决定章节错误发生前哪些文件
/// 被计入 `processed`。
pub fn run<G: ChapterGenerator>(
    files: &[PathBuf],
    options: &BatchOptions,
    generator: &G,
) -> Result<BatchReport> {
    let pb = progress::create_progress_bar(files.len() as u64, "Generating QPF");

    let mut report = BatchReport {
        processed: 0,
        failure: None,
    };

    for input in files {
        let output_path = if options.staxrip_batch {
            paths::staxrip_output(input)?
        } else {
            paths::direct_output(input, options.output.as_deref())
        };
        paths::ensure_parent_dir(&output_path)?;

        match generator.generate(
            input,
            &output_path,
            options.fps,
            options.auto_fps,
            options.chapter_chunks,
        ) {
            Ok(created) => {
                pb.suspend(|| {
                    output::print_success(&format!("QPF created: {}", created.display()));
                });
                report.processed += 1;
            }
            Err(e) if e.is_chapter_error() => {
                report.failure = Some(e);
                break;
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e.into());
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(report)
}
