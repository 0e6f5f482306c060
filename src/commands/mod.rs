//! # 命令执行模块
//!
//! 实现唯一的生成命令：解析输入 → 批处理 → 汇总上报。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `resolver/`, `batch/`, `qpf/`, `utils/`

use crate::batch::{self, BatchOptions};
use crate::cli::Cli;
use crate::error::{AutoQpfError, Result};
use crate::qpf::OgmGenerator;
use crate::resolver;
use crate::utils::output;

/// 执行生成命令
pub fn run(cli: Cli) -> Result<()> {
    if cli.input.is_empty() {
        return Err(AutoQpfError::NoInput);
    }

    let files = resolver::resolve_inputs(&cli.input)?;
    if files.is_empty() {
        return Err(AutoQpfError::NoFilesFound);
    }

    output::print_info(&format!("Found {} input file(s)", files.len()));

    let options = BatchOptions {
        staxrip_batch: cli.staxrip_batch,
        fps: cli.fps,
        auto_fps: cli.auto_fps,
        chapter_chunks: cli.chapter_chunks,
        output: cli.output,
    };

    let report = batch::run(&files, &options, &OgmGenerator::new())?;

    if let Some(failure) = report.failure {
        return Err(failure.into());
    }

    output::print_done(&format!("Total files processed: {}", report.processed));
    Ok(())
}
