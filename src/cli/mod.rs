//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数，并处理拖拽调用。
//!
//! ## 参数
//! - `-i/--input`: 输入文件、目录或 glob 模式（可多个）
//! - `-s/--staxrip-batch`: StaxRip 批处理模式
//! - `-f/--fps`, `-a/--auto-fps`, `-c/--chapter-chunks`, `-o/--output`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/mod.rs`

use clap::{ArgAction, Parser};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 默认源文件帧率（NTSC film）
pub const DEFAULT_FPS: f64 = 23.976;

/// 默认章节块百分比
pub const DEFAULT_CHAPTER_CHUNKS: f64 = 5.0;

/// AutoQPF - 自动 QPF 章节关键帧文件生成器
#[derive(Parser, Debug)]
#[command(name = "autoqpf")]
#[command(version)]
#[command(disable_version_flag = true)]
#[command(about = "Automatic QPF generator for StaxRip batch workflows", long_about = None)]
pub struct Cli {
    /// Input file paths, directories or glob patterns
    #[arg(short, long, num_args = 1.., value_name = "INPUT")]
    pub input: Vec<String>,

    /// Auto create StaxRip temp directories with the proper QPF files inside
    #[arg(short, long, default_value_t = false)]
    pub staxrip_batch: bool,

    /// Define source file FPS
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    pub fps: f64,

    /// Override the user FPS when the input carries its own frame rate
    #[arg(short, long, default_value_t = false)]
    pub auto_fps: bool,

    /// Percentage of total duration used when chapters have to be generated
    #[arg(short, long, default_value_t = DEFAULT_CHAPTER_CHUNKS)]
    pub chapter_chunks: f64,

    /// The output file path, placed alongside the input (ignored with --staxrip-batch)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// 为拖拽调用构造参数：单个输入、全部默认值，目录强制 StaxRip 模式
    fn dropped(path: &Path) -> Self {
        Self {
            input: vec![path.display().to_string()],
            staxrip_batch: path.is_dir(),
            fps: DEFAULT_FPS,
            auto_fps: false,
            chapter_chunks: DEFAULT_CHAPTER_CHUNKS,
            output: None,
            version: None,
        }
    }
}

/// 解析命令行参数
///
/// 若进程只收到一个参数且该参数是已存在的文件或目录（拖拽到可执行
/// 文件上的典型形态），直接将其作为唯一输入；否则按常规语法解析。
pub fn parse_args() -> Cli {
    parse_from(env::args_os().collect())
}

fn parse_from(args: Vec<OsString>) -> Cli {
    if args.len() == 2 {
        let candidate = Path::new(&args[1]);
        if candidate.is_file() || candidate.is_dir() {
            return Cli::dropped(candidate);
        }
    }
    Cli::parse_from(args)
}
