//! # AutoQPF - 自动 QPF 章节关键帧文件生成器
//!
//! 将混合输入（文件路径、目录、glob 模式）展开为具体文件列表，
//! 逐文件生成 QPF 文件，并按章节错误类型分类上报。
//!
//! ## 功能
//! - `-i` 多输入解析（文件 / 目录 / glob / 递归 glob）
//! - `-s` StaxRip 批处理模式（为每个输入创建 `<stem>_temp` 目录）
//! - 拖拽调用：单个文件/目录参数直接作为输入
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义与拖拽检测)
//!   ├── commands/   (命令执行逻辑)
//!   ├── resolver/   (输入解析)
//!   ├── batch/      (批处理循环与输出路径推导)
//!   ├── qpf/        (QPF 生成器接口与 OGM 实现)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod qpf;
mod resolver;
mod utils;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = cli::parse_args();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
