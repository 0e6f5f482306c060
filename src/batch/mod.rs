//! # 批处理模块
//!
//! 提供输出路径推导与顺序批处理循环。
//!
//! ## 功能
//! - StaxRip 模式：为每个输入创建 `<stem>_temp` 兄弟目录
//! - 直接模式：显式输出路径或就地替换扩展名为 `.qpf`
//! - 顺序处理、章节错误 fail-fast、成功计数汇总
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `qpf` 的生成器接口，`indicatif` 显示进度

pub mod paths;
pub mod runner;

pub use runner::{run, BatchOptions, BatchReport};
