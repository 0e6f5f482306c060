//! # OGM 章节文本生成器
//!
//! 解析 OGM 格式的章节文本（`CHAPTER01=00:00:00.000` /
//! `CHAPTER01NAME=...` 行），按帧率换算为帧号并写出 QPF 文件。
//!
//! ## QPF 行格式
//! 每个章节点一行 `<帧号> I`（升序、去重），与 x264 qpfile 的
//! 强制关键帧写法一致。
//!
//! ## 依赖关系
//! - 实现 `qpf::ChapterGenerator`
//! - 被 `commands/mod.rs` 注入到批处理循环

use std::fs;
use std::path::{Path, PathBuf};

use super::{ChapterGenerator, GenerateError};

/// 基于 OGM 章节文本的 QPF 生成器
///
/// 纯文本输入不携带帧率元数据，`auto_fps` 与 `chapter_chunks`
/// 在此实现中无事可做；媒体容器感知的实现可在同一接口下使用它们。
#[derive(Debug, Default)]
pub struct OgmGenerator;

impl OgmGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ChapterGenerator for OgmGenerator {
    fn generate(
        &self,
        input: &Path,
        output: &Path,
        fps: f64,
        _auto_fps: bool,
        _chapter_chunks: f64,
    ) -> std::result::Result<PathBuf, GenerateError> {
        let raw = fs::read(input).map_err(|e| GenerateError::FileRead {
            path: input.display().to_string(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&raw);

        let timestamps = parse_ogm_chapters(&content)?;

        let mut frames: Vec<u64> = timestamps
            .iter()
            .map(|secs| (secs * fps).round() as u64)
            .collect();
        frames.sort_unstable();
        frames.dedup();

        let mut qpf = String::new();
        for frame in &frames {
            qpf.push_str(&format!("{} I\n", frame));
        }

        fs::write(output, qpf).map_err(|e| GenerateError::FileWrite {
            path: output.display().to_string(),
            source: e,
        })?;

        Ok(output.to_path_buf())
    }
}

/// 解析 OGM 章节文本，返回各章节点的秒数（按出现顺序）
///
/// 错误映射：
/// - 没有任何 `CHAPTERxx=` 时间行 → `NoChapterData`
/// - 章节序号不是数字 → `ChapterIndex`
/// - 时间戳不是 `HH:MM:SS(.mmm)` → `ImproperChapter`
fn parse_ogm_chapters(content: &str) -> std::result::Result<Vec<f64>, GenerateError> {
    let mut timestamps = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if !line.to_ascii_uppercase().starts_with("CHAPTER") {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some(pair) => pair,
            None => return Err(GenerateError::ImproperChapter),
        };

        let index_part = key[CHAPTER_PREFIX.len()..].trim();
        let upper = index_part.to_ascii_uppercase();

        if let Some(index) = upper.strip_suffix("NAME") {
            // 名称行只校验序号，QPF 不需要章节名
            validate_index(index)?;
        } else {
            validate_index(&upper)?;
            timestamps.push(parse_timestamp(value.trim())?);
        }
    }

    if timestamps.is_empty() {
        return Err(GenerateError::NoChapterData);
    }

    Ok(timestamps)
}

const CHAPTER_PREFIX: &str = "CHAPTER";

/// 章节序号必须是非空数字串
fn validate_index(index: &str) -> std::result::Result<(), GenerateError> {
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GenerateError::ChapterIndex);
    }
    Ok(())
}

/// 解析 `HH:MM:SS(.mmm)` 时间戳为秒数
fn parse_timestamp(value: &str) -> std::result::Result<f64, GenerateError> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return Err(GenerateError::ImproperChapter);
    }

    let hours: u64 = parts[0].parse().map_err(|_| GenerateError::ImproperChapter)?;
    let minutes: u64 = parts[1].parse().map_err(|_| GenerateError::ImproperChapter)?;
    let seconds: f64 = parts[2].parse().map_err(|_| GenerateError::ImproperChapter)?;

    if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return Err(GenerateError::ImproperChapter);
    }

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
}
