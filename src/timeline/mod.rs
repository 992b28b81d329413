//! 歌词时间轴核心模块。
//!
//! 数据单向流动：原始字幕与行级同步列表 → 解析出的词序列 → 对齐后的
//! 歌词行 →（查询时）播放状态。任何组件都不就地修改其他组件的输出。

pub mod cache;
pub mod parsers;
pub mod reconcile;
pub mod resolver;
pub mod sync;
pub mod types;
pub mod utils;

pub use types::{
    LineCue, LineWindow, ParsedTranscript, PlaybackState, ResolvedLine, TimedWord, Timeline,
    TimelineOptions, WordState,
};

use crate::error::Result;

// ==========================================================
//  顶级构建入口
// ==========================================================

/// 由逐字时间戳字幕与行级同步列表构建完整的歌词时间轴。
///
/// 依次执行字幕解析、行窗口推导与词行对齐。构建是确定的：相同输入
/// 必然产出结构相等的时间轴，适合按输入内容记忆化
/// （见 [`cache::TimelineCache`]）。
///
/// # 参数
///
/// * `transcript` - WebVTT 子集格式的逐字时间戳字幕文本。
/// * `cues` - 行级同步列表，应按开始时间升序。
/// * `options` - 构建配置（松弛窗口、默认尾部时长等）。
///
/// # Errors
///
/// 仅在严格模式（[`TimelineOptions::strict_cue_order`]）下同步列表乱序时
/// 返回 [`TimelineError::UnorderedCues`](crate::error::TimelineError::UnorderedCues)；
/// 其余一切输入问题都以容错方式降级处理并记入警告。
pub fn build_timeline(
    transcript: &str,
    cues: &[LineCue],
    options: &TimelineOptions,
) -> Result<Timeline> {
    let parsed = parsers::vtt_parser::parse_word_timings(transcript);
    let mut warnings = parsed.warnings;

    let windows = sync::derive_line_windows(cues, options, &mut warnings)?;
    let lines = reconcile::reconcile_words(&parsed.words, windows, options);

    Ok(Timeline {
        lines,
        translations: Vec::new(),
        warnings,
    })
}
