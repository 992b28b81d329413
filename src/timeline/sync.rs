//! 行级同步器：由行级同步列表推导每行的时间窗口。

use std::borrow::Cow;

use tracing::warn;

use crate::{
    error::{Result, TimelineError},
    timeline::{
        types::{INSTRUMENTAL_PLACEHOLDER, LineCue, LineWindow, TimelineOptions},
        utils::normalize_text_whitespace,
    },
};

/// 判断一段行文本是否表示间奏。
///
/// 空文本、纯空白或 [`INSTRUMENTAL_PLACEHOLDER`] 都视为间奏。
#[must_use]
pub fn is_instrumental_text(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == INSTRUMENTAL_PLACEHOLDER
}

/// 由行级同步列表推导出每行的时间窗口。
///
/// 每行的结束时间取下一行的开始时间；最后一行没有后继，取
/// `start + default_tail_seconds`，若配置了 `total_duration` 且其晚于
/// 该行开始，则以总时长为准。
///
/// 输入应已按开始时间升序排列。检测到乱序时：默认排序修正并记录警告；
/// 严格模式（`strict_cue_order`）下返回 [`TimelineError::UnorderedCues`]。
pub fn derive_line_windows(
    cues: &[LineCue],
    options: &TimelineOptions,
    warnings: &mut Vec<String>,
) -> Result<Vec<LineWindow>> {
    let ordered = ensure_ascending(cues, options, warnings)?;

    let num_cues = ordered.len();
    let mut windows = Vec::with_capacity(num_cues);

    for (i, cue) in ordered.iter().enumerate() {
        let end = if let Some(next) = ordered.get(i + 1) {
            next.start
        } else {
            options
                .total_duration
                .filter(|duration| *duration > cue.start)
                .unwrap_or(cue.start + options.default_tail_seconds)
        };

        windows.push(LineWindow {
            start: cue.start,
            end,
            text: normalize_text_whitespace(&cue.text),
            is_instrumental: is_instrumental_text(&cue.text),
        });
    }

    Ok(windows)
}

/// 校验同步列表的顺序，必要时返回一份排序后的副本。
fn ensure_ascending<'a>(
    cues: &'a [LineCue],
    options: &TimelineOptions,
    warnings: &mut Vec<String>,
) -> Result<Cow<'a, [LineCue]>> {
    let unordered_at = cues
        .windows(2)
        .position(|pair| pair[1].start < pair[0].start);

    let Some(position) = unordered_at else {
        return Ok(Cow::Borrowed(cues));
    };

    let index = position + 1;
    if options.strict_cue_order {
        return Err(TimelineError::UnorderedCues {
            index,
            start: cues[index].start,
            previous: cues[position].start,
        });
    }

    let message = format!(
        "行级同步列表乱序（第 {} 项开始于 {} 秒，早于前一项的 {} 秒），已按开始时间重新排序。",
        index, cues[index].start, cues[position].start
    );
    warn!("{message}");
    warnings.push(message);

    let mut sorted = cues.to_vec();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
    Ok(Cow::Owned(sorted))
}
