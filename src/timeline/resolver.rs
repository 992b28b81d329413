//! 播放解算器：在任意播放时间点上解算当前的歌词状态。

use crate::timeline::types::{PlaybackState, ResolvedLine, Timeline, TimelineOptions, WordState};

/// 在播放时间 `t`（秒）上解算歌词状态。
///
/// 这是 `(timeline, t)` 的纯函数，没有任何跨调用的内部状态，可以在每帧
/// 以任意（包括非单调的）时间值调用，支持拖动与跳转。每次调用只对行
/// 序列做一次线性扫描。
///
/// 当前行是满足 `start <= t < end` 的行；最后一行对所有 `t >= start`
/// 保持有效（它的结束时间只是估算值，播放到尾部时不应失去当前行）。
/// 因此只有在第一行开始之前才会没有当前行。
#[must_use]
pub fn resolve_playback<'a>(
    timeline: &'a Timeline,
    t: f64,
    options: &TimelineOptions,
) -> PlaybackState<'a> {
    let lines = &timeline.lines;

    let active_line_index = lines.iter().enumerate().find_map(|(i, line)| {
        let is_last = i + 1 == lines.len();
        (t >= line.start && (t < line.end || is_last)).then_some(i)
    });

    let active_line = active_line_index.map(|i| &lines[i]);
    let previous_line = active_line_index
        .and_then(|i| i.checked_sub(1))
        .map(|i| &lines[i]);
    let next_line = match active_line_index {
        Some(i) => lines.get(i + 1),
        // 第一行开始之前：下一行是第一个开始时间晚于 t 的行
        None => lines.iter().find(|line| line.start > t),
    };

    let is_instrumental = active_line.is_none_or(|line| line.is_instrumental);

    let line_progress = active_line.map_or(0.0, |line| line_progress_percent(line, t));

    let (word_states, active_word_index) = match active_line {
        Some(line) if !line.is_instrumental => classify_words(line, t),
        _ => (Vec::new(), None),
    };

    let mut show_countdown = false;
    let mut countdown_seconds_remaining = 0.0;
    if is_instrumental && let Some(next) = next_line {
        countdown_seconds_remaining = next.start - t;
        show_countdown = countdown_seconds_remaining > 0.0
            && countdown_seconds_remaining <= options.countdown_window_seconds;
    }

    let translation = if is_instrumental {
        None
    } else {
        resolve_translation(timeline, t)
    };

    PlaybackState {
        active_line,
        active_line_index,
        previous_line,
        next_line,
        is_instrumental,
        line_progress,
        word_states,
        active_word_index,
        show_countdown,
        countdown_seconds_remaining,
        translation,
    }
}

/// 当前行的进度百分比，钳制在 0 到 100 之间；零时长的行恒为 0。
fn line_progress_percent(line: &ResolvedLine, t: f64) -> f64 {
    let duration = line.duration();
    if duration <= 0.0 {
        return 0.0;
    }
    ((t - line.start) / duration).clamp(0.0, 1.0) * 100.0
}

/// 对当前行的每个词做三态分类，并返回正在演唱的词的下标。
fn classify_words(line: &ResolvedLine, t: f64) -> (Vec<WordState>, Option<usize>) {
    let mut active_word_index = None;
    let states = line
        .words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if t < word.start {
                WordState::Upcoming
            } else if t < word.end {
                active_word_index = Some(i);
                WordState::Active
            } else {
                WordState::Spoken
            }
        })
        .collect();
    (states, active_word_index)
}

/// 返回最后一个已经开始的翻译行文本；没有或为空则返回 `None`。
fn resolve_translation(timeline: &Timeline, t: f64) -> Option<&str> {
    timeline
        .translations
        .iter()
        .rev()
        .find(|cue| t >= cue.start)
        .map(|cue| cue.text.as_str())
        .filter(|text| !text.trim().is_empty())
}
