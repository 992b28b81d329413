//! 词行对齐器：把字幕解析出的词贪心地分配到各行的时间窗口。

use tracing::debug;

use crate::timeline::types::{LineWindow, ResolvedLine, TimedWord, TimelineOptions};

/// 把词序列按文本与时间双重匹配分配到各行，产出对齐后的歌词行。
///
/// 对每一行维护一份小写的剩余文本缓冲。按字幕顺序扫描尚未被消耗的词，
/// 当词的小写文本仍是剩余文本的子串，且其时间窗口落在
/// `[line.start - slack, line.end + slack]` 之内时，把词分配给该行：
/// 从缓冲中删去第一处匹配，并通过消耗掩码把词从候选池中移除，后续的行
/// 不会再拿到它。
///
/// 这是单遍贪心分配：词一经消耗绝不回溯，处理完的行也不再回看。
/// 对于病态输入（跨行重复的词、时间戳互相重叠），后面的行可能分不到
/// 本属于它的词，这是既定行为。没有匹配到任何行的词被静默丢弃。
///
/// 间奏行不分配任何词。输出顺序与输入的行顺序一致。
#[must_use]
pub fn reconcile_words(
    words: &[TimedWord],
    windows: Vec<LineWindow>,
    options: &TimelineOptions,
) -> Vec<ResolvedLine> {
    let mut consumed = vec![false; words.len()];
    let mut lines = Vec::with_capacity(windows.len());

    for window in windows {
        if window.is_instrumental {
            lines.push(ResolvedLine {
                start: window.start,
                end: window.end,
                text: window.text,
                words: Vec::new(),
                is_instrumental: true,
            });
            continue;
        }

        let mut remaining = window.text.to_lowercase();
        let mut assigned: Vec<TimedWord> = Vec::new();

        for (index, word) in words.iter().enumerate() {
            if consumed[index] {
                continue;
            }
            if word.start < window.start - options.slack_seconds
                || word.end > window.end + options.slack_seconds
            {
                continue;
            }

            let needle = word.word.trim().to_lowercase();
            if needle.is_empty() {
                continue;
            }

            if let Some(position) = remaining.find(&needle) {
                remaining.replace_range(position..position + needle.len(), "");
                consumed[index] = true;
                assigned.push(word.clone());
            }
        }

        lines.push(ResolvedLine {
            start: window.start,
            end: window.end,
            text: window.text,
            words: assigned,
            is_instrumental: false,
        });
    }

    let dropped = consumed.iter().filter(|used| !**used).count();
    if dropped > 0 {
        debug!("{dropped} 个词未匹配到任何行，已丢弃。");
    }

    lines
}
