//! WebVTT 子集的逐字时间戳解析器。
//!
//! 支持的输入形如：
//!
//! ```text
//! WEBVTT
//!
//! 00:00:01.000 --> 00:00:03.000
//! Hi <00:00:02.000> there
//! ```
//!
//! `<time> --> <time>` 行开启一个字幕块，随后第一个非空行是其载荷。
//! 载荷中内嵌的 `<时间码>` 标记把文本切分为逐词片段：每个片段的开始时间
//! 是上一个边界（初始为块开始），结束时间是紧随其后的标记（末尾片段为块
//! 结束）。其余 `<...>` 标记视为标注标记，一律剥除。

use regex::Regex;
use std::sync::LazyLock;

use crate::timeline::{
    types::{ParsedTranscript, TimedWord},
    utils::{normalize_text_whitespace, parse_timestamp},
};

/// 用于匹配块时间行，例如 `00:00:01.000 --> 00:00:03.000`
static BLOCK_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*((?:\d{1,2}:)?\d{1,2}:\d{1,2}\.\d{1,3})\s*-->\s*((?:\d{1,2}:)?\d{1,2}:\d{1,2}\.\d{1,3})")
        .expect("未能编译 BLOCK_TIME_RE")
});

/// 用于匹配载荷中的内嵌时间码标记，例如 `<00:00:02.000>`
static INLINE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<((?:\d{1,2}:)?\d{1,2}:\d{1,2}\.\d{1,3})>").expect("未能编译 INLINE_TIME_RE")
});

/// 用于剥除非时间码的标注标记，例如 `<v Speaker>`、`<b>`
static MARKUP_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("未能编译 MARKUP_TAG_RE"));

/// 解析逐字时间戳字幕，返回按出现顺序排列的词序列。
///
/// 解析是容错的：跳过空行与 `WEBVTT` 头，没有载荷的块不产生任何词，
/// 畸形时间码按 `0.0` 处理（见 [`parse_timestamp`]），整个解析永不失败。
#[must_use]
pub fn parse_word_timings(transcript: &str) -> ParsedTranscript {
    let mut words: Vec<TimedWord> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // 已开启但尚未消耗载荷的字幕块 (start, end)
    let mut pending_block: Option<(f64, f64)> = None;

    for (line_num_zero_based, raw_line) in transcript.lines().enumerate() {
        let line_num_one_based = line_num_zero_based + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }
        if line.starts_with("WEBVTT") {
            continue;
        }

        if let Some(caps) = BLOCK_TIME_RE.captures(line) {
            if pending_block.is_some() {
                warnings.push(format!(
                    "第 {line_num_one_based} 行: 前一个字幕块没有载荷，已忽略。"
                ));
            }
            let start = caps.get(1).map_or(0.0, |m| parse_timestamp(m.as_str()));
            let end = caps.get(2).map_or(0.0, |m| parse_timestamp(m.as_str()));
            pending_block = Some((start, end));
            continue;
        }

        // 不在任何块内的文本行（NOTE、样式、条目标识等）直接忽略
        let Some((block_start, block_end)) = pending_block.take() else {
            continue;
        };

        extract_block_words(line, block_start, block_end, &mut words);
    }

    if pending_block.is_some() {
        warnings.push("字幕末尾存在没有载荷的字幕块，已忽略。".to_string());
    }

    ParsedTranscript { words, warnings }
}

/// 按内嵌时间码把一个块的载荷切分为词。
///
/// 没有内嵌标记的载荷在剥除标注后作为单个词覆盖整个块；
/// 修剪后为空的片段被丢弃。
fn extract_block_words(payload: &str, block_start: f64, block_end: f64, words: &mut Vec<TimedWord>) {
    let mut boundary = block_start;
    let mut cursor = 0usize;

    for marker in INLINE_TIME_RE.find_iter(payload) {
        let marker_time = parse_timestamp(marker.as_str().trim_matches(['<', '>']));
        push_word(&payload[cursor..marker.start()], boundary, marker_time, words);
        boundary = marker_time;
        cursor = marker.end();
    }

    push_word(&payload[cursor..], boundary, block_end, words);
}

/// 剥除标注标记并规范化空白后，把非空片段作为一个词追加到序列末尾。
fn push_word(fragment: &str, start: f64, end: f64, words: &mut Vec<TimedWord>) {
    let stripped = MARKUP_TAG_RE.replace_all(fragment, "");
    let text = normalize_text_whitespace(&stripped);
    if text.is_empty() {
        return;
    }
    words.push(TimedWord {
        word: text,
        start,
        // 畸形时间码可能让结束早于开始，钳制以保持 start <= end
        end: end.max(start),
    });
}
