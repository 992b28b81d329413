//! 定义了时间轴构建与播放解算中使用的核心数据类型。

use serde::{Deserialize, Serialize};

/// 间奏占位符号。
///
/// 原始同步列表中，空文本、纯空白或该符号都表示一段没有人声的间奏。
pub const INSTRUMENTAL_PLACEHOLDER: &str = "♫";

/// 倒计时三个指示点对应的整秒阈值。
///
/// 距下一行开始还剩 `k` 秒以内时，阈值为 `k` 的指示点被点亮。
pub const COUNTDOWN_STEP_THRESHOLDS: [f64; 3] = [3.0, 2.0, 1.0];

//=============================================================================
// 1. 输入与中间数据
//=============================================================================

/// 从逐字时间戳字幕中解析出的一个词。
///
/// 不变量：`word` 非空且已去除首尾空白，`start <= end`。构建后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedWord {
    /// 词的文本内容。
    pub word: String,
    /// 开始时间（秒）。
    pub start: f64,
    /// 结束时间（秒）。
    pub end: f64,
}

/// 行级同步列表中的一个条目，由宿主以结构化数据提供。
///
/// 列表应按 `start` 升序排列；文本为空（或为 [`INSTRUMENTAL_PLACEHOLDER`]）
/// 表示一段间奏。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCue {
    /// 开始时间（秒）。
    pub start: f64,
    /// 该行的歌词文本。
    #[serde(default)]
    pub text: String,
}

impl LineCue {
    /// 创建一个新的行级条目。
    #[must_use]
    pub fn new(start: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }
}

/// 行级同步器的输出：一行歌词的时间窗口。
///
/// 这是词行对齐之前的中间表示，尚未携带逐字信息。
#[derive(Debug, Clone, PartialEq)]
pub struct LineWindow {
    /// 开始时间（秒）。
    pub start: f64,
    /// 结束时间（秒），等于下一行的开始时间（最后一行为估算值）。
    pub end: f64,
    /// 规范化后的行文本。
    pub text: String,
    /// 该行是否为间奏。
    pub is_instrumental: bool,
}

/// 逐字时间戳字幕的解析结果。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTranscript {
    /// 按出现顺序排列的词序列。
    pub words: Vec<TimedWord>,
    /// 解析过程中产生的非致命警告。
    pub warnings: Vec<String>,
}

//=============================================================================
// 2. 时间轴
//=============================================================================

/// 完成词行对齐后的一行歌词。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLine {
    /// 开始时间（秒）。
    pub start: f64,
    /// 结束时间（秒）。相邻两行之间无空隙：前一行的结束即后一行的开始。
    pub end: f64,
    /// 行文本。
    pub text: String,
    /// 分配给该行的词，保持字幕中的出现顺序。间奏行恒为空。
    #[serde(default)]
    pub words: Vec<TimedWord>,
    /// 该行是否为间奏。
    pub is_instrumental: bool,
}

impl ResolvedLine {
    /// 行时长（秒），不会为负。
    #[must_use]
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// 完整的歌词时间轴：升序、经过空隙填充的行序列。
///
/// 对同一组输入构建的结果是确定的，可安全地在线程间以只读方式共享。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// 对齐后的歌词行。
    pub lines: Vec<ResolvedLine>,
    /// 可选的翻译行列表（按 `start` 升序）。
    #[serde(default)]
    pub translations: Vec<LineCue>,
    /// 构建过程中产生的非致命警告。
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Timeline {
    /// 为时间轴附加一份翻译行列表。
    ///
    /// 列表会按开始时间重新排序，以便解算时按序查找。
    #[must_use]
    pub fn with_translations(mut self, mut cues: Vec<LineCue>) -> Self {
        cues.sort_by(|a, b| a.start.total_cmp(&b.start));
        self.translations = cues;
        self
    }

    /// 时间轴是否为空（没有任何歌词行）。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

//=============================================================================
// 3. 播放状态
//=============================================================================

/// 在某一播放时间点上，一个词相对于该时间点的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordState {
    /// 尚未开始（`t < start`）。
    Upcoming,
    /// 正在演唱（`start <= t < end`）。
    Active,
    /// 已经唱完（`t >= end`）。
    Spoken,
}

/// 某一播放时间点上的完整歌词状态。
///
/// 由 [`resolve_playback`](crate::timeline::resolver::resolve_playback)
/// 在每次查询时重新计算，借用时间轴中的数据，不做持久化。
/// 所有可能缺失的字段都以 `Option` 表示，调用方须先检查再使用。
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState<'a> {
    /// 当前行，若时间点尚未进入任何行则为 `None`。
    pub active_line: Option<&'a ResolvedLine>,
    /// 当前行在时间轴中的下标。
    pub active_line_index: Option<usize>,
    /// 上一行。
    pub previous_line: Option<&'a ResolvedLine>,
    /// 下一行。没有当前行时，为第一个开始时间晚于查询时间的行。
    pub next_line: Option<&'a ResolvedLine>,
    /// 当前是否处于间奏（没有当前行，或当前行本身是间奏）。
    pub is_instrumental: bool,
    /// 当前行的进度百分比（0 到 100）。行时长为零时恒为 0。
    pub line_progress: f64,
    /// 当前行每个词的状态，与 `active_line.words` 一一对应。间奏时为空。
    pub word_states: Vec<WordState>,
    /// 正在演唱的词在 `active_line.words` 中的下标。
    pub active_word_index: Option<usize>,
    /// 是否应显示间奏倒计时。
    pub show_countdown: bool,
    /// 距下一行开始的剩余秒数。不处于间奏或没有下一行时为 0。
    pub countdown_seconds_remaining: f64,
    /// 当前生效的翻译文本。间奏期间被抑制为 `None`。
    pub translation: Option<&'a str>,
}

impl PlaybackState<'_> {
    /// 倒计时三个指示点的点亮状态，顺序对应阈值 3/2/1 秒。
    ///
    /// 仅在 `show_countdown` 为真时才会有点亮的指示点。
    #[must_use]
    pub fn countdown_steps(&self) -> [bool; 3] {
        if !self.show_countdown {
            return [false; 3];
        }
        COUNTDOWN_STEP_THRESHOLDS.map(|k| self.countdown_seconds_remaining <= k)
    }
}

//=============================================================================
// 4. 配置
//=============================================================================

/// 时间轴构建与播放解算的配置项。
///
/// 将松弛窗口、倒计时窗口等原本散落的常量集中为可覆盖的具名配置。
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineOptions {
    /// 词行匹配时，行时间窗口向两侧放宽的秒数。
    pub slack_seconds: f64,
    /// 间奏倒计时的显示窗口：距下一行开始不超过该秒数时显示。
    pub countdown_window_seconds: f64,
    /// 最后一行没有后继时的默认时长（秒）。
    pub default_tail_seconds: f64,
    /// 整段播放的总时长（秒）。提供时用于约束最后一行的结束时间。
    pub total_duration: Option<f64>,
    /// 严格模式：行级同步列表乱序时返回错误而不是排序修正。
    pub strict_cue_order: bool,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            slack_seconds: 2.0,
            countdown_window_seconds: 3.0,
            default_tail_seconds: 5.0,
            total_duration: None,
            strict_cue_order: false,
        }
    }
}
