#![warn(missing_docs)]

//! # Karaoke Timeline RS
//!
//! 卡拉OK 歌词视频的时间轴解算引擎。把逐字时间戳字幕（WebVTT 子集）与
//! 行级同步列表（空文本表示间奏）对齐为一条无空隙的歌词时间轴，并在
//! 任意播放时间点上解算当前行、当前词、上下文行、行内进度与间奏倒计时。
//!
//! ## 主要功能
//!
//! - **字幕解析**: 解析带内嵌时间码的 WebVTT 子集，得到逐词时间序列。
//! - **词行对齐**: 按文本子串与时间窗口双重匹配，把词贪心地分配到各行。
//! - **播放解算**: `(timeline, t)` 的纯函数，逐帧调用，支持任意跳转。
//! - **渲染无关**: 本库不做任何绘制与 I/O，只产出供渲染层读取的状态。
//!
//! ## 示例
//!
//! ```rust
//! use karaoke_timeline_rs::{LineCue, TimelineOptions, build_timeline, resolve_playback};
//!
//! let transcript = "WEBVTT\n\n00:00:01.000 --> 00:00:03.000\nHi <00:00:02.000> there\n";
//! let cues = vec![
//!     LineCue::new(0.0, "Hi there"),
//!     LineCue::new(5.0, ""), // 间奏
//!     LineCue::new(10.0, "Next line"),
//! ];
//!
//! let options = TimelineOptions::default();
//! let timeline = build_timeline(transcript, &cues, &options).unwrap();
//! assert_eq!(timeline.lines.len(), 3);
//! assert_eq!(timeline.lines[0].words.len(), 2);
//!
//! let state = resolve_playback(&timeline, 1.5, &options);
//! assert_eq!(state.active_line_index, Some(0));
//! assert_eq!(state.active_word_index, Some(0));
//!
//! // 间奏中，距下一行 2.5 秒：显示倒计时
//! let state = resolve_playback(&timeline, 7.5, &options);
//! assert!(state.is_instrumental);
//! assert!(state.show_countdown);
//! ```

pub mod error;
pub mod timeline;

pub use crate::{
    error::{Result, TimelineError},
    timeline::{
        build_timeline,
        cache::TimelineCache,
        resolver::resolve_playback,
        types::{
            LineCue, PlaybackState, ResolvedLine, TimedWord, Timeline, TimelineOptions, WordState,
        },
    },
};
