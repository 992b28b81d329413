//! 字幕解析器模块。

pub mod vtt_parser;
