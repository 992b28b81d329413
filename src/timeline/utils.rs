//! 包含时间码解析与格式化等工具函数的模块。

use tracing::warn;

/// 将文本时间码解析为秒数。
///
/// 接受 `HH:MM:SS.mmm` 或 `MM:SS.mmm` 两种形式。按 `:` 分割后，
/// 三段视为时/分/秒，两段视为分/秒。
///
/// 采用闭合失败策略：空字符串、段数不对或数字无法解析时一律返回 `0.0`，
/// 绝不报错，以免单个畸形时间码拖垮整份字幕的解析。
#[must_use]
pub fn parse_timestamp(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let values: Option<Vec<f64>> = parts
        .iter()
        .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect();

    let Some(values) = values else {
        warn!("无法解析时间码 '{trimmed}'，已回退为 0.0");
        return 0.0;
    };

    match values.as_slice() {
        [hours, minutes, seconds] => hours * 3600.0 + minutes * 60.0 + seconds,
        [minutes, seconds] => minutes * 60.0 + seconds,
        _ => {
            warn!("时间码 '{trimmed}' 的段数无效，已回退为 0.0");
            0.0
        }
    }
}

/// 将秒数格式化为 `MM:SS` 形式的播放时钟文本。
///
/// 秒数向下取整；负数和非有限值按 0 处理。
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// 规范化文本中的空白字符。
#[must_use]
pub fn normalize_text_whitespace(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "期望 {expected}，实际为 {actual}"
        );
    }

    // 解析带小时的时间码
    #[test]
    fn test_parse_timestamp_with_hours() {
        assert_close(parse_timestamp("01:02:03.000"), 3723.0);
        assert_close(parse_timestamp("00:01:23.456"), 83.456);
    }

    // 解析不带小时的时间码
    #[test]
    fn test_parse_timestamp_minutes_seconds() {
        assert_close(parse_timestamp("01:23.456"), 83.456);
        assert_close(parse_timestamp("00:05.000"), 5.0);
    }

    // 空输入与畸形输入回退为 0.0
    #[test]
    fn test_parse_timestamp_fails_closed() {
        assert_close(parse_timestamp(""), 0.0);
        assert_close(parse_timestamp("   "), 0.0);
        assert_close(parse_timestamp("abc"), 0.0);
        assert_close(parse_timestamp("12"), 0.0);
        assert_close(parse_timestamp("1:2:3:4"), 0.0);
        assert_close(parse_timestamp("01:xx.000"), 0.0);
    }

    // 首尾空白不影响解析
    #[test]
    fn test_parse_timestamp_trims_input() {
        assert_close(parse_timestamp("  00:10.500  "), 10.5);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(5.9), "00:05");
        assert_eq!(format_clock(65.0), "01:05");
        assert_eq!(format_clock(3723.0), "62:03");
        assert_eq!(format_clock(-3.0), "00:00");
        assert_eq!(format_clock(f64::NAN), "00:00");
    }

    #[test]
    fn test_normalize_text_whitespace() {
        assert_eq!(normalize_text_whitespace("  Hello   world "), "Hello world");
        assert_eq!(normalize_text_whitespace("   "), "");
    }
}
