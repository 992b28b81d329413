//! 定义了整个 `karaoke-timeline` 库的错误类型 `TimelineError`。

use thiserror::Error;

/// `karaoke-timeline` 库的通用错误枚举。
///
/// 解析路径本身是容错的（见各解析器文档），只有显式的校验失败才会产生错误。
#[derive(Error, Debug)]
pub enum TimelineError {
    /// 严格模式下，行级同步列表未按开始时间升序排列。
    #[error("行级同步列表乱序: 第 {index} 项开始于 {start} 秒，早于前一项的 {previous} 秒")]
    UnorderedCues {
        /// 乱序条目的下标（从 0 开始）。
        index: usize,
        /// 乱序条目的开始时间（秒）。
        start: f64,
        /// 前一条目的开始时间（秒）。
        previous: f64,
    },

    /// 内部逻辑错误或未明确分类的错误。
    #[error("内部错误: {0}")]
    Internal(String),
}

/// `TimelineError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, TimelineError>;
