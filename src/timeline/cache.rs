//! 按输入内容哈希记忆化时间轴的并发缓存。
//!
//! 时间轴构建是其两份输入的纯函数，逐帧查询的调用方应当缓存构建结果，
//! 避免每帧重新解析字幕。缓存返回 `Arc<Timeline>`，多线程宿主可以只读共享。

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;

use crate::{
    error::Result,
    timeline::{
        build_timeline,
        types::{LineCue, Timeline, TimelineOptions},
    },
};

/// 时间轴缓存。键为字幕文本、同步列表与配置共同的内容哈希。
#[derive(Debug, Default)]
pub struct TimelineCache {
    entries: DashMap<u64, Arc<Timeline>>,
}

impl TimelineCache {
    /// 创建一个空缓存。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回缓存中的时间轴；未命中时构建并存入。
    ///
    /// # Errors
    ///
    /// 构建失败时（严格模式下同步列表乱序）原样返回错误，不缓存失败结果。
    pub fn get_or_build(
        &self,
        transcript: &str,
        cues: &[LineCue],
        options: &TimelineOptions,
    ) -> Result<Arc<Timeline>> {
        let key = cache_key(transcript, cues, options);
        if let Some(hit) = self.entries.get(&key) {
            return Ok(Arc::clone(&hit));
        }

        let timeline = Arc::new(build_timeline(transcript, cues, options)?);
        self.entries.insert(key, Arc::clone(&timeline));
        Ok(timeline)
    }

    /// 当前缓存的条目数。
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 缓存是否为空。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 清空缓存。
    pub fn clear(&self) {
        self.entries.clear();
    }
}

/// 计算一组输入的内容哈希。
///
/// `f64` 按位模式参与哈希，因此相同位模式的输入必然命中同一条目。
fn cache_key(transcript: &str, cues: &[LineCue], options: &TimelineOptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    transcript.hash(&mut hasher);
    cues.len().hash(&mut hasher);
    for cue in cues {
        cue.start.to_bits().hash(&mut hasher);
        cue.text.hash(&mut hasher);
    }
    options.slack_seconds.to_bits().hash(&mut hasher);
    options.countdown_window_seconds.to_bits().hash(&mut hasher);
    options.default_tail_seconds.to_bits().hash(&mut hasher);
    options.total_duration.map(f64::to_bits).hash(&mut hasher);
    options.strict_cue_order.hash(&mut hasher);
    hasher.finish()
}
