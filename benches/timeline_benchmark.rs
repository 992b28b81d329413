use std::fmt::Write as _;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use karaoke_timeline_rs::{LineCue, TimelineOptions, build_timeline, resolve_playback};

/// 生成一首 `num_lines` 行的合成歌曲：逐字时间戳字幕 + 行级同步列表。
/// 每隔 8 行插入一段间奏。
fn synthetic_song(num_lines: usize) -> (String, Vec<LineCue>) {
    let mut transcript = String::from("WEBVTT\n\n");
    let mut cues = Vec::with_capacity(num_lines);

    for i in 0..num_lines {
        let start = i as f64 * 4.0;
        if i % 8 == 7 {
            cues.push(LineCue::new(start, ""));
            continue;
        }

        let text = format!("line {i} with some more words");
        cues.push(LineCue::new(start, text.clone()));

        let _ = writeln!(
            transcript,
            "{} --> {}",
            format_vtt_time(start + 0.1),
            format_vtt_time(start + 3.5)
        );
        let words: Vec<&str> = text.split(' ').collect();
        let step = 3.4 / words.len() as f64;
        for (j, word) in words.iter().enumerate() {
            let _ = write!(transcript, "{word}");
            if j + 1 < words.len() {
                let _ = write!(
                    transcript,
                    " <{}> ",
                    format_vtt_time(start + 0.1 + step * (j + 1) as f64)
                );
            }
        }
        transcript.push_str("\n\n");
    }

    (transcript, cues)
}

fn format_vtt_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        total_ms / 3_600_000,
        total_ms / 60_000 % 60,
        total_ms / 1000 % 60,
        total_ms % 1000
    )
}

fn bench_build_timeline(c: &mut Criterion) {
    let (transcript, cues) = synthetic_song(120);
    let options = TimelineOptions::default();

    c.bench_function("build_timeline_120_lines", |b| {
        b.iter(|| {
            build_timeline(black_box(&transcript), black_box(&cues), &options).unwrap()
        });
    });
}

fn bench_resolve_playback(c: &mut Criterion) {
    let (transcript, cues) = synthetic_song(120);
    let options = TimelineOptions::default();
    let timeline = build_timeline(&transcript, &cues, &options).unwrap();
    let total = cues.last().map_or(0.0, |cue| cue.start + 4.0);

    // 模拟一次 24 fps 的完整播放
    c.bench_function("resolve_playback_full_pass_24fps", |b| {
        b.iter(|| {
            let mut t = 0.0;
            while t < total {
                black_box(resolve_playback(black_box(&timeline), t, &options));
                t += 1.0 / 24.0;
            }
        });
    });
}

criterion_group!(benches, bench_build_timeline, bench_resolve_playback);
criterion_main!(benches);
