//! Synthetic chat generator for stress testing chatstats.
//!
//! Produces a normalized JSON event file with realistic conversation
//! clumps: short bursts of messages separated by long idle gaps, so the
//! segmenter has real boundaries to find.
//!
//! Usage: cargo run --bin gen_chat --features gen-test -- [events] [output]
//! Example: cargo run --bin gen_chat --features gen-test -- 100000 heavy_chat.json

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::{Duration, TimeZone, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "村上",
    "محمد",
    "User With Spaces",
    "emoji🎉user",
];

const WORDS: &[&str] = &[
    "hey", "ok", "lol", "sure", "maybe", "tomorrow", "great", "no", "yes", "why", "because",
    "later", "dinner", "meeting", "привет", "спасибо", "😀", "🔥", "really", "nice",
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let count: usize = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);
    let output = args
        .get(2)
        .map_or_else(|| "synthetic_chat.json".to_string(), String::clone);

    let mut rng = rand::thread_rng();
    let mut timestamp = Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap();

    let file = File::create(&output).expect("failed to create output file");
    let mut writer = BufWriter::new(file);
    writeln!(writer, "[").unwrap();

    for i in 0..count {
        // burst-or-gap: mostly quick follow-ups, sometimes hours of silence
        let gap_minutes = if rng.gen_bool(0.9) {
            rng.gen_range(0..10)
        } else {
            rng.gen_range(61..1_440)
        };
        timestamp += Duration::minutes(gap_minutes);

        let sender = SENDERS.choose(&mut rng).unwrap();
        let word_count = rng.gen_range(1..=12);
        let text: Vec<&str> = (0..word_count)
            .map(|_| *WORDS.choose(&mut rng).unwrap())
            .collect();

        let event = serde_json::json!({
            "timestamp": timestamp.to_rfc3339(),
            "subject": sender,
            "text": text.join(" "),
        });
        let comma = if i + 1 == count { "" } else { "," };
        writeln!(writer, "  {}{}", event, comma).unwrap();
    }

    writeln!(writer, "]").unwrap();
    writer.flush().unwrap();

    println!("Generated {} events in {}", count, output);
}
