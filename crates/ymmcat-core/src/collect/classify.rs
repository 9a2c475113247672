//! Heuristic category classification.
//!
//! Two ordered rule lists: exact topic matches first, then description keyword
//! groups. The first matching rule wins.

use crate::model::Category;

/// Lowercase topic -> category, checked for each topic in repository order.
pub const TOPIC_RULES: &[(&str, Category)] = &[
    ("effect", Category::VideoEffect),
    ("video-effect", Category::VideoEffect),
    ("visual-effect", Category::VideoEffect),
    ("audio-effect", Category::AudioEffect),
    ("sound-effect", Category::AudioEffect),
    ("voice", Category::VoiceSynthesis),
    ("voice-synthesis", Category::VoiceSynthesis),
    ("tts", Category::VoiceSynthesis),
    ("shape", Category::Shape),
    ("text", Category::Text),
    ("subtitle", Category::Text),
    ("output", Category::VideoOutput),
    ("export", Category::VideoOutput),
    ("utility", Category::Utility),
    ("tool", Category::Utility),
];

/// Keyword groups scanned in the lowercased description, in priority order.
pub const DESCRIPTION_RULES: &[(&[&str], Category)] = &[
    (&["エフェクト", "effect"], Category::VideoEffect),
    (&["音声合成", "voice", "tts"], Category::VoiceSynthesis),
    (&["図形", "shape", "polygon"], Category::Shape),
    (&["テキスト", "字幕", "subtitle"], Category::Text),
    (&["出力", "export", "output"], Category::VideoOutput),
    (&["音声", "audio", "sound"], Category::AudioEffect),
];

fn topic_category(topic: &str) -> Option<Category> {
    let lower = topic.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|(t, _)| *t == lower)
        .map(|(_, c)| *c)
}

fn description_category(description: &str) -> Option<Category> {
    let desc = description.to_lowercase();
    DESCRIPTION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| desc.contains(k)))
        .map(|(_, c)| *c)
}

pub fn classify(topics: &[String], description: Option<&str>) -> Category {
    topics
        .iter()
        .find_map(|t| topic_category(t))
        .or_else(|| description.and_then(description_category))
        .unwrap_or(Category::Other)
}
