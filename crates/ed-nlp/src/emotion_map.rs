//! Classifier label to localized display emotion.

/// Sentinel for labels the map does not know. Lookups degrade to this value
/// instead of failing.
pub const UNCLASSIFIABLE_EMOTION: &str = "분류불가";

/// Closed set of labels the emotion model emits, with display strings.
pub(crate) const EMOTION_LABELS: [(&str, &str); 8] = [
    ("happy", "기쁨"),
    ("sad", "슬픔"),
    ("anxious", "불안"),
    ("embarrassed", "당황"),
    ("angry", "분노"),
    ("heartache", "상처"),
    ("surprise", "놀람"),
    ("neutral", "중립"),
];

/// Map a raw classifier label to its display emotion.
pub fn display_emotion(label: &str) -> &'static str {
    EMOTION_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, display)| *display)
        .unwrap_or(UNCLASSIFIABLE_EMOTION)
}
