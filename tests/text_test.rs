use ledger_basics::{
    config,
    text::{byte_len, count_code_points},
    TextStats,
};
use rstest::rstest;

#[test_log::test]
fn test_sample_text_stats() {
    let stats = TextStats::of(config::SAMPLE_TEXT);

    assert_eq!(stats.code_points, 10);
    assert_eq!(stats.bytes, 14);
    assert!(!stats.is_ascii());
}

#[rstest]
#[case("", 0, 0)]
#[case("Hello", 5, 5)]
#[case("\u{e9}", 1, 2)]
#[case("世界", 2, 6)]
#[case("🦀", 1, 4)]
#[case("a\u{301}", 2, 3)]
fn test_counts(#[case] text: &str, #[case] code_points: usize, #[case] bytes: usize) {
    assert_eq!(count_code_points(text), code_points);
    assert_eq!(byte_len(text), bytes);
    assert_eq!(TextStats::of(text), TextStats { code_points, bytes });
}

#[test]
fn test_ascii_detection() {
    assert!(TextStats::of("plain ascii").is_ascii());
    assert!(TextStats::of("").is_ascii());
    assert!(!TextStats::of("naïve").is_ascii());
}

#[test]
fn test_from_utf8_valid_bytes() {
    let stats = TextStats::from_utf8("Hello, 世界!".as_bytes()).unwrap();

    assert_eq!(stats, TextStats { code_points: 10, bytes: 14 });
}

#[test_log::test]
fn test_from_utf8_reports_offset() {
    // Truncated three-byte sequence for '世'.
    let bytes = [b'H', b'i', 0xE4, 0xB8];

    let err = TextStats::from_utf8(&bytes).unwrap_err();

    assert!(
        err.to_string().contains("byte offset 2"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_stats_serialize_to_json() {
    let stats = TextStats::of(config::SAMPLE_TEXT);

    assert_eq!(
        serde_json::to_value(stats).unwrap(),
        serde_json::json!({"code_points": 10, "bytes": 14})
    );
}
