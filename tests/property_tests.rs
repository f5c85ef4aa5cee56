//! Property-based tests for linelog using proptest

use linelog::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

/// Bounded-depth value trees; shared cells are fresh, so no cycles.
fn any_value() -> impl Strategy<Value = LogValue> {
    let leaf = prop_oneof![
        Just(LogValue::Null),
        any::<bool>().prop_map(LogValue::Bool),
        any::<i64>().prop_map(LogValue::Int),
        any::<f64>().prop_map(LogValue::Float),
        "[a-z0-9 ]{0,12}".prop_map(LogValue::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(LogValue::array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| LogValue::map(entries)),
        ]
    })
}

proptest! {
    /// Level names roundtrip through parsing
    #[test]
    fn test_level_name_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.name().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering matches numeric rank
    #[test]
    fn test_level_ordering_matches_rank(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
    }

    /// A call emits a primary or secondary line exactly when its rank
    /// reaches the minimum
    #[test]
    fn test_filter_threshold(min in any_level(), call in any_level()) {
        let primary = MemorySink::new();
        let secondary = MemorySink::new();
        let logger = Logger::builder()
            .env_source(Box::new(MapEnv::new().with("NO_COLOR", "1")))
            .min_level(min)
            .primary_stream(Box::new(primary.clone()))
            .secondary_stream(Box::new(secondary.clone()))
            .on_fatal(Box::new(|| {}))
            .build()
            .unwrap();

        logger.log(call, "probe");

        let emitted = !primary.is_empty() || !secondary.is_empty();
        prop_assert_eq!(emitted, call >= min);
    }

    /// Any acyclic value encodes to serializable JSON
    #[test]
    fn test_encode_always_serializes(value in any_value()) {
        let encoded = linelog::encode_value(&value);
        prop_assert!(serde_json::to_string(&encoded).is_ok());
    }

    /// Rendering never produces a generic object placeholder
    #[test]
    fn test_render_never_generic_placeholder(value in any_value()) {
        let rendered = linelog::render(&value);
        prop_assert!(!rendered.contains("[object"));
    }

    /// JSONL output is one parseable line per call
    #[test]
    fn test_jsonl_lines_parse(value in any_value()) {
        let primary = MemorySink::new();
        let logger = Logger::builder()
            .env_source(Box::new(MapEnv::new().with("NO_COLOR", "1")))
            .format(OutputFormat::Jsonl)
            .primary_stream(Box::new(primary.clone()))
            .secondary_stream(linelog::discard())
            .on_fatal(Box::new(|| {}))
            .build()
            .unwrap();

        logger.log_with(LogLevel::Info, value, Vec::new());

        let lines = primary.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(serde_json::from_str::<serde_json::Value>(&lines[0]).is_ok());
    }
}
