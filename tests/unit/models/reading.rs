use marketmood::error::FetchError;
use marketmood::models::{IndicatorKind, IndicatorSnapshot, IndicatorValues, Reading};

fn fold(result: Result<f64, FetchError>) -> Reading<f64> {
    result.into()
}

#[test]
fn test_errors_fold_into_readings() {
    let missing = fold(Err(FetchError::MissingCredential("NEWSAPI_KEY")));
    assert_eq!(missing, Reading::NoCredential);

    let limited = fold(Err(FetchError::RateLimited { provider: "reddit" }));
    assert_eq!(limited, Reading::RateLimited);

    let parse = fold(Err(FetchError::Parse("bad".into())));
    assert!(matches!(parse, Reading::ParseError(_)));

    let empty = fold(Err(FetchError::Empty("none".into())));
    assert!(matches!(empty, Reading::ParseError(_)));

    let status = fold(Err(FetchError::Status { status: 502 }));
    assert_eq!(status, Reading::FetchError("HTTP status 502".to_string()));

    let ok = fold(Ok(12.5));
    assert_eq!(ok.value(), Some(&12.5));
}

#[test]
fn test_error_kinds_are_stable_labels() {
    assert_eq!(FetchError::Timeout.kind(), "timeout");
    assert_eq!(FetchError::MissingCredential("X").kind(), "no_credential");
    assert_eq!(FetchError::Status { status: 500 }.kind(), "status");
}

#[test]
fn test_reading_serializes_with_status_tag() {
    let value = serde_json::to_value(Reading::Value(31.5)).expect("serialize");
    assert_eq!(value, serde_json::json!({ "status": "value", "detail": 31.5 }));

    let missing = serde_json::to_value(Reading::<f64>::NoCredential).expect("serialize");
    assert_eq!(missing, serde_json::json!({ "status": "no_credential" }));
}

#[test]
fn test_snapshot_from_values_marks_absent_indicators() {
    let snapshot = IndicatorSnapshot::from_values(&IndicatorValues::default().with_vix(20.0));

    assert_eq!(snapshot.volatility, Reading::Value(20.0));
    assert_eq!(snapshot.momentum, Reading::NotConfigured);
    assert_eq!(snapshot.value(IndicatorKind::Momentum), None);
}

#[test]
fn test_yield_spread_needs_both_yields() {
    let both = IndicatorSnapshot::from_values(&IndicatorValues::default().with_yields(5.0, 4.25));
    assert_eq!(both.value(IndicatorKind::YieldSpread), Some(-0.75));

    let mut one = IndicatorSnapshot::from_values(&IndicatorValues::default());
    one.long_yield = Reading::Value(4.0);
    assert_eq!(one.value(IndicatorKind::YieldSpread), None);
}

#[test]
fn test_news_score_carries_a_label() {
    let snapshot = IndicatorSnapshot::from_values(&IndicatorValues::default().with_news(72.0));
    let sentiment = snapshot.sentiment.value().expect("sentiment");
    assert_eq!(sentiment.label.as_str(), "Bullish");
    assert_eq!(snapshot.value(IndicatorKind::Sentiment), Some(72.0));
}
