use sentio_analysis::{Analysis, AnalysisError, init};
use sentio_kernel::domain::config::ApiConfig;
use sentio_kernel::domain::sentiment::SentimentLabel;

#[test]
fn test_init_creates_slice() {
    let slice = init(&ApiConfig::default()).expect("init should succeed");

    assert_eq!(slice.id, std::any::TypeId::of::<Analysis>());
    assert!(slice.name.ends_with("Analysis"));
    assert!(slice.downcast_ref::<Analysis>().is_some());
}

#[test]
fn test_init_rejects_inverted_thresholds() {
    let mut config = ApiConfig::default();
    config.analysis.positive_threshold = -0.2;
    config.analysis.negative_threshold = 0.2;

    let err = init(&config).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidThresholds { context: Some(_), .. }));
}

#[test]
fn test_configured_thresholds_are_used() {
    let mut config = ApiConfig::default();
    config.analysis.positive_threshold = 0.9;
    config.analysis.negative_threshold = -0.9;

    let slice = init(&config).unwrap();
    let analysis = slice.downcast_ref::<Analysis>().unwrap();
    let response = analysis.analyzer.analyze("I like it").unwrap();

    assert_eq!(response.sentiment, SentimentLabel::Neutral);
    assert!(response.confidence > 0.05);
}
