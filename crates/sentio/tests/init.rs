use sentio::domain::config::ApiConfig;
use sentio::features::{self, analysis::Analysis};

#[test]
fn test_init_registers_every_feature() {
    let slices = sentio::init(&ApiConfig::default()).unwrap();

    assert_eq!(slices.len(), 1);
    assert!(slices.iter().any(|s| s.downcast_ref::<Analysis>().is_some()));
}

#[test]
fn test_init_surfaces_slice_errors() {
    let mut config = ApiConfig::default();
    config.analysis.negative_threshold = 0.5;

    let err = sentio::init(&config).unwrap_err();
    assert!(err.to_string().contains("Invalid thresholds"), "{err}");
}

#[test]
fn test_enabled_features() {
    assert!(features::is_enabled("analysis"));
    assert!(!features::is_enabled("licensing"));
}
