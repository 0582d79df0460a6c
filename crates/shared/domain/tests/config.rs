use sentio_domain::config::{
    AnalysisConfig, ApiConfig, BackendConfig, CorsConfig, DashboardConfig, ServerConfig,
};
use serde_json::json;

#[test]
fn api_defaults_match_the_deployment_ports() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8000);
    assert!(server.ssl.is_none());

    let analysis = AnalysisConfig::default();
    assert!((analysis.positive_threshold - 0.05).abs() < f64::EPSILON);
    assert!((analysis.negative_threshold + 0.05).abs() < f64::EPSILON);

    assert!(CorsConfig::default().allows_any_origin());
}

#[test]
fn dashboard_defaults_point_at_local_backend() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.server.port, 8501);
    assert_eq!(cfg.environment, "development");

    let backend = BackendConfig::default();
    assert_eq!(backend.url, "http://localhost:8000");
    assert_eq!(backend.timeout_secs, 10);
    assert_eq!(backend.retries, 5);
    assert_eq!(backend.health_ttl_secs, 60);
}

#[test]
fn api_config_deserializes_partial_documents() {
    let raw = json!({
        "server": { "address": "::", "port": 9000 },
        "cors": { "allowed_origins": ["http://localhost:8501"] },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert!(!cfg.cors.allows_any_origin());
    assert_eq!(cfg.cors.max_age_secs, 3600);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert!((cfg.analysis.positive_threshold - 0.05).abs() < f64::EPSILON);
}

#[test]
fn config_can_be_patched_through_deref_mut() {
    let mut cfg = ApiConfig::default();
    let shared = cfg.clone();
    cfg.server.port = 1234;

    assert_eq!(cfg.server.port, 1234);
    assert_eq!(shared.server.port, 8000, "clones must not observe later edits");
}
