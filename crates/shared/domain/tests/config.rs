use fp_domain::config::{AppConfig, ChartConfig, LogConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let log = LogConfig::default();
    assert_eq!(log.level, "warn");
    assert!(log.dir.is_none());
    assert!(!log.json);

    let chart = ChartConfig::default();
    assert!(chart.enabled);
    assert_eq!(chart.height, 10);
    assert!(chart.svg.is_none());
    assert_eq!((chart.svg_width, chart.svg_height), (800, 500));
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "log": { "level": "debug" },
        "chart": { "height": 16, "svg": "/tmp/footprint.svg" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.log.level, "debug");
    assert!(!cfg.log.json);
    assert_eq!(cfg.chart.height, 16);
    assert!(cfg.chart.enabled);
    assert_eq!(cfg.chart.svg, Some(std::path::PathBuf::from("/tmp/footprint.svg")));
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.chart.svg_width, 800);
    assert_eq!(cfg.log.level, "warn");
}
