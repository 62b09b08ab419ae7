//! Tests for driver configuration loading and the frame loop.

use frame_driver::{run, DriverConfig, FrameSink, JsonLinesSink, SummarySink};
use std::io::Write;
use test_utils::fixtures::config::{DRIVER_YAML, INVALID_DRIVER_YAML};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn small_config() -> DriverConfig {
    let mut config = DriverConfig::default();
    config.engine.rows = 6;
    config.engine.cols = 6;
    config.frames = 4;
    config
}

// ============================================================================
// configuration tests
// ============================================================================

#[test]
fn test_load_config_from_yaml() {
    let file = write_config(DRIVER_YAML);
    let config = DriverConfig::from_file(file.path()).unwrap();

    assert_eq!(config.engine.grid_spacing, 10.0);
    assert_eq!(config.engine.rows, 8);
    assert_eq!(config.engine.cols, 12);
    assert_eq!(config.engine.noise_width, 3.0);
    assert_eq!(config.frames, 3);
    assert_eq!(config.start_time, 0.5);
    assert_eq!(config.time_step, 0.25);
    assert_eq!(config.seed, Some(7));
    assert!(config.output.is_none());
    // Unspecified engine fields keep their defaults
    assert_eq!(config.engine.value_scale, 2.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_yaml_config_fails_validation() {
    let file = write_config(INVALID_DRIVER_YAML);
    let config = DriverConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_config_file() {
    let err = DriverConfig::from_file("/nonexistent/driver.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_malformed_yaml() {
    let file = write_config("engine: [1, 2");
    assert!(DriverConfig::from_file(file.path()).is_err());
}

// ============================================================================
// frame loop tests
// ============================================================================

#[test]
fn test_run_counts_frames() {
    let mut sink = SummarySink::default();
    let summary = run(&small_config(), &mut sink).unwrap();

    assert_eq!(summary.frames, 4);
    assert_eq!(sink.frames, 4);
    assert_eq!(sink.segments, summary.segments);
}

#[test]
fn test_run_writes_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.jsonl");

    let mut config = small_config();
    config.start_time = 1.0;
    config.time_step = 0.5;

    let mut sink = JsonLinesSink::create(&path).unwrap();
    run(&config, &mut sink).unwrap();
    drop(sink);

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 4);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["frame"], i as u64);
        assert_eq!(record["time"], 1.0 + i as f64 * 0.5);
        assert_eq!(record["vertices"].as_array().unwrap().len(), 49);
        assert_eq!(record["isolines"].as_array().unwrap().len() % 2, 0);
    }
}

#[test]
fn test_run_is_reproducible_with_seed() {
    let mut config = small_config();
    config.seed = Some(1234);

    let mut a = JsonLinesSink::new(Vec::new());
    let mut b = JsonLinesSink::new(Vec::new());
    run(&config, &mut a).unwrap();
    run(&config, &mut b).unwrap();

    assert_eq!(a.into_inner().unwrap(), b.into_inner().unwrap());
}

#[test]
fn test_run_rejects_invalid_config() {
    let mut config = small_config();
    config.engine.cols = 0;
    let mut sink = SummarySink::default();
    assert!(run(&config, &mut sink).is_err());
    assert_eq!(sink.frames, 0);
}

struct FailingSink;

impl FrameSink for FailingSink {
    fn write_frame(
        &mut self,
        index: u64,
        _frame: &contour_engine::Frame<'_>,
    ) -> anyhow::Result<()> {
        anyhow::bail!("sink full at frame {}", index)
    }
}

#[test]
fn test_run_stops_on_sink_error() {
    let err = run(&small_config(), &mut FailingSink).unwrap_err();
    assert!(err.to_string().contains("sink full at frame 0"));
}
