//! Integration tests for configuration management

use chartkit::config::{Config, ConfigOverrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty());
    assert_eq!(config.render.dot, "dot");
    assert_eq!(config.render.gnuplot, "gnuplot");
    assert_eq!((config.render.width, config.render.height), (800, 600));
    assert!(
        !config.paths.out_dir.contains("$CHARTKIT"),
        "out_dir should be expanded"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/chartkit.log"
verbose = true

[render]
dot = "/opt/graphviz/bin/dot"
gnuplot = "gnuplot5"
width = 1280
height = 720

[paths]
out_dir = "./charts"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/chartkit.log");
    assert!(config.logging.verbose);
    assert_eq!(config.render.dot, "/opt/graphviz/bin/dot");
    assert_eq!(config.render.gnuplot, "gnuplot5");
    assert_eq!(config.render.width, 1280);
    assert_eq!(config.render.height, 720);
    assert_eq!(config.paths.out_dir, "./charts");
}

#[test]
fn test_config_from_toml_partial() {
    let config = Config::from_toml("[logging]\nlevel = \"error\"\n")
        .expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.render.dot, "dot");
    assert_eq!(config.render.width, 800);
    assert_eq!(config.paths.out_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CHARTKIT/chartkit.log"

[paths]
out_dir = "$CHARTKIT/out"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("chartkit"));
    assert!(!config.logging.file.contains("$CHARTKIT"));
    assert!(config.paths.out_dir.ends_with("out"));
    assert!(!config.paths.out_dir.contains("$CHARTKIT"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config.set("width", "1920").expect("Failed to set width");
    assert_eq!(config.get("width").as_deref(), Some("1920"));

    config.set("out-dir", "/srv/charts").expect("alias accepted");
    assert_eq!(config.get("out_dir").as_deref(), Some("/srv/charts"));

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("height", "0").is_err());
    assert!(config.set("height", "tall").is_err());
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("gnuplot", "/usr/bin/gnuplot-nox").expect("set");
    config.set("height", "300").expect("set");

    config.unset("gnuplot", &defaults).expect("unset gnuplot");
    config.unset("height", &defaults).expect("unset height");

    assert_eq!(config.render.gnuplot, defaults.render.gnuplot);
    assert_eq!(config.render.height, defaults.render.height);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load_from() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::from_defaults();
    config.set("dot", "/custom/dot").expect("set dot");
    config.save_to(&config_file).expect("save creates parent dirs");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.render.dot, "/custom/dot");
}

#[test]
fn test_load_from_creates_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let config = Config::load_from(&config_file);

    assert!(config_file.exists(), "first load should write defaults");
    assert_eq!(config.render.dot, Config::from_defaults().render.dot);
}

#[test]
fn test_load_from_merges_and_rewrites() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "[render]\ndot = \"\"\n").expect("write partial config");

    let config = Config::load_from(&config_file);
    assert_eq!(config.render.dot, "dot");

    let rewritten = fs::read_to_string(&config_file).expect("read config");
    assert!(rewritten.contains("dot = \"dot\""));
}

#[test]
fn test_load_from_invalid_file_falls_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "this is = = not toml").expect("write garbage");

    let config = Config::load_from(&config_file);
    assert_eq!(config.render.gnuplot, "gnuplot");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let logging_before = config.logging.clone();
    let overrides = ConfigOverrides {
        dot: Some("/opt/dot".to_string()),
        gnuplot: Some("/opt/gnuplot".to_string()),
        out_dir: Some("./custom_out".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.render.dot, "/opt/dot");
    assert_eq!(config.render.gnuplot, "/opt/gnuplot");
    assert_eq!(config.paths.out_dir, "./custom_out");

    // Logging is resolved by the binary, never through overrides
    assert_eq!(config.logging.level, logging_before.level);
    assert_eq!(config.logging.file, logging_before.file);
    assert_eq!(config.logging.verbose, logging_before.verbose);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.render.gnuplot.clone();

    config.apply_overrides(&ConfigOverrides {
        dot: Some("dot2".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.render.dot, "dot2");
    assert_eq!(config.render.gnuplot, before);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[render]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("gnuplot = \"gnuplot\""));
    assert!(display_str.contains("width = 800"));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let mut config = Config::from_toml(
        "[logging]\nlevel = \"error\"\nfile = \"/my/custom/path.log\"\n",
    )
    .expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();

    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
    assert!(Config::get_chartkit_dir()
        .to_string_lossy()
        .contains("chartkit"));
}
