// tests/unit_config.rs
use rankpath_core::config::{Config, RankConfig, RankMode, RandomConfig};
use rankpath_core::error::RankpathError;
use std::fs;

#[test]
fn test_defaults() {
    let r = RankConfig::default();
    assert!((r.damping - 0.15).abs() < f64::EPSILON);
    assert_eq!(r.iterations, 8);
    assert_eq!(r.top_k, 100);
    assert!(r.tolerance.is_none());
    assert_eq!(r.mode, RankMode::Squaring);

    let g = RandomConfig::default();
    assert!(g.min_nodes <= g.max_nodes);
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let c = Config::parse_toml("[rank]\ntop_k = 10\nmode = \"vector\"\n").unwrap();
    assert_eq!(c.rank.top_k, 10);
    assert_eq!(c.rank.mode, RankMode::Vector);
    assert_eq!(c.rank.iterations, 8);
    assert_eq!(c.random.max_nodes, RandomConfig::default().max_nodes);
}

#[test]
fn test_malformed_toml() {
    assert!(matches!(
        Config::parse_toml("[rank\n"),
        Err(RankpathError::Toml(_))
    ));
}

#[test]
fn test_load_from_file_and_exclusions() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("skip.txt"), "London\n# comment\n\nDublin\n").unwrap();
    let path = d.path().join("rankpath.toml");
    fs::write(
        &path,
        "[rank]\ndamping = 0.2\ntolerance = 1e-6\n\n[input]\nexclude_file = \"skip.txt\"\nexclude = [\"Chicago\"]\n",
    )
    .unwrap();

    let c = Config::load_from(&path).unwrap();
    assert!((c.rank.damping - 0.2).abs() < f64::EPSILON);
    assert_eq!(c.rank.tolerance, Some(1e-6));
    assert_eq!(c.source.as_deref(), Some(path.as_path()));

    let names = c.exclusions().unwrap();
    assert_eq!(names, vec!["Chicago", "London", "Dublin"]);
}

#[test]
fn test_missing_exclusion_file_is_io_error() {
    let mut c = Config::default();
    c.input.exclude_file = Some("/definitely/not/here.txt".into());
    assert!(matches!(c.exclusions(), Err(RankpathError::Io { .. })));
}

#[test]
fn test_validation() {
    let mut c = Config::default();
    c.rank.damping = 1.5;
    assert!(matches!(c.validate(), Err(RankpathError::InvalidDamping(_))));

    let mut c = Config::default();
    c.rank.top_k = 0;
    assert!(c.validate().is_err());

    let mut c = Config::default();
    c.random.min_nodes = 30;
    c.random.max_nodes = 5;
    assert!(c.validate().is_err());

    let mut c = Config::default();
    c.rank.tolerance = Some(-1.0);
    assert!(c.validate().is_err());

    let c = Config::parse_toml("[random]\nmax_distance = nan\n").unwrap();
    assert!(matches!(c.validate(), Err(RankpathError::Config(_))));

    let c = Config::parse_toml("[random]\nmax_distance = inf\n").unwrap();
    assert!(c.validate().is_err());
}

#[test]
fn test_save_round_trip() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("out.toml");
    let mut c = Config::default();
    c.rank.iterations = 3;
    c.save(&path).unwrap();
    let back = Config::load_from(&path).unwrap();
    assert_eq!(back.rank.iterations, 3);
}
