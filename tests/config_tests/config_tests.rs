//! Tests for Config and LogLevel

use mcstat::{Config, ErrorKind, LogLevel};

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.server_host, "127.0.0.1");
    assert_eq!(config.server_port, 25565);
    assert_eq!(config.listen_addr, "0.0.0.0:8080");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.connect_timeout_ms, 5000);
    assert_eq!(config.read_timeout_ms, 5000);
    assert_eq!(config.write_timeout_ms, 5000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = Config::builder()
        .server_host("mc.example.com")
        .server_port(25566)
        .listen_port(9090)
        .log_level(LogLevel::Debug)
        .worker_threads(8)
        .build();

    assert_eq!(config.server_host, "mc.example.com");
    assert_eq!(config.server_port, 25566);
    assert_eq!(config.listen_addr, "0.0.0.0:9090");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.worker_threads, 8);
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        Config::builder().server_host("").build(),
        Config::builder().server_port(0).build(),
        Config::builder().connect_timeout_ms(0).build(),
        Config::builder().read_timeout_ms(0).build(),
        Config::builder().write_timeout_ms(0).build(),
        Config::builder().worker_threads(0).build(),
    ];

    for config in cases {
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other, "{:?}", config);
    }
}

// =============================================================================
// LogLevel Tests
// =============================================================================

#[test]
fn test_parse_log_levels() {
    assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
    assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
}

#[test]
fn test_unknown_log_level_is_error() {
    assert!("VERBOSE".parse::<LogLevel>().is_err());
    assert!("".parse::<LogLevel>().is_err());
}

#[test]
fn test_resolve_falls_back_to_info() {
    assert_eq!(LogLevel::resolve("ERROR"), (LogLevel::Error, true));
    assert_eq!(LogLevel::resolve("WARN"), (LogLevel::Info, false));
}

#[test]
fn test_level_ordering() {
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Error);
}

#[test]
fn test_level_display_round_trips() {
    for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Error] {
        assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
    }
}
