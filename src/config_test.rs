use super::*;

#[test]
fn defaults_match_server_routes() {
    let config = UiKitConfig::default();
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.current_user_endpoint, "/auth/me");
    assert_eq!(config.toast_ms, 4000);
    assert_eq!(config.warning_toast_ms, 6000);
    assert_eq!(config.copied_toast_ms, 2000);
    assert_eq!(config.toast_fade_ms, 300);
    assert_eq!(config.debounce_ms, 300);
    assert_eq!(config.loading_message, "Processing...");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = UiKitConfig::from_json(r#"{"login_path": "/signin", "toast_ms": 2500}"#).unwrap();
    assert_eq!(config.login_path, "/signin");
    assert_eq!(config.toast_ms, 2500);
    assert_eq!(config.current_user_endpoint, "/auth/me");
}

#[test]
fn blank_json_is_default() {
    assert_eq!(UiKitConfig::from_json("  ").unwrap(), UiKitConfig::default());
}

#[test]
fn malformed_json_is_rejected() {
    assert!(UiKitConfig::from_json("{login_path").is_err());
}
