use super::*;

#[test]
fn defaults_match_console_conventions() {
    let config = GateConfig::default();
    assert_eq!(config.storage_key, "abv_admin_api_key");
    assert_eq!(config.unauthorized_event, "abv-unauthorized");
    assert_eq!(config.empty_submit, EmptySubmitPolicy::Ignore);
}

#[test]
fn parse_policy_accepts_known_values() {
    assert_eq!(EmptySubmitPolicy::parse("ignore"), Some(EmptySubmitPolicy::Ignore));
    assert_eq!(EmptySubmitPolicy::parse(" Notice "), Some(EmptySubmitPolicy::Notice));
    assert_eq!(EmptySubmitPolicy::parse("shout"), None);
}

#[test]
fn runtime_overrides_replace_provided_fields() {
    let mut config = GateConfig::default();
    apply_runtime_overrides(
        &mut config,
        RuntimeConfig {
            storage_key: Some("custom_key".to_owned()),
            unauthorized_event: None,
            empty_submit: Some("notice".to_owned()),
        },
    );
    assert_eq!(config.storage_key, "custom_key");
    assert_eq!(config.unauthorized_event, "abv-unauthorized");
    assert_eq!(config.empty_submit, EmptySubmitPolicy::Notice);
}

#[test]
fn runtime_overrides_skip_blank_and_unknown_values() {
    let mut config = GateConfig::default();
    apply_runtime_overrides(
        &mut config,
        RuntimeConfig {
            storage_key: Some("   ".to_owned()),
            unauthorized_event: Some(String::new()),
            empty_submit: Some("loud".to_owned()),
        },
    );
    assert_eq!(config, GateConfig::default());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_browser_is_default() {
    assert_eq!(GateConfig::load(), GateConfig::default());
}
