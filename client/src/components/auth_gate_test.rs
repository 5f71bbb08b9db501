use super::*;

#[test]
fn unchecked_gate_is_pending_in_any_state() {
    assert_eq!(gate_phase(false, GateState::Locked), GatePhase::Pending);
    assert_eq!(gate_phase(false, GateState::Unlocked), GatePhase::Pending);
}

#[test]
fn checked_locked_gate_shows_login() {
    assert_eq!(gate_phase(true, GateState::Locked), GatePhase::Login);
}

#[test]
fn checked_unlocked_gate_shows_content() {
    assert_eq!(gate_phase(true, GateState::Unlocked), GatePhase::Content);
}

#[test]
fn help_text_points_at_operator_sources() {
    assert!(CONFIG_GREP.contains("admin_password"));
    assert!(CONFIG_GREP.contains("api_key"));
    assert_eq!(CONTAINER_NAME, "antigravity-manager");
}
