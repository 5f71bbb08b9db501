use super::*;

#[test]
fn no_globals_is_network_served() {
    assert_eq!(HostEnvironment::from_globals([]), HostEnvironment::NetworkServed);
}

#[test]
fn tauri_internals_marks_trusted_host() {
    assert_eq!(
        HostEnvironment::from_globals(["__TAURI_INTERNALS__"]),
        HostEnvironment::TrustedHost
    );
}

#[test]
fn legacy_tauri_global_marks_trusted_host() {
    assert!(HostEnvironment::from_globals(["__TAURI__"]).is_trusted());
}

#[test]
fn unrelated_globals_are_ignored() {
    assert_eq!(
        HostEnvironment::from_globals(["__REDUX_DEVTOOLS__", "tauri"]),
        HostEnvironment::NetworkServed
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detect_outside_browser_is_network_served() {
    assert_eq!(HostEnvironment::detect(), HostEnvironment::NetworkServed);
}
