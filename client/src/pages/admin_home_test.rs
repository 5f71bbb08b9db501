use super::*;

#[test]
fn status_line_shows_backend_summary() {
    let status = AdminStatus { service: "abv-admin".to_owned(), version: "1.2.3".to_owned(), uptime_secs: 61 };
    assert_eq!(status_line(Some(&status), None), "abv-admin 1.2.3 · up 1m 01s");
}

#[test]
fn status_line_while_loading() {
    assert_eq!(status_line(None, None), "Checking backend...");
}

#[test]
fn status_line_reports_rejected_credential() {
    assert_eq!(status_line(None, Some(&ApiError::Unauthorized)), "Credential rejected.");
}

#[test]
fn status_line_reports_other_failures() {
    assert_eq!(
        status_line(None, Some(&ApiError::Status(502))),
        "Backend unavailable: request failed: 502"
    );
}
