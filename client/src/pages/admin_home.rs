//! Admin console landing page, rendered behind `AuthGate`.
//!
//! Fetches backend status with the stored credential. A rejected credential
//! is handled by the gate (via the unauthorized hub), so this page only has to
//! report other failures. "Lock" raises the same signal.

#[cfg(test)]
#[path = "admin_home_test.rs"]
mod admin_home_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::AdminStatus;
use crate::util::unauthorized::UnauthorizedSignal;

/// Text for the status panel.
pub fn status_line(status: Option<&AdminStatus>, error: Option<&ApiError>) -> String {
    match (status, error) {
        (Some(s), _) => format!("{} {} · up {}", s.service, s.version, s.uptime_label()),
        (None, Some(ApiError::Unauthorized)) => "Credential rejected.".to_owned(),
        (None, Some(e)) => format!("Backend unavailable: {e}"),
        (None, None) => "Checking backend...".to_owned(),
    }
}

#[component]
pub fn AdminHomePage() -> impl IntoView {
    let signal = use_context::<UnauthorizedSignal>().unwrap_or_default();
    let status = RwSignal::new(None::<AdminStatus>);
    let error = RwSignal::new(None::<ApiError>);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::config::GateConfig;
        use crate::util::credential_store::{LocalStorageStore, read_credential};

        let key = use_context::<GateConfig>().unwrap_or_default().storage_key;
        let signal = signal.clone();
        Effect::new(move || {
            let store = LocalStorageStore::new(key.clone());
            let signal = signal.clone();
            leptos::task::spawn_local(async move {
                let credential = read_credential(&store);
                match crate::net::api::fetch_admin_status(credential.as_deref(), &signal).await {
                    Ok(s) => status.set(Some(s)),
                    Err(e) => error.set(Some(e)),
                }
            });
        });
    }

    view! {
        <div class="admin-home">
            <header class="admin-home__header">
                <h1>"Admin Console"</h1>
                <button
                    class="gate-button gate-button--ghost"
                    type="button"
                    on:click=move |_| {
                        signal.raise();
                    }
                >
                    "Lock"
                </button>
            </header>
            <p class="admin-home__status">
                {move || status_line(status.get().as_ref(), error.get().as_ref())}
            </p>
        </div>
    }
}
