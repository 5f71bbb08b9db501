//! Access gate wrapping the whole admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the desktop host the gate is inert. When the console is served over the
//! network it renders a credential form until a key is stored, then reloads so
//! every module starts over with the key in place. A 401 from the backend comes
//! back through the `UnauthorizedSignal` and locks the gate again.
//!
//! HYDRATION
//! =========
//! The server cannot see `localStorage` or the host globals, so SSR and the
//! first client render both emit the neutral `Pending` shell. The mount effect
//! then resolves the real state in the browser.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
#[cfg(feature = "hydrate")]
use leptos_dom::helpers::WindowListenerHandle;

use crate::state::auth::{GateController, GateState};
use crate::util::config::GateConfig;
use crate::util::env::HostEnvironment;
use crate::util::unauthorized::{Subscription, UnauthorizedSignal};

pub const LOGIN_TITLE: &str = "Secure Access";
pub const LOGIN_SUBTITLE: &str =
    "The console is running in web mode. Enter the admin password or API key to continue.";
pub const LOGIN_PLACEHOLDER: &str = "Admin password or API key";
pub const LOGIN_BUTTON: &str = "Verify and enter";
pub const CONTAINER_NAME: &str = "antigravity-manager";
pub const CONFIG_GREP: &str = r#"grep -E '"api_key"|"admin_password"' ~/.antigravity_tools/gui_config.json"#;

/// What the gate is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    /// Mount check has not run yet (SSR and first client render).
    Pending,
    Login,
    Content,
}

pub fn gate_phase(checked: bool, state: GateState) -> GatePhase {
    match (checked, state) {
        (false, _) => GatePhase::Pending,
        (true, GateState::Locked) => GatePhase::Login,
        (true, GateState::Unlocked) => GatePhase::Content,
    }
}

/// Render `children` only once the gate is unlocked.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let config = use_context::<GateConfig>().unwrap_or_default();
    let signal = use_context::<UnauthorizedSignal>().unwrap_or_default();
    let gate = GateController::from_config(&config, HostEnvironment::detect());

    let state = RwSignal::new(gate.initial_state());
    let checked = RwSignal::new(false);
    let input = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);
    let subscription: StoredValue<Option<Subscription>> = StoredValue::new(None);
    #[cfg(feature = "hydrate")]
    let bridge: StoredValue<Option<WindowListenerHandle>> = StoredValue::new(None);

    // PHASE: MOUNT CHECK + SUBSCRIBE
    // Runs once in the browser; nothing here is tracked.
    {
        let gate = gate.clone();
        Effect::new(move || {
            state.set(gate.mount());
            checked.set(true);

            let Some(sub) = gate.attach(&signal, move |transition| {
                // Signal already disposed after unmount: nothing to update.
                let _ = state.try_update(|s| *s = transition(*s));
            }) else {
                return;
            };
            subscription.set_value(Some(sub));

            #[cfg(feature = "hydrate")]
            bridge.set_value(Some(crate::util::unauthorized::bridge_window_event(
                signal.event_name(),
                signal.clone(),
            )));
        });
    }

    on_cleanup(move || {
        let _ = subscription.try_update_value(Option::take);
        #[cfg(feature = "hydrate")]
        if let Some(Some(handle)) = bridge.try_update_value(Option::take) {
            handle.remove();
        }
    });

    let on_submit = Callback::new(move |()| {
        let outcome = gate.submit(&input.get_untracked());
        notice.set(outcome.message());
        state.update(|s| *s = outcome.next_state(*s));
    });

    move || match gate_phase(checked.get(), state.get()) {
        GatePhase::Pending => view! { <div class="gate-pending" aria-busy="true"></div> }.into_any(),
        GatePhase::Content => children().into_any(),
        GatePhase::Login => view! { <LoginCard input=input notice=notice on_submit=on_submit/> }.into_any(),
    }
}

#[component]
fn LoginCard(input: RwSignal<String>, notice: RwSignal<Option<String>>, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <div class="gate-page">
            <div class="gate-card">
                <div class="gate-card__icon" aria-hidden="true">"🔒"</div>
                <h2 class="gate-card__title">{LOGIN_TITLE}</h2>
                <p class="gate-card__subtitle">{LOGIN_SUBTITLE}</p>
                <form
                    class="gate-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <input
                        class="gate-input"
                        type="password"
                        placeholder=LOGIN_PLACEHOLDER
                        autofocus=true
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="gate-button" type="submit">
                        {LOGIN_BUTTON}
                    </button>
                </form>
                <Show when=move || notice.get().is_some()>
                    <p class="gate-notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <div class="gate-help">
                    <p>
                        "If a separate admin password is set, enter it; otherwise enter the "
                        <code>"API_KEY"</code>
                        "."
                    </p>
                    <p>
                        "Forgot it? Run "
                        <code>{format!("docker logs {CONTAINER_NAME}")}</code>
                        " and look for "
                        <code>"Current API Key"</code>
                        " or "
                        <code>"Web UI Password"</code>
                        ", or run "
                        <code>{CONFIG_GREP}</code>
                        "."
                    </p>
                </div>
            </div>
        </div>
    }
}
