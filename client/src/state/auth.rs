//! Access-gate state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGate` renders protected content only while the gate is `Unlocked`.
//! This module owns every transition so the component is left with signal
//! plumbing and markup:
//!
//! ```text
//! Locked   --(trusted host)-------> Unlocked   construction only
//! Locked   --(stored credential)--> Unlocked   mount check
//! Locked   --(non-empty submit)---> Unlocked   + persist + reload
//! Unlocked --(unauthorized)-------> Locked     + purge credential
//! ```
//!
//! INVARIANT
//! =========
//! `Unlocked` implies trusted-host mode or a non-empty stored credential.
//! The gate never checks that the credential is *correct*; the backend does
//! that and answers with a 401, which comes back here as `handle_unauthorized`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::util::config::{EmptySubmitPolicy, GateConfig};
use crate::util::credential_store::{CredentialStore, LocalStorageStore, StoreError, read_credential};
use crate::util::env::HostEnvironment;
use crate::util::reload::{BrowserReload, PageReload};
use crate::util::unauthorized::{Subscription, UnauthorizedSignal};

pub const EMPTY_SUBMIT_NOTICE: &str = "Enter the admin password or API key.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Locked,
    Unlocked,
}

impl GateState {
    pub fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

/// Result of a login form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Credential persisted, gate unlocked, reload requested.
    Unlocked,
    /// Empty input under `EmptySubmitPolicy::Ignore`, or an inert gate.
    Ignored,
    /// Empty input under `EmptySubmitPolicy::Notice`.
    Refused(&'static str),
    /// The store rejected the write; the gate stays locked.
    Failed(StoreError),
}

impl SubmitOutcome {
    pub fn next_state(&self, current: GateState) -> GateState {
        match self {
            Self::Unlocked => GateState::Unlocked,
            Self::Ignored | Self::Refused(_) | Self::Failed(_) => current,
        }
    }

    /// Text to show under the form, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unlocked | Self::Ignored => None,
            Self::Refused(notice) => Some((*notice).to_owned()),
            Self::Failed(e) => Some(format!("Could not save the key: {e}")),
        }
    }
}

/// Trim operator input; `None` when nothing usable was typed.
pub fn normalize_credential_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Owns the gate's collaborators and decides every transition.
#[derive(Clone)]
pub struct GateController {
    env: HostEnvironment,
    store: Arc<dyn CredentialStore>,
    reload: Arc<dyn PageReload>,
    empty_submit: EmptySubmitPolicy,
}

impl std::fmt::Debug for GateController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateController")
            .field("env", &self.env)
            .field("empty_submit", &self.empty_submit)
            .finish_non_exhaustive()
    }
}

impl GateController {
    pub fn new(
        env: HostEnvironment,
        store: Arc<dyn CredentialStore>,
        reload: Arc<dyn PageReload>,
        empty_submit: EmptySubmitPolicy,
    ) -> Self {
        Self { env, store, reload, empty_submit }
    }

    /// Browser controller: `localStorage` under the configured key and a real
    /// page reload.
    pub fn from_config(config: &GateConfig, env: HostEnvironment) -> Self {
        Self::new(
            env,
            Arc::new(LocalStorageStore::new(config.storage_key.clone())),
            Arc::new(BrowserReload),
            config.empty_submit,
        )
    }

    /// Only network-served gates react to unauthorized notifications.
    pub fn listens_for_unauthorized(&self) -> bool {
        !self.env.is_trusted()
    }

    /// State before the store has been consulted.
    pub fn initial_state(&self) -> GateState {
        if self.env.is_trusted() { GateState::Unlocked } else { GateState::Locked }
    }

    /// State implied by the environment and the store right now.
    pub fn derive_state(&self) -> GateState {
        if self.env.is_trusted() || read_credential(self.store.as_ref()).is_some() {
            GateState::Unlocked
        } else {
            GateState::Locked
        }
    }

    /// Mount-time check.
    pub fn mount(&self) -> GateState {
        let state = self.derive_state();
        match (self.env, state) {
            (HostEnvironment::TrustedHost, _) => log::debug!("trusted host: access gate bypassed"),
            (_, GateState::Unlocked) => log::info!("stored admin credential found"),
            (_, GateState::Locked) => log::info!("no admin credential stored; prompting"),
        }
        state
    }

    /// Handle a login form submission.
    ///
    /// A non-empty trimmed value is stored verbatim and followed by a reload.
    /// Empty input is handled per the configured `EmptySubmitPolicy` and never
    /// touches the store.
    pub fn submit(&self, raw: &str) -> SubmitOutcome {
        if self.env.is_trusted() {
            return SubmitOutcome::Ignored;
        }
        let Some(credential) = normalize_credential_input(raw) else {
            return match self.empty_submit {
                EmptySubmitPolicy::Ignore => SubmitOutcome::Ignored,
                EmptySubmitPolicy::Notice => SubmitOutcome::Refused(EMPTY_SUBMIT_NOTICE),
            };
        };
        if let Err(e) = self.store.save(credential) {
            log::warn!("credential save failed: {e}");
            return SubmitOutcome::Failed(e);
        }
        log::info!("admin credential stored; reloading");
        self.reload.reload();
        SubmitOutcome::Unlocked
    }

    /// Route `signal` notifications into the caller's gate state.
    ///
    /// `update_state` receives the transition and applies it to wherever the
    /// caller keeps its state. Returns `None` on a trusted host, which never
    /// listens. Dropping the returned subscription detaches this gate; other
    /// gates attached to the same signal are unaffected.
    #[must_use = "dropping the subscription detaches the gate immediately"]
    pub fn attach(
        &self,
        signal: &UnauthorizedSignal,
        update_state: impl Fn(&dyn Fn(GateState) -> GateState) + Send + Sync + 'static,
    ) -> Option<Subscription> {
        if !self.listens_for_unauthorized() {
            return None;
        }
        let gate = self.clone();
        Some(signal.subscribe(move || {
            update_state(&|current| gate.handle_unauthorized(current));
        }))
    }

    /// Backend rejected the credential: purge it and lock.
    ///
    /// Idempotent; repeated calls re-clear an absent entry.
    pub fn handle_unauthorized(&self, current: GateState) -> GateState {
        if self.env.is_trusted() {
            return current;
        }
        if let Err(e) = self.store.clear() {
            log::warn!("credential purge failed: {e}");
        }
        if current.is_unlocked() {
            log::info!("unauthorized response; access gate locked");
        }
        GateState::Locked
    }
}
