//! Unauthorized notification hub.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any backend call that comes back with an authentication failure must lock
//! the gate again. Rust callers hold an `UnauthorizedSignal` (provided through
//! Leptos context) and call `notify`. Non-Rust code on the page can still fire
//! the window-scoped `abv-unauthorized` DOM event; `bridge_window_event`
//! forwards it into the hub.
//!
//! DESIGN
//! ======
//! Listeners are reference-counted closures behind a `Mutex`; the lock exists
//! only to satisfy Leptos' `Send + Sync` context bound. Callbacks run after
//! the lock is released, so a listener may subscribe or unsubscribe while
//! being notified.

#[cfg(test)]
#[path = "unauthorized_test.rs"]
mod unauthorized_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

#[cfg(feature = "hydrate")]
use leptos_dom::helpers::{WindowListenerHandle, window_event_listener_untyped};

/// Default DOM event name fired by page scripts on a 401.
pub const UNAUTHORIZED_EVENT: &str = "abv-unauthorized";

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// How a `raise` reached the listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Fired as a window DOM event; the bridge forwards it into the hub.
    WindowEvent,
    /// No window to dispatch on; hub listeners were called in place.
    Direct,
}

/// Shared handle to the unauthorized hub. Clones address the same hub.
#[derive(Clone)]
pub struct UnauthorizedSignal {
    registry: Arc<Mutex<Registry>>,
    event_name: Arc<str>,
}

impl Default for UnauthorizedSignal {
    fn default() -> Self {
        Self::for_event(UNAUTHORIZED_EVENT)
    }
}

impl std::fmt::Debug for UnauthorizedSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnauthorizedSignal")
            .field("event_name", &self.event_name)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl UnauthorizedSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hub paired with the window event named `event_name`.
    pub fn for_event(event_name: impl Into<String>) -> Self {
        Self {
            registry: Arc::default(),
            event_name: Arc::from(event_name.into()),
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Report a rejected credential to every interested party.
    ///
    /// Dispatches the window event when there is a window to dispatch on;
    /// hub listeners then hear it through `bridge_window_event`. Otherwise
    /// the hub is notified directly.
    pub fn raise(&self) -> Delivery {
        if dispatch_window_event(&self.event_name) {
            Delivery::WindowEvent
        } else {
            self.notify();
            Delivery::Direct
        }
    }

    /// Register `listener`; it stays active until the returned handle drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Invoke every live listener. Returns how many were called.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<Listener> = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in &snapshot {
            listener();
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

/// Live registration on an `UnauthorizedSignal`. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Explicitly unsubscribe. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Hub already gone: nothing left to detach from.
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Listener is dropped after the guard so its captures may unsubscribe.
        let removed = {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .listeners
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|idx| registry.listeners.remove(idx))
        };
        drop(removed);
    }
}

// =============================================================================
// WINDOW EVENT BRIDGE
// =============================================================================

/// Forward the window-scoped `event_name` DOM event into `signal`.
///
/// The returned handle removes the DOM listener when `remove` is called.
#[cfg(feature = "hydrate")]
pub fn bridge_window_event(event_name: &str, signal: UnauthorizedSignal) -> WindowListenerHandle {
    let name = event_name.to_owned();
    window_event_listener_untyped(event_name, move |_ev| {
        log::debug!("window event {name} received");
        signal.notify();
    })
}

/// Fire the window-scoped `event_name` DOM event for page-level listeners.
///
/// Returns `false` outside the browser or when the event could not be built.
pub fn dispatch_window_event(event_name: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(event) = web_sys::CustomEvent::new(event_name) else {
            return false;
        };
        window.dispatch_event(&event).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_name;
        false
    }
}
