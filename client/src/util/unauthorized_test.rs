use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_for_cb = Arc::clone(&hits);
    (hits, move || {
        hits_for_cb.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn notify_without_listeners_is_harmless() {
    let signal = UnauthorizedSignal::new();
    assert_eq!(signal.notify(), 0);
}

#[test]
fn notify_reaches_every_listener() {
    let signal = UnauthorizedSignal::new();
    let (a_hits, a) = counter();
    let (b_hits, b) = counter();
    let _a = signal.subscribe(a);
    let _b = signal.subscribe(b);

    assert_eq!(signal.notify(), 2);
    assert_eq!(a_hits.load(Ordering::SeqCst), 1);
    assert_eq!(b_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_subscription_detaches_listener() {
    let signal = UnauthorizedSignal::new();
    let (hits, cb) = counter();
    let sub = signal.subscribe(cb);
    assert_eq!(signal.listener_count(), 1);

    drop(sub);
    assert_eq!(signal.listener_count(), 0);
    assert_eq!(signal.notify(), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn cancel_detaches_only_that_listener() {
    let signal = UnauthorizedSignal::new();
    let (gone_hits, gone) = counter();
    let (kept_hits, kept) = counter();
    let gone_sub = signal.subscribe(gone);
    let _kept_sub = signal.subscribe(kept);

    gone_sub.cancel();
    signal.notify();

    assert_eq!(gone_hits.load(Ordering::SeqCst), 0);
    assert_eq!(kept_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn clones_share_the_same_hub() {
    let signal = UnauthorizedSignal::new();
    let other = signal.clone();
    let (hits, cb) = counter();
    let _sub = signal.subscribe(cb);

    other.notify();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_outliving_hub_drops_cleanly() {
    let signal = UnauthorizedSignal::new();
    let sub = signal.subscribe(|| {});
    drop(signal);
    drop(sub);
}

#[test]
fn listener_may_subscribe_during_notify() {
    let signal = UnauthorizedSignal::new();
    let late = Arc::new(Mutex::new(Vec::new()));
    let signal_for_cb = signal.clone();
    let late_for_cb = Arc::clone(&late);
    let _sub = signal.subscribe(move || {
        let sub = signal_for_cb.subscribe(|| {});
        late_for_cb.lock().unwrap().push(sub);
    });

    assert_eq!(signal.notify(), 1);
    assert_eq!(signal.listener_count(), 2);
}

#[test]
fn repeated_notify_calls_listener_each_time() {
    let signal = UnauthorizedSignal::new();
    let (hits, cb) = counter();
    let _sub = signal.subscribe(cb);
    signal.notify();
    signal.notify();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn dispatch_window_event_is_false_outside_browser() {
    assert!(!dispatch_window_event(UNAUTHORIZED_EVENT));
}

#[test]
fn signal_carries_its_event_name() {
    assert_eq!(UnauthorizedSignal::new().event_name(), UNAUTHORIZED_EVENT);
    assert_eq!(UnauthorizedSignal::for_event("custom-401").event_name(), "custom-401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn raise_without_window_notifies_hub_directly() {
    let signal = UnauthorizedSignal::for_event("custom-401");
    let (hits, cb) = counter();
    let _sub = signal.subscribe(cb);

    assert_eq!(signal.raise(), Delivery::Direct);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
