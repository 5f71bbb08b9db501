//! Full page reload seam.
//!
//! After a credential is stored the whole application is re-initialized so
//! every module picks up the new key. Browser-only; SSR paths no-op.

/// Something that can restart the application.
pub trait PageReload: Send + Sync {
    fn reload(&self);
}

/// `window.location.reload()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserReload;

impl PageReload for BrowserReload {
    fn reload(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    log::warn!("page reload failed: {e:?}");
                }
            }
        }
    }
}
