//! Wire DTOs shared with the admin backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `GET /api/admin/status` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStatus {
    pub service: String,
    pub version: String,
    pub uptime_secs: u64,
}

impl AdminStatus {
    /// Human readable uptime, e.g. `2h 03m`.
    pub fn uptime_label(&self) -> String {
        let secs = self.uptime_secs;
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if hours > 0 {
            format!("{hours}h {minutes:02}m")
        } else if minutes > 0 {
            format!("{minutes}m {seconds:02}s")
        } else {
            format!("{seconds}s")
        }
    }
}
