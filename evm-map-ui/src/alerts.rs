//! Transient user-facing notices.
//!
//! Alerts are pushed onto a signal and rendered by the `AlertStack`
//! component, which also schedules the auto-dismiss timer for each one.

use crate::state::AppState;
use dioxus::prelude::WritableExt;
use std::sync::atomic::{AtomicU64, Ordering};

/// How long an alert stays on screen before it dismisses itself.
pub const ALERT_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertLevel {
    /// Background/text/border colors for the alert box.
    pub fn colors(self) -> (&'static str, &'static str, &'static str) {
        match self {
            AlertLevel::Success => ("#E8F5E9", "#2E7D32", "#A5D6A7"),
            AlertLevel::Info => ("#E3F2FD", "#1565C0", "#90CAF9"),
            AlertLevel::Warning => ("#FFF8E1", "#F57F17", "#FFE082"),
            AlertLevel::Danger => ("#FFEBEE", "#C62828", "#EF9A9A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
}

static NEXT_ALERT_ID: AtomicU64 = AtomicU64::new(0);

/// Queue a notice. Safe to call from plain JS callbacks as well as
/// component handlers; only the signal is touched here.
pub fn push_alert(mut state: AppState, level: AlertLevel, message: impl Into<String>) {
    let alert = Alert {
        id: NEXT_ALERT_ID.fetch_add(1, Ordering::Relaxed),
        level,
        message: message.into(),
    };
    state.alerts.write().push(alert);
}

pub fn dismiss_alert(mut state: AppState, id: u64) {
    state.alerts.write().retain(|alert| alert.id != id);
}
