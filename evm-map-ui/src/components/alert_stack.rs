//! Fixed-position stack of transient notices.

use crate::alerts::{dismiss_alert, ALERT_DISMISS_MS};
use crate::state::AppState;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Renders every queued alert and schedules the auto-dismiss timer for
/// each one exactly once. Alerts also carry a manual close button.
#[component]
pub fn AlertStack() -> Element {
    let state = use_context::<AppState>();
    let scheduled = use_hook(|| Rc::new(RefCell::new(HashSet::<u64>::new())));

    use_effect(move || {
        let ids: Vec<u64> = state.alerts.read().iter().map(|alert| alert.id).collect();
        for id in ids {
            if scheduled.borrow_mut().insert(id) {
                spawn(async move {
                    TimeoutFuture::new(ALERT_DISMISS_MS).await;
                    dismiss_alert(state, id);
                });
            }
        }
    });

    let alerts = state.alerts.read().clone();
    rsx! {
        div {
            style: "position: fixed; top: 20px; right: 20px; z-index: 9999; min-width: 300px;",
            for alert in alerts {
                {
                    let (background, color, border) = alert.level.colors();
                    let id = alert.id;
                    rsx! {
                        div {
                            key: "{id}",
                            style: "padding: 12px 16px; margin: 8px 0; background: {background}; color: {color}; border-radius: 4px; border: 1px solid {border}; display: flex; justify-content: space-between; gap: 12px;",
                            span { "{alert.message}" }
                            button {
                                style: "background: none; border: none; cursor: pointer; color: {color}; font-weight: bold;",
                                onclick: move |_| dismiss_alert(state, id),
                                "x"
                            }
                        }
                    }
                }
            }
        }
    }
}
