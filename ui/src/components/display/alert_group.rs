use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::features::alerts::{Alert, AlertId};

#[derive(Props, PartialEq, Clone)]
pub struct AlertGroupProps {
    pub alerts: Vec<Alert>,
    pub timeout_ms: u32,
    pub on_dismiss: EventHandler<AlertId>,
}

/// Live region rendering a queue of alerts; each one dismisses itself.
#[component]
pub fn AlertGroup(props: AlertGroupProps) -> Element {
    rsx! {
        div {
            class: "alert-group",
            "aria-live": "polite",
            "aria-relevant": "additions text",
            "aria-atomic": "false",
            for alert in props.alerts.iter() {
                AlertItem {
                    key: "{alert.id}",
                    alert: alert.clone(),
                    timeout_ms: props.timeout_ms,
                    on_dismiss: props.on_dismiss
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct AlertItemProps {
    alert: Alert,
    timeout_ms: u32,
    on_dismiss: EventHandler<AlertId>,
}

#[component]
fn AlertItem(props: AlertItemProps) -> Element {
    let id = props.alert.id;
    let on_dismiss = props.on_dismiss;
    let timeout_ms = props.timeout_ms;

    // The timer task belongs to this item and is dropped with it.
    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(timeout_ms).await;
            on_dismiss.call(id);
        });
    });

    rsx! {
        div {
            class: props.alert.variant.css_class(),
            div {
                class: "alert-title",
                "{props.alert.title}"
            }
            if let Some(detail) = &props.alert.detail {
                div {
                    class: "alert-detail",
                    "{detail}"
                }
            }
            button {
                class: "alert-close",
                "aria-label": "Close",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}
