use super::{NotificationSink, NotificationStack, Severity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Signal-backed notification stack with auto-dismiss.
///
/// Provided once in the app root; `ToastHost` renders it.
#[derive(Clone, Copy)]
pub struct NotificationService {
    stack: RwSignal<NotificationStack>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            stack: RwSignal::new(NotificationStack::new()),
            ttl_ms,
        }
    }

    pub fn push(&self, message: &str, severity: Severity) -> u64 {
        let id = self
            .stack
            .try_update(|s| s.push(message, severity))
            .unwrap_or_default();

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.ttl_ms).await;
            svc.dismiss(id);
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|s| {
            s.dismiss(id);
        });
    }
}

impl NotificationSink for NotificationService {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("notify: {}", message),
            Severity::Warning => log::warn!("notify: {}", message),
            Severity::Info => log::info!("notify: {}", message),
        }
        self.push(message, severity);
    }
}

fn intent(severity: Severity) -> MessageBarIntent {
    match severity {
        Severity::Info => MessageBarIntent::Info,
        Severity::Warning => MessageBarIntent::Warning,
        Severity::Error => MessageBarIntent::Error,
    }
}

/// Renders the notification stack in the top-right corner.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host" style="position: fixed; top: 20px; right: 20px; z-index: 1100; display: flex; flex-direction: column; gap: 8px; max-width: 420px;">
            <For
                each=move || svc.stack.get().items().to_vec()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <MessageBar intent=intent(n.severity)>
                            <div style="display: flex; align-items: center; gap: 8px; width: 100%;">
                                <span style="flex: 1;">{n.message}</span>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| svc.dismiss(id)
                                >
                                    "✕"
                                </Button>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
