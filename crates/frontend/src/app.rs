use crate::dashboards::d405_organization_stats::ui::OrganizationStatsDashboard;
use crate::shared::config::{load_config, DashboardConfig};
use crate::shared::notifications::{NotificationService, ToastHost};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load dashboard config, using defaults: {:#}", e);
        DashboardConfig::default()
    });

    // Provide NotificationService for toast messages
    provide_context(NotificationService::new(config.notifications.ttl_ms));

    view! {
        <OrganizationStatsDashboard config=config />
        <ToastHost />
    }
}
