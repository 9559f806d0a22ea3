//! Реализации портов контроллера поверх сигналов Leptos.

use super::chart_js::ChartJsSurface;
use crate::dashboards::d405_organization_stats::controller::{DashboardView, Navigator};
use crate::dashboards::d405_organization_stats::directory::OrganizationSelector;
use crate::dashboards::d405_organization_stats::render::{
    ChartPresentation, RenderError, TablePresentation,
};
use crate::dashboards::d405_organization_stats::state::{OrganizationSet, ViewMode};
use leptos::prelude::*;

/// Сигналы, которые читает разметка дашборда
#[derive(Clone, Copy)]
pub struct DashboardSignals {
    pub table: RwSignal<Option<TablePresentation>>,
    pub chart_visible: RwSignal<bool>,
    pub empty_state: RwSignal<bool>,
    pub submit_enabled: RwSignal<bool>,
    pub view_mode: RwSignal<ViewMode>,
}

impl DashboardSignals {
    pub fn new() -> Self {
        Self {
            table: RwSignal::new(None),
            chart_visible: RwSignal::new(false),
            empty_state: RwSignal::new(true),
            submit_enabled: RwSignal::new(true),
            view_mode: RwSignal::new(ViewMode::Table),
        }
    }
}

pub struct SignalDashboardView {
    signals: DashboardSignals,
    charts: ChartJsSurface,
}

impl SignalDashboardView {
    pub fn new(signals: DashboardSignals) -> Self {
        Self {
            signals,
            charts: ChartJsSurface::new(),
        }
    }
}

impl DashboardView for SignalDashboardView {
    fn draw_table(&mut self, table: &TablePresentation) {
        self.signals.table.set(Some(table.clone()));
    }

    fn clear_table(&mut self) {
        self.signals.table.set(None);
    }

    fn draw_chart(&mut self, chart: &ChartPresentation) -> Result<(), RenderError> {
        self.charts.draw(chart)?;
        self.signals.chart_visible.set(true);
        Ok(())
    }

    fn clear_chart(&mut self) {
        self.charts.purge();
        self.signals.chart_visible.set(false);
    }

    fn set_empty_state(&mut self, visible: bool) {
        self.signals.empty_state.set(visible);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.signals.submit_enabled.set(enabled);
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        self.signals.view_mode.set(mode);
    }
}

/// Сигналы селектора организаций
#[derive(Clone, Copy)]
pub struct SelectorSignals {
    pub options: RwSignal<Vec<String>>,
    pub loading: RwSignal<bool>,
    pub selected: RwSignal<String>,
    pub search: RwSignal<String>,
    /// Счётчик пересозданий виджета; меняется при каждой замене списка
    pub generation: RwSignal<u64>,
    pub focus_requests: RwSignal<u64>,
}

impl SelectorSignals {
    pub fn new() -> Self {
        Self {
            options: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            selected: RwSignal::new(String::new()),
            search: RwSignal::new(String::new()),
            generation: RwSignal::new(0),
            focus_requests: RwSignal::new(0),
        }
    }
}

pub struct SignalOrganizationSelector {
    signals: SelectorSignals,
}

impl SignalOrganizationSelector {
    pub fn new(signals: SelectorSignals) -> Self {
        Self { signals }
    }
}

impl OrganizationSelector for SignalOrganizationSelector {
    fn set_loading(&mut self, loading: bool) {
        self.signals.loading.set(loading);
    }

    fn set_options(&mut self, set: &OrganizationSet) {
        let selected = self.signals.selected.get_untracked();
        if !selected.is_empty() && !set.contains(&selected) {
            self.signals.selected.set(String::new());
        }
        self.signals.search.set(String::new());
        self.signals.options.set(set.organizations().to_vec());
        self.signals.generation.update(|g| *g += 1);
    }

    fn focus_search(&mut self) {
        self.signals.focus_requests.update(|n| *n += 1);
    }
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("navigate: window is not available");
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::error!("navigate to {} failed: {:?}", url, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organizations(names: &[&str]) -> OrganizationSet {
        OrganizationSet::new(true, names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_missing_selection_is_cleared_on_reload() {
        let signals = SelectorSignals::new();
        signals.selected.set("Acme".to_string());
        signals.search.set("ac".to_string());
        let mut selector = SignalOrganizationSelector::new(signals);

        selector.set_options(&organizations(&["Globex", "Initech"]));

        assert_eq!(signals.selected.get_untracked(), "");
        assert_eq!(signals.search.get_untracked(), "");
        assert_eq!(
            signals.options.get_untracked(),
            vec!["Globex".to_string(), "Initech".to_string()]
        );
        assert_eq!(signals.generation.get_untracked(), 1);
    }

    #[test]
    fn test_present_selection_is_kept_on_reload() {
        let signals = SelectorSignals::new();
        signals.selected.set("Acme".to_string());
        let mut selector = SignalOrganizationSelector::new(signals);

        selector.set_options(&organizations(&["Globex", "Acme"]));
        selector.set_options(&organizations(&["Acme"]));

        assert_eq!(signals.selected.get_untracked(), "Acme");
        assert_eq!(signals.generation.get_untracked(), 2);
    }

    #[test]
    fn test_loading_and_focus_requests() {
        let signals = SelectorSignals::new();
        let mut selector = SignalOrganizationSelector::new(signals);

        selector.set_loading(true);
        assert!(signals.loading.get_untracked());
        selector.set_loading(false);
        assert!(!signals.loading.get_untracked());

        selector.focus_search();
        selector.focus_search();
        assert_eq!(signals.focus_requests.get_untracked(), 2);
    }
}
