//! Контроллер состояния дашборда.
//!
//! Владеет `AppState`, нумерует запросы, применяет только актуальные ответы
//! и приводит видимое представление к состоянию (`reconcile`).
//!
//! Синхронная часть (`DashboardController`) отделена от асинхронной
//! (`Dashboard`): между выдачей запроса и его завершением состояние не
//! заимствуется, поэтому ответы могут приходить в любом порядке.

use super::api::{ReportClient, ReportError};
use super::directory::{OrganizationDirectory, OrganizationSelector};
use super::filter::{validate, FilterCriteria, RawFilter};
use super::render::{chart, table, ChartPresentation, RenderError, TablePresentation};
use super::sequence::{RequestCategory, RequestSequencer, RequestTicket};
use super::state::{AppState, LoadStatus, OrganizationSet, ReportDataset, ViewMode};
use crate::shared::notifications::{NotificationSink, Severity};
use std::cell::RefCell;
use std::rc::Rc;

pub const NO_DATA: &str = "Нет данных для отображения";
pub const DATA_LOAD_FAILED: &str = "Ошибка загрузки данных";

/// Поверхности отрисовки и элементы управления, которыми управляет контроллер
pub trait DashboardView {
    fn draw_table(&mut self, table: &TablePresentation);
    fn clear_table(&mut self);
    /// Вызывается только после `clear_chart`
    fn draw_chart(&mut self, chart: &ChartPresentation) -> Result<(), RenderError>;
    /// Уничтожает экземпляры графиков, а не только скрывает их
    fn clear_chart(&mut self);
    fn set_empty_state(&mut self, visible: bool);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_view_mode(&mut self, mode: ViewMode);
}

/// Переход браузера на другой URL (скачивание выгрузки)
pub trait Navigator {
    fn navigate(&self, url: &str);
}

pub struct DashboardPorts {
    pub client: Rc<dyn ReportClient>,
    pub view: Box<dyn DashboardView>,
    pub selector: Box<dyn OrganizationSelector>,
    pub notifier: Rc<dyn NotificationSink>,
    pub navigator: Box<dyn Navigator>,
}

/// Выданный запрос отчёта, ожидающий ответа
#[derive(Debug, Clone)]
pub struct PendingFetch {
    pub ticket: RequestTicket,
    pub criteria: FilterCriteria,
}

/// Выданный запрос справочника организаций
#[derive(Debug, Clone, Copy)]
pub struct PendingReload {
    pub ticket: RequestTicket,
    pub corp_filter: bool,
}

pub struct DashboardController {
    state: AppState,
    sequencer: RequestSequencer,
    directory: OrganizationDirectory,
    client: Rc<dyn ReportClient>,
    view: Box<dyn DashboardView>,
    notifier: Rc<dyn NotificationSink>,
    navigator: Box<dyn Navigator>,
}

impl DashboardController {
    pub fn new(ports: DashboardPorts, corp_filter_enabled: bool) -> Self {
        let mut controller = Self {
            state: AppState::new(corp_filter_enabled),
            sequencer: RequestSequencer::new(),
            directory: OrganizationDirectory::new(ports.selector),
            client: ports.client,
            view: ports.view,
            notifier: ports.notifier,
            navigator: ports.navigator,
        };
        controller.view.set_view_mode(ViewMode::Table);
        controller.view.set_submit_enabled(true);
        controller.reconcile();
        controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn directory(&self) -> &OrganizationDirectory {
        &self.directory
    }

    pub fn client(&self) -> Rc<dyn ReportClient> {
        self.client.clone()
    }

    /// Проверяет фильтр и выдаёт запрос отчёта.
    ///
    /// Ошибка валидации показывается предупреждением и не меняет состояние.
    /// Новый запрос вытесняет ещё не завершённый.
    pub fn submit_filter(&mut self, raw: &RawFilter) -> Option<PendingFetch> {
        match validate(raw) {
            Ok(criteria) => Some(self.begin_fetch(criteria)),
            Err(err) => {
                log::debug!("filter rejected: {:?}", err);
                self.notifier.notify(&err.to_string(), Severity::Warning);
                None
            }
        }
    }

    /// Смена режима агрегации: повторный запрос только при заполненном фильтре
    pub fn aggregation_changed(&mut self, raw: &RawFilter) -> Option<PendingFetch> {
        if !raw.is_complete() {
            return None;
        }
        self.submit_filter(raw)
    }

    fn begin_fetch(&mut self, criteria: FilterCriteria) -> PendingFetch {
        if self.state.load_status == LoadStatus::Loading {
            log::debug!("superseding in-flight dataset request");
        }
        let ticket = self.sequencer.issue(RequestCategory::Dataset);
        log::debug!(
            "issue {} organization={} {}..{} {:?}",
            ticket,
            criteria.organization,
            criteria.date_from,
            criteria.date_to,
            criteria.aggregation
        );

        self.state.filter = Some(criteria.clone());
        self.state.load_status = LoadStatus::Loading;
        self.view.set_submit_enabled(false);

        PendingFetch { ticket, criteria }
    }

    /// Применяет ответ, если он относится к последнему запросу.
    /// Возвращает false для устаревшего ответа.
    pub fn complete_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<ReportDataset, ReportError>,
    ) -> bool {
        if !self.sequencer.is_latest(ticket) {
            log::debug!("discard stale response {}", ticket);
            return false;
        }

        match result {
            Ok(dataset) => {
                log::debug!("{} loaded {} rows", ticket, dataset.len());
                if dataset.is_empty() {
                    self.notifier.notify(NO_DATA, Severity::Warning);
                }
                self.state.dataset = Some(dataset);
                self.state.load_status = LoadStatus::Loaded;
            }
            Err(err) => {
                log::error!("{} failed: {}", ticket, err);
                self.notifier
                    .notify(&err.user_message(DATA_LOAD_FAILED), Severity::Error);
                self.state.dataset = None;
                self.state.load_status = LoadStatus::Failed;
            }
        }

        self.view.set_submit_enabled(true);
        self.reconcile();
        true
    }

    /// Режим меняется в любом состоянии; без данных остаётся пустое состояние
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
        self.view.set_view_mode(mode);
        self.reconcile();
    }

    pub fn toggle_corp_filter(&mut self, enabled: bool) -> PendingReload {
        self.state.corp_filter_enabled = enabled;
        self.reload_organizations()
    }

    pub fn reload_organizations(&mut self) -> PendingReload {
        let ticket = self.sequencer.issue(RequestCategory::Organizations);
        log::debug!(
            "issue {} corp_filter={}",
            ticket,
            self.state.corp_filter_enabled
        );
        self.directory.begin_reload();
        PendingReload {
            ticket,
            corp_filter: self.state.corp_filter_enabled,
        }
    }

    pub fn complete_reload(
        &mut self,
        ticket: RequestTicket,
        result: Result<OrganizationSet, ReportError>,
    ) -> bool {
        if !self.sequencer.is_latest(ticket) {
            log::debug!("discard stale response {}", ticket);
            return false;
        }
        self.directory.complete_reload(
            self.state.corp_filter_enabled,
            result,
            self.notifier.as_ref(),
        )
    }

    pub fn focus_organization_search(&mut self) {
        self.directory.focus_search();
    }

    /// Проверяет фильтр и переходит по URL выгрузки
    pub fn request_export(&mut self, raw: &RawFilter) -> Option<String> {
        match validate(raw) {
            Ok(criteria) => {
                let url = self.client.build_export_url(&criteria);
                log::info!("export: {}", url);
                self.navigator.navigate(&url);
                Some(url)
            }
            Err(err) => {
                self.notifier.notify(&err.to_string(), Severity::Warning);
                None
            }
        }
    }

    /// Приводит поверхности к текущему состоянию. Повторный вызов без
    /// изменений состояния даёт тот же результат.
    pub fn reconcile(&mut self) {
        let Some(dataset) = self.state.renderable() else {
            self.view.clear_table();
            self.view.clear_chart();
            self.view.set_empty_state(true);
            return;
        };
        let aggregation = dataset.aggregation();

        self.view.set_empty_state(false);
        match self.state.view_mode {
            ViewMode::Table => {
                let presentation = table::render(dataset, aggregation);
                self.view.clear_chart();
                self.view.clear_table();
                self.view.draw_table(&presentation);
            }
            ViewMode::Chart => {
                let presentation = chart::render(dataset, aggregation);
                self.view.clear_table();
                self.view.clear_chart();
                if let Err(err) = self.view.draw_chart(&presentation) {
                    let fallback = table::render(dataset, aggregation);
                    log::warn!("chart rendering unavailable, falling back to table: {}", err);
                    self.notifier.notify(&err.to_string(), Severity::Warning);
                    self.state.view_mode = ViewMode::Table;
                    self.view.set_view_mode(ViewMode::Table);
                    self.view.clear_chart();
                    self.view.draw_table(&fallback);
                }
            }
        }
    }
}

/// Асинхронная обёртка над контроллером для однопоточного event loop.
///
/// Заимствование контроллера никогда не удерживается через `.await`.
#[derive(Clone)]
pub struct Dashboard {
    controller: Rc<RefCell<DashboardController>>,
}

impl Dashboard {
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
        }
    }

    pub async fn submit_filter(&self, raw: RawFilter) {
        let pending = self.controller.borrow_mut().submit_filter(&raw);
        if let Some(pending) = pending {
            self.run_fetch(pending).await;
        }
    }

    pub async fn aggregation_changed(&self, raw: RawFilter) {
        let pending = self.controller.borrow_mut().aggregation_changed(&raw);
        if let Some(pending) = pending {
            self.run_fetch(pending).await;
        }
    }

    pub async fn toggle_corp_filter(&self, enabled: bool) {
        let pending = self.controller.borrow_mut().toggle_corp_filter(enabled);
        self.run_reload(pending).await;
    }

    pub async fn reload_organizations(&self) {
        let pending = self.controller.borrow_mut().reload_organizations();
        self.run_reload(pending).await;
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.controller.borrow_mut().set_view_mode(mode);
    }

    pub fn request_export(&self, raw: &RawFilter) -> Option<String> {
        self.controller.borrow_mut().request_export(raw)
    }

    pub fn focus_organization_search(&self) {
        self.controller.borrow_mut().focus_organization_search();
    }

    async fn run_fetch(&self, pending: PendingFetch) {
        let client = self.controller.borrow().client();
        let result = client.fetch_dataset(&pending.criteria).await;
        self.controller
            .borrow_mut()
            .complete_fetch(pending.ticket, result);
    }

    async fn run_reload(&self, pending: PendingReload) {
        let client = self.controller.borrow().client();
        let result = client.list_organizations(pending.corp_filter).await;
        self.controller
            .borrow_mut()
            .complete_reload(pending.ticket, result);
    }
}
