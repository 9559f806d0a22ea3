//! Справочник организаций для селектора.
//!
//! Список пересобирается целиком при каждой перезагрузке. Какой ответ
//! считать актуальным, решает контроллер по номеру запроса; справочник
//! дополнительно сверяет флаг корпоративного фильтра.

use super::api::ReportError;
use super::state::OrganizationSet;
use crate::shared::notifications::{NotificationSink, Severity};

pub const DIRECTORY_LOAD_FAILED: &str = "Ошибка загрузки организаций";

/// Выпадающий список с поиском, которым управляет справочник
pub trait OrganizationSelector {
    /// Пока идёт загрузка, селектор заблокирован
    fn set_loading(&mut self, loading: bool);
    /// Полная замена списка; виджет пересоздаётся, если не умеет обновляться
    fn set_options(&mut self, set: &OrganizationSet);
    fn focus_search(&mut self);
}

pub struct OrganizationDirectory {
    selector: Box<dyn OrganizationSelector>,
    current: Option<OrganizationSet>,
    loading: bool,
}

impl OrganizationDirectory {
    pub fn new(selector: Box<dyn OrganizationSelector>) -> Self {
        Self {
            selector,
            current: None,
            loading: false,
        }
    }

    pub fn current(&self) -> Option<&OrganizationSet> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_reload(&mut self) {
        self.loading = true;
        self.selector.set_loading(true);
    }

    /// Применяет актуальный ответ. Возвращает true, если список заменён.
    ///
    /// При ошибке прежний список остаётся в селекторе.
    pub fn complete_reload(
        &mut self,
        active_corp_filter: bool,
        result: Result<OrganizationSet, ReportError>,
        notifier: &dyn NotificationSink,
    ) -> bool {
        self.loading = false;
        self.selector.set_loading(false);

        match result {
            Ok(set) if set.corp_filter() == active_corp_filter => {
                log::debug!(
                    "organizations loaded: {} (corp filter: {})",
                    set.len(),
                    set.corp_filter()
                );
                self.selector.set_options(&set);
                self.current = Some(set);
                true
            }
            Ok(set) => {
                log::debug!(
                    "organizations for corp filter {} dropped, active is {}",
                    set.corp_filter(),
                    active_corp_filter
                );
                false
            }
            Err(err) => {
                log::error!("Failed to load organizations: {}", err);
                notifier.notify(&err.user_message(DIRECTORY_LOAD_FAILED), Severity::Error);
                false
            }
        }
    }

    pub fn focus_search(&mut self) {
        self.selector.focus_search();
    }
}
