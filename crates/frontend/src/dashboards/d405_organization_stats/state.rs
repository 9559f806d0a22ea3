use super::filter::{Aggregation, FilterCriteria};
use crate::shared::date_utils::{format_date, russian_month_label};
use chrono::NaiveDate;

/// Ключ периода строки; вид зависит от режима агрегации
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodKey {
    Day(NaiveDate),
    /// Месяц: сервис отдаёт подпись, дата может служить запасным вариантом
    Month {
        date: Option<NaiveDate>,
        label: Option<String>,
    },
}

impl PeriodKey {
    /// Подпись периода для таблицы и категориальной оси
    pub fn label(&self) -> String {
        match self {
            PeriodKey::Day(date) => format_date(*date),
            PeriodKey::Month {
                label: Some(label), ..
            } if !label.trim().is_empty() => label.clone(),
            PeriodKey::Month {
                date: Some(date), ..
            } => russian_month_label(*date),
            PeriodKey::Month { .. } => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub period: PeriodKey,
    pub organization: String,
    /// Максимум водителей за день или среднее за месяц
    pub driver_metric: Option<f64>,
    pub order_count: Option<f64>,
}

/// Строки отчёта в порядке, полученном от сервиса (по возрастанию периода)
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDataset {
    aggregation: Aggregation,
    rows: Vec<ReportRow>,
}

impl ReportDataset {
    pub fn new(aggregation: Aggregation, rows: Vec<ReportRow>) -> Self {
        Self { aggregation, rows }
    }

    /// Режим, в котором набор был запрошен
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Список организаций вместе с флагом фильтра, которым он получен.
/// Пересобирается целиком при каждой перезагрузке.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationSet {
    corp_filter: bool,
    organizations: Vec<String>,
}

impl OrganizationSet {
    pub fn new(corp_filter: bool, organizations: Vec<String>) -> Self {
        Self {
            corp_filter,
            organizations,
        }
    }

    pub fn corp_filter(&self) -> bool {
        self.corp_filter
    }

    pub fn organizations(&self) -> &[String] {
        &self.organizations
    }

    pub fn contains(&self, organization: &str) -> bool {
        self.organizations.iter().any(|o| o == organization)
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Состояние дашборда. Изменяется только контроллером.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub filter: Option<FilterCriteria>,
    pub dataset: Option<ReportDataset>,
    pub view_mode: ViewMode,
    pub load_status: LoadStatus,
    pub corp_filter_enabled: bool,
}

impl AppState {
    pub fn new(corp_filter_enabled: bool) -> Self {
        Self {
            corp_filter_enabled,
            ..Self::default()
        }
    }

    /// Набор, который можно отрисовать: есть и не пуст
    pub fn renderable(&self) -> Option<&ReportDataset> {
        self.dataset.as_ref().filter(|d| !d.is_empty())
    }
}
