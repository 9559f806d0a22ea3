//! Представления отчёта: чистые функции `(набор, агрегация) -> presentation`.
//!
//! Рендереры не сохраняют ссылок на набор: результат содержит только
//! готовые строки и числа.

pub mod chart;
pub mod table;

pub use chart::{AxisKind, ChartPresentation, LineSeries};
pub use table::{TablePresentation, TableRowView};

use super::filter::Aggregation;
use super::state::PeriodKey;
use crate::shared::date_utils::russian_month_label;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Графики недоступны: {0}")]
    CapabilityUnavailable(String),
}

/// Подпись периода с учётом режима агрегации
pub fn period_label(period: &PeriodKey, aggregation: Aggregation) -> String {
    match (aggregation, period) {
        (Aggregation::Monthly, PeriodKey::Day(date)) => russian_month_label(*date),
        _ => period.label(),
    }
}

pub fn driver_metric_title(aggregation: Aggregation) -> &'static str {
    match aggregation {
        Aggregation::Daily => "Макс. водителей",
        Aggregation::Monthly => "Среднее кол-во водителей",
    }
}

pub const ORDER_COUNT_TITLE: &str = "Выполнено заказов";
