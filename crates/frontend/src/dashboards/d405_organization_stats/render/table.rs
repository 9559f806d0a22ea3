use super::{driver_metric_title, period_label, ORDER_COUNT_TITLE};
use crate::dashboards::d405_organization_stats::filter::Aggregation;
use crate::dashboards::d405_organization_stats::state::ReportDataset;
use crate::shared::number_format::format_number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowView {
    pub period: String,
    pub organization: String,
    pub drivers: String,
    pub orders: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePresentation {
    pub headers: [&'static str; 4],
    pub rows: Vec<TableRowView>,
}

fn headers(aggregation: Aggregation) -> [&'static str; 4] {
    let period = match aggregation {
        Aggregation::Daily => "Дата",
        Aggregation::Monthly => "Месяц",
    };
    [
        period,
        "Организация",
        driver_metric_title(aggregation),
        ORDER_COUNT_TITLE,
    ]
}

/// Одна строка таблицы на строку набора, в порядке набора
pub fn render(dataset: &ReportDataset, aggregation: Aggregation) -> TablePresentation {
    let rows = dataset
        .rows()
        .iter()
        .map(|row| TableRowView {
            period: period_label(&row.period, aggregation),
            organization: row.organization.clone(),
            drivers: format_number(row.driver_metric),
            orders: format_number(row.order_count),
        })
        .collect();

    TablePresentation {
        headers: headers(aggregation),
        rows,
    }
}
