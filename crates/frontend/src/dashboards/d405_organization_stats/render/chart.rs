use super::{driver_metric_title, period_label, ORDER_COUNT_TITLE};
use crate::dashboards::d405_organization_stats::filter::Aggregation;
use crate::dashboards::d405_organization_stats::state::{PeriodKey, ReportDataset};
use crate::shared::number_format::round_metric;

/// Тип оси X
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// Подписи месяцев
    Category,
    /// Даты YYYY-MM-DD
    Time,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: &'static str,
    /// Округлены как в таблице; отсутствующее значение равно 0
    pub points: Vec<f64>,
}

/// Два ряда (водители и заказы) на общей оси X
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPresentation {
    pub axis: AxisKind,
    pub labels: Vec<String>,
    pub drivers: LineSeries,
    pub orders: LineSeries,
}

pub fn render(dataset: &ReportDataset, aggregation: Aggregation) -> ChartPresentation {
    let axis = match aggregation {
        Aggregation::Daily => AxisKind::Time,
        Aggregation::Monthly => AxisKind::Category,
    };

    let labels = dataset
        .rows()
        .iter()
        .map(|row| match (axis, &row.period) {
            (AxisKind::Time, PeriodKey::Day(date)) => date.format("%Y-%m-%d").to_string(),
            _ => period_label(&row.period, aggregation),
        })
        .collect();

    ChartPresentation {
        axis,
        labels,
        drivers: LineSeries {
            label: driver_metric_title(aggregation),
            points: dataset.rows().iter().map(|r| round_metric(r.driver_metric)).collect(),
        },
        orders: LineSeries {
            label: ORDER_COUNT_TITLE,
            points: dataset.rows().iter().map(|r| round_metric(r.order_count)).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d405_organization_stats::state::ReportRow;
    use chrono::NaiveDate;

    #[test]
    fn test_daily_chart_uses_time_axis() {
        let dataset = ReportDataset::new(
            Aggregation::Daily,
            vec![
                ReportRow {
                    period: PeriodKey::Day(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
                    organization: "Acme".to_string(),
                    driver_metric: Some(5.0),
                    order_count: Some(120.0),
                },
                ReportRow {
                    period: PeriodKey::Day(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()),
                    organization: "Acme".to_string(),
                    driver_metric: None,
                    order_count: Some(80.0),
                },
            ],
        );
        let chart = render(&dataset, Aggregation::Daily);

        assert_eq!(chart.axis, AxisKind::Time);
        assert_eq!(chart.labels, vec!["2024-01-15", "2024-01-16"]);
        assert_eq!(chart.drivers.points, vec![5.0, 0.0]);
        assert_eq!(chart.orders.points, vec![120.0, 80.0]);
        assert_eq!(chart.drivers.label, "Макс. водителей");
    }

    #[test]
    fn test_monthly_chart_uses_month_labels() {
        let dataset = ReportDataset::new(
            Aggregation::Monthly,
            vec![ReportRow {
                period: PeriodKey::Month {
                    date: Some(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()),
                    label: None,
                },
                organization: "Acme".to_string(),
                driver_metric: Some(3.5),
                order_count: Some(900.0),
            }],
        );
        let chart = render(&dataset, Aggregation::Monthly);

        assert_eq!(chart.axis, AxisKind::Category);
        assert_eq!(chart.labels, vec!["Май 2024"]);
        assert_eq!(chart.drivers.label, "Среднее кол-во водителей");
        assert_eq!(chart.labels.len(), chart.drivers.points.len());
        assert_eq!(chart.labels.len(), chart.orders.points.len());
    }

    #[test]
    fn test_points_follow_table_number_format() {
        let dataset = ReportDataset::new(
            Aggregation::Monthly,
            vec![ReportRow {
                period: PeriodKey::Month {
                    date: None,
                    label: Some("Январь 2024".to_string()),
                },
                organization: "Acme".to_string(),
                driver_metric: Some(4.5666),
                order_count: None,
            }],
        );
        let chart = render(&dataset, Aggregation::Monthly);

        assert_eq!(chart.drivers.points, vec![4.6]);
        assert_eq!(chart.orders.points, vec![0.0]);
    }
}
