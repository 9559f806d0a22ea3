use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Параметры запроса списка организаций (`GET /api/organizations`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationsQuery {
    /// Оставить только корпоративные организации
    pub filter_corp: bool,
}

/// Параметры запроса отчёта (`GET /api/data`) и выгрузки (`GET /api/export`)
///
/// Порядок полей определяет порядок параметров в query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub organization: String,
    /// Начало периода, сериализуется как YYYY-MM-DD
    pub date_from: NaiveDate,
    /// Конец периода включительно
    pub date_to: NaiveDate,
    /// Группировка по месяцам вместо дней
    pub monthly: bool,
}

/// Строка отчёта в том виде, в котором её отдаёт сервис
///
/// В дневном режиме заполнен `date`, в месячном сервис дополнительно
/// отдаёт `month_name` ("Январь 2024"). Числовые поля могут быть `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRowDto {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub month_name: Option<String>,
    pub organization: String,
    /// Максимум (день) или среднее (месяц) количества водителей
    #[serde(default)]
    pub max_drivers: Option<f64>,
    #[serde(default)]
    pub total_orders: Option<f64>,
}

/// Тело ответа сервиса при ошибке
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDto {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_row_deserializes() {
        let json = r#"{"date":"2024-01-15","organization":"Acme","max_drivers":5,"total_orders":120}"#;
        let row: ReportRowDto = serde_json::from_str(json).unwrap();
        assert_eq!(row.date.as_deref(), Some("2024-01-15"));
        assert_eq!(row.month_name, None);
        assert_eq!(row.max_drivers, Some(5.0));
        assert_eq!(row.total_orders, Some(120.0));
    }

    #[test]
    fn test_monthly_row_with_nulls() {
        let json = r#"{"date":"Wed, 31 Jan 2024 00:00:00 GMT","month_name":"Январь 2024","organization":"Acme","max_drivers":null,"total_orders":310}"#;
        let row: ReportRowDto = serde_json::from_str(json).unwrap();
        assert_eq!(row.month_name.as_deref(), Some("Январь 2024"));
        assert_eq!(row.max_drivers, None);
    }

    #[test]
    fn test_row_without_organization_is_rejected() {
        let json = r#"{"date":"2024-01-15","max_drivers":5,"total_orders":120}"#;
        assert!(serde_json::from_str::<ReportRowDto>(json).is_err());
    }

    #[test]
    fn test_error_envelope() {
        let dto: ApiErrorDto = serde_json::from_str(r#"{"error":"Не выбран период"}"#).unwrap();
        assert_eq!(dto.error.as_deref(), Some("Не выбран период"));

        let empty: ApiErrorDto = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.error, None);
    }

    #[test]
    fn test_report_query_serializes_dates_as_iso() {
        let query = ReportQuery {
            organization: "Acme".to_string(),
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            monthly: false,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["date_from"], "2024-01-01");
        assert_eq!(value["date_to"], "2024-01-31");
        assert_eq!(value["monthly"], false);
    }
}
