//! Валидация фильтра отчёта.
//!
//! Чистая функция без сетевых и state-эффектов: одинаковый вход всегда
//! даёт одинаковый результат.

use chrono::NaiveDate;
use contracts::dashboards::d405_organization_stats::ReportQuery;
use thiserror::Error;

/// Режим агрегации отчёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregation {
    #[default]
    Daily,
    Monthly,
}

impl Aggregation {
    pub fn from_monthly(monthly: bool) -> Self {
        if monthly {
            Self::Monthly
        } else {
            Self::Daily
        }
    }

    pub fn is_monthly(self) -> bool {
        matches!(self, Self::Monthly)
    }
}

/// Значения элементов управления фильтром как они есть
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFilter {
    pub organization: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub monthly: bool,
}

impl RawFilter {
    /// Все обязательные поля заполнены (без проверки порядка дат)
    pub fn is_complete(&self) -> bool {
        self.organization
            .as_deref()
            .is_some_and(|org| !org.trim().is_empty())
            && self.date_from.is_some()
            && self.date_to.is_some()
    }
}

/// Проверенный снимок фильтра
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub organization: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub aggregation: Aggregation,
}

impl FilterCriteria {
    pub fn to_query(&self) -> ReportQuery {
        ReportQuery {
            organization: self.organization.clone(),
            date_from: self.date_from,
            date_to: self.date_to,
            monthly: self.aggregation.is_monthly(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Выберите организацию")]
    MissingOrganization,
    #[error("Выберите период")]
    MissingDateRange,
    #[error("Дата 'с' не может быть позже даты 'по'")]
    InvertedRange,
}

/// Проверяет фильтр: организация, затем наличие дат, затем их порядок
pub fn validate(raw: &RawFilter) -> Result<FilterCriteria, ValidationError> {
    // Пробелы учитываются только при проверке на пустоту; значение уходит как есть
    let organization = raw
        .organization
        .as_deref()
        .filter(|org| !org.trim().is_empty())
        .ok_or(ValidationError::MissingOrganization)?;

    let (Some(date_from), Some(date_to)) = (raw.date_from, raw.date_to) else {
        return Err(ValidationError::MissingDateRange);
    };

    if date_from > date_to {
        return Err(ValidationError::InvertedRange);
    }

    Ok(FilterCriteria {
        organization: organization.to_string(),
        date_from,
        date_to,
        aggregation: Aggregation::from_monthly(raw.monthly),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(org: Option<&str>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> RawFilter {
        RawFilter {
            organization: org.map(str::to_string),
            date_from: from,
            date_to: to,
            monthly: false,
        }
    }

    #[test]
    fn test_valid_filter() {
        let mut filter = raw(Some("Acme"), Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        filter.monthly = true;
        let criteria = validate(&filter).unwrap();
        assert_eq!(criteria.organization, "Acme");
        assert_eq!(criteria.aggregation, Aggregation::Monthly);
    }

    #[test]
    fn test_organization_is_sent_verbatim() {
        let filter = raw(Some(" Acme "), Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        let criteria = validate(&filter).unwrap();
        assert_eq!(criteria.organization, " Acme ");
        assert_eq!(criteria.to_query().organization, " Acme ");
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let day = date(2024, 2, 29);
        assert!(validate(&raw(Some("Acme"), Some(day), Some(day))).is_ok());
    }

    #[test]
    fn test_missing_organization_checked_first() {
        assert_eq!(
            validate(&raw(None, None, None)),
            Err(ValidationError::MissingOrganization)
        );
        assert_eq!(
            validate(&raw(Some("   "), Some(date(2024, 2, 1)), Some(date(2024, 1, 1)))),
            Err(ValidationError::MissingOrganization)
        );
    }

    #[test]
    fn test_missing_dates() {
        assert_eq!(
            validate(&raw(Some("Acme"), Some(date(2024, 1, 1)), None)),
            Err(ValidationError::MissingDateRange)
        );
        assert_eq!(
            validate(&raw(Some("Acme"), None, Some(date(2024, 1, 1)))),
            Err(ValidationError::MissingDateRange)
        );
    }

    #[test]
    fn test_inverted_range_for_every_reversed_pair() {
        let start = date(2024, 1, 1);
        for offset in 1..=400 {
            let later = start + chrono::Duration::days(offset);
            assert_eq!(
                validate(&raw(Some("Acme"), Some(later), Some(start))),
                Err(ValidationError::InvertedRange)
            );
        }
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingOrganization.to_string(), "Выберите организацию");
        assert_eq!(ValidationError::MissingDateRange.to_string(), "Выберите период");
    }

    #[test]
    fn test_is_complete() {
        assert!(raw(Some("Acme"), Some(date(2024, 1, 1)), Some(date(2024, 1, 2))).is_complete());
        assert!(!raw(Some(""), Some(date(2024, 1, 1)), Some(date(2024, 1, 2))).is_complete());
        assert!(!raw(Some("Acme"), None, Some(date(2024, 1, 2))).is_complete());
    }
}
