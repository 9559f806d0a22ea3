//! Клиент сервиса отчётов и разбор его ответов.
//!
//! Ответы проверяются на границе: строка без нужных полей даёт
//! `ReportError::MalformedResponse`, а не пустые значения в таблице.

use super::filter::{Aggregation, FilterCriteria};
use super::state::{OrganizationSet, PeriodKey, ReportDataset, ReportRow};
use crate::shared::api_utils::api_url;
use crate::shared::date_utils::parse_wire_date;
use async_trait::async_trait;
use contracts::dashboards::d405_organization_stats::{
    ApiErrorDto, OrganizationsQuery, ReportQuery, ReportRowDto,
};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

const ORGANIZATIONS_PATH: &str = "/api/organizations";
const DATA_PATH: &str = "/api/data";
const EXPORT_PATH: &str = "/api/export";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Неуспешный HTTP-ответ; `message` берётся из поля `error` тела
    #[error("HTTP error {status}: {}", message.as_deref().unwrap_or("no details"))]
    Remote { status: u16, message: Option<String> },
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ReportError {
    /// Текст для оператора: сообщение сервиса как есть, иначе `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ReportError::Remote {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Удалённые операции сервиса отчётов
#[async_trait(?Send)]
pub trait ReportClient {
    async fn list_organizations(&self, corp_filter: bool) -> Result<OrganizationSet, ReportError>;

    /// Пустой набор строк считается успешным ответом
    async fn fetch_dataset(&self, criteria: &FilterCriteria) -> Result<ReportDataset, ReportError>;

    /// Чистая функция, без сетевого вызова
    fn build_export_url(&self, criteria: &FilterCriteria) -> String;
}

/// Строка запроса через `serde_qs`; при ошибке сериализации пишет в лог и
/// возвращает пустую строку
fn encode_query<T: Serialize>(query: &T) -> String {
    match serde_qs::to_string(query) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::error!("Failed to encode query string: {}", e);
            String::new()
        }
    }
}

pub fn organizations_query(corp_filter: bool) -> String {
    encode_query(&OrganizationsQuery {
        filter_corp: corp_filter,
    })
}

pub fn report_query(criteria: &FilterCriteria) -> String {
    let query: ReportQuery = criteria.to_query();
    encode_query(&query)
}

pub fn export_url(base: &str, criteria: &FilterCriteria) -> String {
    api_url(base, EXPORT_PATH, &report_query(criteria))
}

pub fn parse_organizations(corp_filter: bool, body: &str) -> Result<OrganizationSet, ReportError> {
    let organizations: Vec<String> = serde_json::from_str(body)
        .map_err(|e| ReportError::MalformedResponse(format!("organizations: {}", e)))?;
    Ok(OrganizationSet::new(corp_filter, organizations))
}

pub fn parse_dataset(aggregation: Aggregation, body: &str) -> Result<ReportDataset, ReportError> {
    let dtos: Vec<ReportRowDto> = serde_json::from_str(body)
        .map_err(|e| ReportError::MalformedResponse(format!("report rows: {}", e)))?;

    let rows = dtos
        .into_iter()
        .enumerate()
        .map(|(index, dto)| row_from_dto(aggregation, index, dto))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReportDataset::new(aggregation, rows))
}

fn row_from_dto(
    aggregation: Aggregation,
    index: usize,
    dto: ReportRowDto,
) -> Result<ReportRow, ReportError> {
    let date = dto.date.as_deref().and_then(parse_wire_date);

    let period = match aggregation {
        Aggregation::Daily => PeriodKey::Day(date.ok_or_else(|| {
            ReportError::MalformedResponse(format!("row {}: missing or invalid date", index))
        })?),
        Aggregation::Monthly => {
            let label = dto.month_name.filter(|m| !m.trim().is_empty());
            if label.is_none() && date.is_none() {
                return Err(ReportError::MalformedResponse(format!(
                    "row {}: neither month_name nor date",
                    index
                )));
            }
            PeriodKey::Month { date, label }
        }
    };

    Ok(ReportRow {
        period,
        organization: dto.organization,
        driver_metric: dto.max_drivers,
        order_count: dto.total_orders,
    })
}

/// Ошибка из неуспешного ответа; тело может не быть JSON
pub fn remote_error(status: u16, body: &str) -> ReportError {
    let message = serde_json::from_str::<ApiErrorDto>(body)
        .ok()
        .and_then(|dto| dto.error)
        .filter(|m| !m.trim().is_empty());
    ReportError::Remote { status, message }
}

/// HTTP-реализация поверх `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpReportClient {
    base: String,
}

impl HttpReportClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn get_text(&self, path: &str, query: &str) -> Result<String, ReportError> {
        let url = api_url(&self.base, path, query);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(remote_error(status, &body));
        }

        Ok(body)
    }
}

#[async_trait(?Send)]
impl ReportClient for HttpReportClient {
    async fn list_organizations(&self, corp_filter: bool) -> Result<OrganizationSet, ReportError> {
        let body = self
            .get_text(ORGANIZATIONS_PATH, &organizations_query(corp_filter))
            .await?;
        parse_organizations(corp_filter, &body)
    }

    async fn fetch_dataset(&self, criteria: &FilterCriteria) -> Result<ReportDataset, ReportError> {
        let body = self.get_text(DATA_PATH, &report_query(criteria)).await?;
        parse_dataset(criteria.aggregation, &body)
    }

    fn build_export_url(&self, criteria: &FilterCriteria) -> String {
        export_url(&self.base, criteria)
    }
}
