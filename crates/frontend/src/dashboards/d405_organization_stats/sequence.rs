//! Нумерация исходящих запросов.
//!
//! Каждый запрос получает номер из общего возрастающего счётчика. Ответ
//! применяется только если его номер последний выданный в своей категории;
//! остальные ответы считаются устаревшими и отбрасываются. Отмена на уровне
//! транспорта не выполняется.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestCategory {
    Organizations,
    Dataset,
}

impl fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestCategory::Organizations => write!(f, "organizations"),
            RequestCategory::Dataset => write!(f, "dataset"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    category: RequestCategory,
    seq: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.category, self.seq)
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    counter: u64,
    latest_organizations: Option<u64>,
    latest_dataset: Option<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, category: RequestCategory) -> RequestTicket {
        self.counter += 1;
        *self.latest_slot(category) = Some(self.counter);
        RequestTicket {
            category,
            seq: self.counter,
        }
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest(ticket.category) == Some(ticket.seq)
    }

    pub fn latest(&self, category: RequestCategory) -> Option<u64> {
        match category {
            RequestCategory::Organizations => self.latest_organizations,
            RequestCategory::Dataset => self.latest_dataset,
        }
    }

    fn latest_slot(&mut self, category: RequestCategory) -> &mut Option<u64> {
        match category {
            RequestCategory::Organizations => &mut self.latest_organizations,
            RequestCategory::Dataset => &mut self.latest_dataset,
        }
    }
}
