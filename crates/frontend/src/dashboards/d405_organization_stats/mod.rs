//! D405: статистика организаций: водители и заказы по дням или месяцам.

pub mod api;
pub mod controller;
pub mod directory;
pub mod filter;
pub mod render;
pub mod sequence;
pub mod state;
pub mod ui;
