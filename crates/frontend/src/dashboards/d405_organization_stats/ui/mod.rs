pub mod adapters;
pub mod chart_js;
pub mod dashboard;

pub use dashboard::OrganizationStatsDashboard;
