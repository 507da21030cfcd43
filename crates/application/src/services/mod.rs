//! Application services - Use case implementations

mod dashboard_service;
mod proxy_service;

pub use dashboard_service::{DashboardService, WeatherDashboard};
pub use proxy_service::{API_KEY_MISSING, ProxyService};
