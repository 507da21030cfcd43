//! Application state shared across handlers

use std::sync::Arc;

use application::{DashboardService, ProxyService, ports::WeatherPort};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw pass-through to the weather provider
    pub proxy_service: Arc<ProxyService>,
    /// Normalized dashboard and city search
    pub dashboard_service: Arc<DashboardService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build both services over a single weather port
    pub fn new(weather: Arc<dyn WeatherPort>, config: AppConfig) -> Self {
        Self {
            proxy_service: Arc::new(ProxyService::new(Arc::clone(&weather))),
            dashboard_service: Arc::new(DashboardService::new(weather)),
            config: Arc::new(config),
        }
    }
}
