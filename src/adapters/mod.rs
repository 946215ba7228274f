// Adapters layer: concrete implementations of the domain ports (session storage, verification gateway).

pub mod gateway;
pub mod storage;

use crate::config::toml_config::{AppConfig, GatewayBackend};
use crate::core::VerificationGateway;
use std::time::Duration;

pub use gateway::{HttpGateway, SimulatedGateway};
pub use storage::{FileSessionStore, MemorySessionStore};

/// 依設定選擇驗證碼通道
pub fn gateway_from_config(config: &AppConfig) -> Box<dyn VerificationGateway> {
    match config.auth.backend {
        GatewayBackend::Simulated => Box::new(SimulatedGateway::new(Duration::from_millis(
            config.auth.simulated_delay_ms,
        ))),
        GatewayBackend::Http => Box::new(HttpGateway::new(
            config.auth.endpoint.clone().unwrap_or_default(),
            config.auth.template_id.clone().unwrap_or_default(),
            config.auth.region.clone().unwrap_or_default(),
        )),
    }
}
