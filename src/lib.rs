pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod locales;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{FileSessionStore, HttpGateway, MemorySessionStore, SimulatedGateway};
pub use config::{AppConfig, GatewayBackend};
pub use crate::core::{
    catalog::{Catalog, Translator},
    navigation::{Navigation, Route},
    session::{AuthState, SessionGuard},
};
pub use domain::contact::Contact;
pub use domain::model::{Locale, Session};
pub use utils::error::{AppError, Result};
