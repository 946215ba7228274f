pub mod catalog;
pub mod navigation;
pub mod session;

pub use crate::domain::model::{Locale, PackageInfo, Session};
pub use crate::domain::ports::{SessionStore, VerificationGateway};
pub use crate::utils::error::Result;
