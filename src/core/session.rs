use crate::core::navigation::{self, Navigation};
use crate::domain::contact::Contact;
use crate::domain::model::{PackageInfo, Session};
use crate::domain::ports::{SessionStore, VerificationGateway};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_verification_code;
use chrono::NaiveDate;
use std::future::Future;
use std::time::Duration;

/// 持久化槽的鍵名，與前端 localStorage 使用的相同
pub const SESSION_SLOT: &str = "user";

pub const DEFAULT_QUOTA_MINUTES: u32 = 120;
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// 新登入的使用者拿到的額度與套餐
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub quota_minutes: u32,
    pub package: Option<PackageInfo>,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            quota_minutes: DEFAULT_QUOTA_MINUTES,
            package: NaiveDate::from_ymd_opt(2025, 6, 1).map(|expiry_date| PackageInfo {
                name: "标准套餐".to_string(),
                total_time: 300,
                used_time: 180,
                expiry_date,
            }),
        }
    }
}

/// Owns the single local session and the transitions between
/// `Anonymous` and `Authenticated`.
///
/// The in-memory session is only replaced after the gateway has accepted the
/// code and the record has been written to the store, so dropping a pending
/// `verify` future never changes `state()`. The durable slot is not covered:
/// a store write already handed to the blocking pool may still complete, and
/// the next `restore()` will pick that record up.
pub struct SessionGuard<S: SessionStore, G: VerificationGateway> {
    store: S,
    gateway: G,
    defaults: SessionDefaults,
    timeout: Duration,
    active: Option<Session>,
}

impl<S: SessionStore, G: VerificationGateway> SessionGuard<S, G> {
    pub fn new(store: S, gateway: G) -> Self {
        Self {
            store,
            gateway,
            defaults: SessionDefaults::default(),
            timeout: DEFAULT_GATEWAY_TIMEOUT,
            active: None,
        }
    }

    pub fn with_defaults(mut self, defaults: SessionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 啟動時讀回上次保存的 session。讀不到或格式錯誤都當作未登入
    pub async fn restore(&mut self) -> bool {
        self.active = match self.store.load(SESSION_SLOT).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Session>(&bytes) {
                Ok(session) => {
                    tracing::info!("Restored session for {}", session.phone);
                    Some(session)
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed persisted session: {}", e);
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("No persisted session found");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);
                None
            }
        };

        self.active.is_some()
    }

    /// 請通道發送驗證碼，不改變登入狀態
    pub async fn request_code(&self, contact: &Contact) -> Result<()> {
        let phone = contact.international();
        tracing::info!("Sending verification code to {}", contact.display());

        self.bounded(self.gateway.send_code(&phone)).await.map_err(|e| {
            tracing::error!("Verification code delivery to {} failed: {}", phone, e);
            e
        })
    }

    /// 驗證成功時建立並保存新 session，失敗時狀態不變
    pub async fn verify(&mut self, contact: &Contact, code: &str) -> Result<&Session> {
        validate_verification_code(code)?;

        let phone = contact.international();
        tracing::debug!("Checking verification code for {}", phone);

        if !self.bounded(self.gateway.check_code(&phone, code)).await? {
            tracing::info!("Verification code rejected for {}", phone);
            return Err(AppError::VerificationRejected);
        }

        let session = Session {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            phone,
            remaining_time: self.defaults.quota_minutes,
            package_info: self.defaults.package.clone(),
        };

        let payload = serde_json::to_vec(&session)?;
        self.store.save(SESSION_SLOT, &payload).await?;

        tracing::info!("Signed in as {} (session {})", session.phone, session.id);
        Ok(&*self.active.insert(session))
    }

    /// 登出：先刪持久化槽再清記憶體。刪除失敗時維持登入狀態，
    /// 沒有 session 時呼叫也不會出錯
    pub async fn end_session(&mut self) -> Result<()> {
        self.store.remove(SESSION_SLOT).await?;
        if let Some(session) = self.active.take() {
            tracing::info!("Signed out {}", session.phone);
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    /// 路由守衛：根據目前登入狀態決定頁面是否可以顯示
    pub fn open(&self, path: &str) -> Navigation {
        navigation::dispatch(path, self.is_authenticated())
    }

    async fn bounded<T>(&self, call: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::GatewayTimeout {
                millis: self.timeout.as_millis() as u64,
            }),
        }
    }
}
