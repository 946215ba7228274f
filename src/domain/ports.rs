use crate::utils::error::Result;
use async_trait::async_trait;

/// 本地持久化的鍵值槽，對應瀏覽器端的 localStorage
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn save(&self, key: &str, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 簡訊驗證碼的發送與校驗通道
#[async_trait]
pub trait VerificationGateway: Send + Sync {
    async fn send_code(&self, phone: &str) -> Result<()>;

    /// 驗證碼正確回傳 `Ok(true)`，錯誤回傳 `Ok(false)`；通道本身失敗才回傳 `Err`
    async fn check_code(&self, phone: &str, code: &str) -> Result<bool>;
}

#[async_trait]
impl VerificationGateway for Box<dyn VerificationGateway> {
    async fn send_code(&self, phone: &str) -> Result<()> {
        (**self).send_code(phone).await
    }

    async fn check_code(&self, phone: &str, code: &str) -> Result<bool> {
        (**self).check_code(phone, code).await
    }
}
