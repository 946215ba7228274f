use crate::core::VerificationGateway;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_verification_code;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// 開發用的假通道：固定延遲，發送永遠成功，任何 6 位數字都算正確
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl VerificationGateway for SimulatedGateway {
    async fn send_code(&self, phone: &str) -> Result<()> {
        tracing::debug!("Simulating verification code delivery to {}", phone);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn check_code(&self, phone: &str, code: &str) -> Result<bool> {
        tracing::warn!(
            "Simulated gateway accepts any 6-digit code for {}; do not use it outside development",
            phone
        );
        tokio::time::sleep(self.delay).await;
        Ok(validate_verification_code(code).is_ok())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeRequest<'a> {
    phone_number: &'a str,
    template_id: &'a str,
    region: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyCodeRequest<'a> {
    phone_number: &'a str,
    code: &'a str,
}

/// 透過後端簡訊服務發送與校驗驗證碼
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    endpoint: String,
    template_id: String,
    region: String,
}

impl HttpGateway {
    pub fn new(
        endpoint: impl Into<String>,
        template_id: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            template_id: template_id.into(),
            region: region.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }
}

#[async_trait]
impl VerificationGateway for HttpGateway {
    async fn send_code(&self, phone: &str) -> Result<()> {
        let url = self.url("/api/sms/send");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&SendCodeRequest {
                phone_number: phone,
                template_id: &self.template_id,
                region: &self.region,
            })
            .send()
            .await
            .map_err(|e| AppError::DeliveryFailed {
                reason: format!("request to {} failed: {}", url, e),
            })?;

        let status = response.status();
        tracing::debug!("SMS send response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::DeliveryFailed {
            reason: format!("{} {}", status, body.trim()),
        })
    }

    async fn check_code(&self, phone: &str, code: &str) -> Result<bool> {
        let url = self.url("/api/sms/verify");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&VerifyCodeRequest {
                phone_number: phone,
                code,
            })
            .send()
            .await
            .map_err(|e| AppError::DeliveryFailed {
                reason: format!("request to {} failed: {}", url, e),
            })?;

        let status = response.status();
        tracing::debug!("SMS verify response status: {}", status);

        match status {
            s if s.is_success() => Ok(true),
            s if s == StatusCode::TOO_MANY_REQUESTS => Err(AppError::DeliveryFailed {
                reason: "verification service is rate limiting requests".to_string(),
            }),
            s if s.is_client_error() => Ok(false),
            s => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::DeliveryFailed {
                    reason: format!("{} {}", s, body.trim()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_gateway_accepts_any_six_digits() {
        let gateway = SimulatedGateway::new(Duration::ZERO);

        assert!(gateway.send_code("+8613800138000").await.is_ok());
        assert!(gateway.check_code("+8613800138000", "123456").await.unwrap());
        assert!(gateway.check_code("+8613800138000", "987654").await.unwrap());
        assert!(!gateway.check_code("+8613800138000", "12").await.unwrap());
        assert!(!gateway.check_code("+8613800138000", "abcdef").await.unwrap());
    }

    #[test]
    fn test_http_gateway_trims_endpoint() {
        let gateway = HttpGateway::new("https://sms.example.com/", "tpl", "ap-beijing");
        assert_eq!(
            gateway.url("/api/sms/send"),
            "https://sms.example.com/api/sms/send"
        );
    }
}
