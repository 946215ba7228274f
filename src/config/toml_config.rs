use crate::core::session::{SessionDefaults, DEFAULT_QUOTA_MINUTES};
use crate::domain::model::{Locale, PackageInfo};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DATA_DIR: &str = "./.interview-helper";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    #[serde(default)]
    pub default_locale: Locale,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayBackend {
    #[default]
    Simulated,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub backend: GatewayBackend,
    pub endpoint: Option<String>,
    pub template_id: Option<String>,
    pub region: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default = "default_quota_minutes")]
    pub default_quota_minutes: u32,
    pub package: Option<PackageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    pub total_minutes: u32,
    pub used_minutes: u32,
    pub expiry_date: NaiveDate,
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_simulated_delay_ms() -> u64 {
    1000
}

fn default_quota_minutes() -> u32 {
    DEFAULT_QUOTA_MINUTES
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend: GatewayBackend::default(),
            endpoint: None,
            template_id: None,
            region: None,
            timeout_seconds: default_timeout_seconds(),
            simulated_delay_ms: default_simulated_delay_ms(),
            default_quota_minutes: default_quota_minutes(),
            package: None,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AppError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SMS_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("app.data_dir", &self.app.data_dir)?;
        validation::validate_positive_number("auth.timeout_seconds", self.auth.timeout_seconds, 1)?;

        if self.auth.backend == GatewayBackend::Http {
            let endpoint = validation::validate_required_field("auth.endpoint", &self.auth.endpoint)?;
            validation::validate_url("auth.endpoint", endpoint)?;

            let template_id =
                validation::validate_required_field("auth.template_id", &self.auth.template_id)?;
            validation::validate_non_empty_string("auth.template_id", template_id)?;
        }

        if let Some(package) = &self.auth.package {
            validation::validate_non_empty_string("auth.package.name", &package.name)?;
            validation::validate_range(
                "auth.package.used_minutes",
                package.used_minutes,
                0,
                package.total_minutes,
            )?;
        }

        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.app.data_dir)
    }

    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_secs(self.auth.timeout_seconds)
    }

    /// 新 session 的額度與套餐；未設定套餐時使用內建的標準套餐
    pub fn session_defaults(&self) -> SessionDefaults {
        let package = match &self.auth.package {
            Some(p) => Some(PackageInfo {
                name: p.name.clone(),
                total_time: p.total_minutes,
                used_time: p.used_minutes,
                expiry_date: p.expiry_date,
            }),
            None => SessionDefaults::default().package,
        };

        SessionDefaults {
            quota_minutes: self.auth.default_quota_minutes,
            package,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config.app.default_locale, Locale::Zh);
        assert_eq!(config.app.data_dir, DEFAULT_DATA_DIR);
        assert_eq!(config.auth.backend, GatewayBackend::Simulated);
        assert_eq!(config.gateway_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());

        let defaults = config.session_defaults();
        assert_eq!(defaults.quota_minutes, 120);
        assert_eq!(defaults.package.unwrap().total_time, 300);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[app]
default_locale = "en"
data_dir = "/tmp/interview-helper"

[auth]
backend = "http"
endpoint = "https://sms.example.com"
template_id = "1234567"
region = "ap-beijing"
timeout_seconds = 5
default_quota_minutes = 60

[auth.package]
name = "Pro"
total_minutes = 600
used_minutes = 0
expiry_date = "2026-12-31"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.app.default_locale, Locale::En);
        assert_eq!(config.auth.backend, GatewayBackend::Http);
        assert_eq!(config.auth.region.as_deref(), Some("ap-beijing"));
        assert!(config.validate().is_ok());

        let defaults = config.session_defaults();
        assert_eq!(defaults.quota_minutes, 60);
        let package = defaults.package.unwrap();
        assert_eq!(package.name, "Pro");
        assert_eq!(package.expiry_date, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn test_default_locale_accepts_region_tags() {
        let config = AppConfig::from_toml_str("[app]\ndefault_locale = \"zh-CN\"\n").unwrap();
        assert_eq!(config.app.default_locale, Locale::Zh);

        let config = AppConfig::from_toml_str("[app]\ndefault_locale = \"EN_us\"\n").unwrap();
        assert_eq!(config.app.default_locale, Locale::En);

        assert!(AppConfig::from_toml_str("[app]\ndefault_locale = \"fr\"\n").is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("IH_TEST_SMS_ENDPOINT", "https://test.sms.com");

        let toml_content = r#"
[auth]
backend = "http"
endpoint = "${IH_TEST_SMS_ENDPOINT}"
template_id = "tpl"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.auth.endpoint.as_deref(), Some("https://test.sms.com"));

        std::env::remove_var("IH_TEST_SMS_ENDPOINT");
    }

    #[test]
    fn test_http_backend_requires_endpoint() {
        let config = AppConfig::from_toml_str("[auth]\nbackend = \"http\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(AppError::MissingConfigError { .. })
        ));

        let config = AppConfig::from_toml_str(
            "[auth]\nbackend = \"http\"\nendpoint = \"ftp://x\"\ntemplate_id = \"t\"\n",
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(AppConfig::from_toml_str("[app]\ndefault_locale = \"fr\"\n").is_err());
        assert!(AppConfig::from_toml_str("[auth]\nbackend = \"carrier-pigeon\"\n").is_err());

        let config = AppConfig::from_toml_str("[auth]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str(
            "[auth.package]\nname = \"x\"\ntotal_minutes = 10\nused_minutes = 20\nexpiry_date = \"2025-01-01\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[app]\ndefault_locale = \"en\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.app.default_locale, Locale::En);

        assert!(matches!(
            AppConfig::from_file("/definitely/not/here.toml"),
            Err(AppError::ConfigError { .. })
        ));
    }
}
