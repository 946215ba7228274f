use crate::domain::model::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "interview-helper")]
#[command(about = "Text resources, phone sign-in and route guard for the interview practice app")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Display locale (zh or en); overrides app.default_locale
    #[arg(short, long, global = true)]
    pub locale: Option<Locale>,

    /// Directory holding the persisted session; overrides app.data_dir
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a text resource key, optionally with name=value parameters
    Translate {
        key: String,
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Send a one-time code to a phone number
    SendCode {
        phone: String,
        #[arg(long, default_value = "+86")]
        country: String,
    },
    /// Sign in with a phone number and the received code
    Login {
        phone: String,
        code: String,
        #[arg(long, default_value = "+86")]
        country: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Show the current session
    Status,
    /// Check whether a page may be shown for the current session
    Open { path: String },
    /// List the navigation items visible for the current session
    Menu,
    /// Report text resource keys missing from any locale
    Coverage,
    /// List supported country dial codes
    Countries,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_with_params() {
        let cli = CliConfig::parse_from([
            "interview-helper",
            "--locale",
            "en",
            "translate",
            "interview.welcome_message",
            "-p",
            "position=Frontend Engineer",
        ]);

        assert_eq!(cli.locale, Some(Locale::En));
        match cli.command {
            Command::Translate { key, params } => {
                assert_eq!(key, "interview.welcome_message");
                assert_eq!(
                    params,
                    vec![("position".to_string(), "Frontend Engineer".to_string())]
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_login_defaults_to_china() {
        let cli = CliConfig::parse_from(["interview-helper", "login", "13800138000", "123456"]);
        match cli.command {
            Command::Login { country, .. } => assert_eq!(country, "+86"),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
