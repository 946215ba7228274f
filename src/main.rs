use clap::Parser;
use interview_helper::adapters::gateway_from_config;
use interview_helper::config::cli::Command;
use interview_helper::core::navigation::{self, Navigation};
use interview_helper::core::SessionStore;
use interview_helper::domain::contact::{find_country, Contact, CountryCode, COUNTRY_CODES};
use interview_helper::domain::model::{format_minutes, SUPPORTED_LOCALES};
use interview_helper::domain::ports::VerificationGateway;
use interview_helper::utils::error::ErrorSeverity;
use interview_helper::utils::{logger, validation::Validate};
use interview_helper::{
    AppConfig, AppError, CliConfig, FileSessionStore, SessionGuard, Translator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let mut config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    // 命令列覆蓋設定
    if let Some(dir) = &cli.data_dir {
        config.app.data_dir = dir.display().to_string();
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let translator = Translator::builtin(cli.locale.unwrap_or(config.app.default_locale));
    let store = FileSessionStore::new(config.data_dir());
    let mut guard = SessionGuard::new(store, gateway_from_config(&config))
        .with_defaults(config.session_defaults())
        .with_timeout(config.gateway_timeout());
    guard.restore().await;

    if let Err(e) = run(cli.command, &translator, &mut guard).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        // 優先顯示文本資源中的在地化訊息
        match e.message_key() {
            Some(key) => eprintln!("❌ {}", translator.t(key)),
            None => eprintln!("❌ {}", e.user_friendly_message()),
        }
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run<S, G>(
    command: Command,
    translator: &Translator,
    guard: &mut SessionGuard<S, G>,
) -> Result<(), AppError>
where
    S: SessionStore,
    G: VerificationGateway,
{
    match command {
        Command::Translate { key, params } => {
            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            println!("{}", translator.t_with(&key, &params));
        }
        Command::SendCode { phone, country } => {
            let contact = Contact::parse(lookup_country(&country)?, &phone)?;
            guard.request_code(&contact).await?;
            println!("✅ {} {}", translator.t("login.verify.subtitle"), contact.display());
        }
        Command::Login {
            phone,
            code,
            country,
        } => {
            let contact = Contact::parse(lookup_country(&country)?, &phone)?;
            let session = guard.verify(&contact, &code).await?;
            println!("✅ {} ({})", contact.display(), session.id);
            println!(
                "{}: {}",
                translator.t("mode.remaining_time"),
                format_minutes(translator.locale(), session.remaining_time)
            );
        }
        Command::Logout => {
            guard.end_session().await?;
            println!("👋 {}", translator.t("nav.logout"));
        }
        Command::Status => match guard.session() {
            Some(session) => {
                println!("📱 {}", session.phone);
                println!(
                    "{}: {}",
                    translator.t("mode.remaining_time"),
                    format_minutes(translator.locale(), session.remaining_time)
                );
                if let Some(package) = &session.package_info {
                    println!(
                        "📦 {} {}/{} ({}%), {}",
                        package.name,
                        format_minutes(translator.locale(), package.used_time),
                        format_minutes(translator.locale(), package.total_time),
                        package.usage_percentage(),
                        package.expiry_date
                    );
                }
            }
            None => println!("{}", translator.t("login.phone.title")),
        },
        Command::Open { path } => match guard.open(&path) {
            Navigation::Render(route) => println!("✅ {}", route),
            Navigation::Redirect { to, .. } => println!("🔒 {} -> {}", path, to),
            Navigation::NotFound(path) => println!("❓ {}", path),
        },
        Command::Menu => {
            for item in navigation::menu(guard.is_authenticated()) {
                println!("{:<20} {}", item.route.path(), translator.t(item.label_key));
            }
        }
        Command::Coverage => {
            let report = translator.catalog().coverage();
            for locale in SUPPORTED_LOCALES {
                println!("{}: {} keys", locale, translator.catalog().len(*locale));
            }
            for (locale, keys) in &report.missing {
                for key in keys {
                    println!("missing [{}] {}", locale, key);
                }
            }
            if report.is_complete() {
                println!("✅ {} keys present in every locale", report.total_keys);
            }
        }
        Command::Countries => {
            for country in COUNTRY_CODES {
                println!(
                    "{:<6} {:<16} {}",
                    country.dial_code,
                    country.name(translator.locale()),
                    country.max_length
                );
            }
        }
    }

    Ok(())
}

fn lookup_country(dial_code: &str) -> Result<&'static CountryCode, AppError> {
    find_country(dial_code).ok_or_else(|| AppError::InvalidContact {
        contact: dial_code.to_string(),
        reason: "unsupported country dial code".to_string(),
    })
}
