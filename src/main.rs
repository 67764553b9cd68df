use clap::Parser;
use sso_login::core::ConfigProvider;
use sso_login::utils::{logger, validation::Validate};
use sso_login::{CliConfig, LoginEngine, Result, SsoPortal};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting sso-login");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Login process failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let portal = SsoPortal::from_config(config)?;
    let engine = LoginEngine::new(portal, config.env_file()?);

    if config.dry_run {
        engine.dry_run()?;
        return Ok(());
    }

    let outcome = engine.run().await?;
    println!("✅ SSO login finished: {}", outcome);

    Ok(())
}
