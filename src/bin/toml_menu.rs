use anyhow::Context;
use clap::Parser;
use menux::app::pages::menu_page::MenuPage;
use menux::config::toml_config::TomlConfig;
use menux::domain::ports::ConfigProvider;
use menux::utils::{logger, validation::Validate};
use menux::{FileSessionStore, RestBackend};

#[derive(Parser)]
#[command(name = "toml-menu")]
#[command(about = "Menu viewer driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "menux.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "Configured for {} v{} against {}",
        config.app.name,
        config.app.version,
        config.backend_url()
    );

    let store = FileSessionStore::new(config.session_file().to_string());
    let backend = RestBackend::new(store, config);

    let mut page = MenuPage::new(&backend);
    page.refresh().await;
    println!("{}", page.render());

    if let Some(notice) = page.notice() {
        eprintln!("❌ {}", notice.message);
        std::process::exit(1);
    }

    Ok(())
}
