use clap::Parser;
use menux::app::pages::landing_page;
use menux::app::pages::menu_page::MenuPage;
use menux::utils::{logger, validation::Validate};
use menux::{CliConfig, FileSessionStore, RestBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting menux");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.about {
        println!("{}", landing_page::render());
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = FileSessionStore::new(config.session_file.clone());
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
