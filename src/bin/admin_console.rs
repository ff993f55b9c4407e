use clap::Parser;
use menux::app::pages::admin_page::{AdminPage, LOADING_PLACEHOLDER};
use menux::app::pages::NoticeLevel;
use menux::domain::ports::ConfigProvider;
use menux::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use menux::utils::{error::Result, logger};
use menux::{FileSessionStore, RestBackend};

#[derive(Debug, Parser)]
#[command(name = "admin-console")]
#[command(about = "Admin dashboard for the QR menu product")]
struct Args {
    /// Base URL of the hosted backend project
    #[arg(long, default_value = "http://localhost:54321")]
    backend_url: String,

    /// The project's public (anon) api key
    #[arg(long, default_value = "")]
    anon_key: String,

    /// Where the active session is persisted
    #[arg(long, default_value = "./.menux-session.json")]
    session_file: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Sign out and clear the stored session
    #[arg(long)]
    logout: bool,
}

impl ConfigProvider for Args {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn anon_key(&self) -> &str {
        &self.anon_key
    }

    fn session_file(&self) -> &str {
        &self.session_file
    }
}

impl Validate for Args {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.backend_url)?;
        validate_non_empty_string("anon_key", &self.anon_key)?;
        validate_path("session_file", &self.session_file)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting admin console");

    if let Err(e) = args.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let logout = args.logout;
    let store = FileSessionStore::new(args.session_file.clone());
    let backend = RestBackend::new(store, args);
    let page = AdminPage::new(&backend);

    let view = if logout {
        page.sign_out().await
    } else {
        println!("{}", LOADING_PLACEHOLDER);
        page.enter().await
    };

    if !view.body.is_empty() {
        println!("{}", view.body);
    }

    if let Some(notice) = &view.notice {
        match notice.level {
            NoticeLevel::Info => println!("✅ {}", notice.message),
            NoticeLevel::Error => eprintln!("❌ {}", notice.message),
        }
    }

    if let Some(target) = view.redirect {
        tracing::info!("Redirecting to {}", target);
        if view.body.is_empty() && !logout {
            // Gate denied entry; mirror the web app by pointing at the next page.
            eprintln!("➡ Continue at {}", target);
            std::process::exit(1);
        }
    }

    Ok(())
}
