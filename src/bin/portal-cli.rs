use std::path::PathBuf;

use clap::{Parser, Subcommand};

use login_portal::config::{load_or_default, PortalConfig};
use login_portal::login::{
    FederatedProvider, HttpAuthenticator, LoginController, Navigator, SubmitOutcome, LINKS,
};
use login_portal::observability::logging;
use login_portal::routing::Router;

#[derive(Parser)]
#[command(name = "portal-cli")]
#[command(about = "Terminal driver for the login portal", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the login form once
    Login {
        #[arg(short, long, default_value = "")]
        email: String,

        #[arg(short, long, env = "PORTAL_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
    },
    /// List the links shown on the login page
    Links,
    /// Show the compiled proxy rules
    Rules,
}

/// Prints the destination instead of switching views.
struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&self, path: &str) {
        println!("-> {}", path);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;
    logging::init(&config.observability)?;

    match cli.command {
        Commands::Login { email, password } => login(&config, email, password).await?,
        Commands::Links => {
            for link in LINKS.iter() {
                println!("{:<20} {}", link.label, link.path);
            }
            for provider in FederatedProvider::ALL {
                println!("{:<20} (unavailable)", provider);
            }
        }
        Commands::Rules => {
            let router = Router::from_config(config.rules.clone());
            for compiled in router.rules() {
                let rule = compiled.rule();
                println!(
                    "{} -> {} (change_origin={}, secure={}, strip_prefix={})",
                    compiled.prefix(),
                    rule.target,
                    rule.change_origin,
                    rule.secure,
                    rule.strip_prefix
                );
            }
        }
    }

    Ok(())
}

async fn login(
    config: &PortalConfig,
    email: String,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let authenticator = HttpAuthenticator::new(&config.auth)?;
    let mut controller = LoginController::new(authenticator, StdoutNavigator);
    controller.set_email(email);
    controller.set_password(password);

    println!("{}", controller.submit_label());
    match controller.submit().await {
        SubmitOutcome::Authenticated => {}
        SubmitOutcome::Rejected | SubmitOutcome::Failed => {
            eprintln!("Error: {}", controller.state().error_message());
            std::process::exit(1);
        }
    }
    Ok(())
}
