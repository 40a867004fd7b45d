//! rofi-jira - search Jira issues with rofi and open the pick in a browser.
//!
//! Settings come from flags, then `ROFI_JIRA_*` environment variables, then
//! built-in defaults. Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::Result;
use clap::Parser;
use rofi_jira_core::config::AppConfig;
use rofi_jira_core::settings::current_username;
use rofi_jira_core::{
    JiraClient, Outcome, RofiJiraError, RofiPicker, SearchCatalog, Settings, SystemOpener,
    Workflow,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rofi-jira")]
#[command(about = "A wrapper around rofi to search through JIRA issues")]
#[command(
    override_usage = "rofi-jira [--config FILE] [--search STR] [--server-url STR] [--username STR] [--password STR]"
)]
struct Args {
    /// Configuration YAML file to grab search strings from
    #[arg(
        short,
        long,
        env = AppConfig::ENV_CONFIG,
        default_value = AppConfig::DEFAULT_CONFIG_FILE,
        value_name = "FILE"
    )]
    config: PathBuf,

    /// Password to use when connecting to JIRA
    #[arg(
        short,
        long,
        env = AppConfig::ENV_PASSWORD,
        default_value = "",
        hide_env_values = true,
        hide_default_value = true,
        value_name = "STR"
    )]
    password: String,

    /// Name of a configured search to start with, skipping the search menu
    #[arg(short, long, value_name = "STR")]
    search: Option<String>,

    /// URL of the JIRA server to connect to
    #[arg(
        short = 'S',
        long,
        env = AppConfig::ENV_SERVER_URL,
        default_value = AppConfig::DEFAULT_SERVER_URL,
        value_name = "STR"
    )]
    server_url: String,

    /// Username to use when connecting to JIRA [default: current user]
    #[arg(short, long, env = AppConfig::ENV_USERNAME, value_name = "STR")]
    username: Option<String>,
}

impl Args {
    fn into_settings(self) -> Settings {
        Settings::new()
            .with_config_path(&self.config)
            .with_search(self.search)
            .with_server_url(self.server_url)
            .with_credentials(
                self.username.unwrap_or_else(current_username),
                self.password,
            )
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let settings = args.into_settings();
    debug!("Settings: {:?}", settings);

    match run(&settings) {
        Ok(Outcome::Opened(url)) => {
            info!("Opened {}", url);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err)),
    }
}

fn run(settings: &Settings) -> Result<Outcome> {
    settings.validate()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let catalog = SearchCatalog::load(&settings.config_path)?;
    let client = JiraClient::from_settings(settings)?;
    let picker = RofiPicker::new();
    let opener = SystemOpener::new();

    let workflow = Workflow {
        catalog: &catalog,
        picker: &picker,
        source: &client,
        opener: &opener,
        server_url: &settings.server_url,
    };

    Ok(runtime.block_on(workflow.run(settings.search.as_deref()))?)
}

/// Print the failure and pick the exit code.
fn report(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RofiJiraError>() {
        Some(rofi_err) if rofi_err.is_controlled() => {
            eprintln!("rofi-jira: {}", rofi_err);
            rofi_err.exit_code()
        }
        Some(rofi_err) => {
            eprintln!("rofi-jira: {:#}", err);
            rofi_err.exit_code()
        }
        None => {
            eprintln!("rofi-jira: {:#}", err);
            1
        }
    }
}
