mod commands;
mod error;
mod lists;
mod snapshot;
mod transport;


use clap::{Parser, Subcommand};
use records::device::Device;
use records::profile::UserProfile;
use records::vehicle::Vehicle;
use tracing::Level;

use crate::commands::{DispatchCommand, FeedbackCommand, FuelLogCommand, MaintenanceCommand, RecordCommand};
use crate::error::CliError;
use crate::lists::DEFAULT_PAGE_SIZE;
use crate::transport::ApiClient;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Parser, Debug)]
#[command(name = "fleet-cli", about = "Fleet operations API CLI")]
struct Cli {
    #[arg(long, env = "FLEET_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Bearer token from `login`.
    #[arg(long, env = "FLEET_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log request timings and fetch counts to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API answers and accepts the token.
    Ping,
    /// Exchange admin credentials for a bearer token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "FLEET_API_PASSWORD", hide_env_values = true)]
        password: String,
    },
    #[command(subcommand)]
    Vehicle(RecordCommand),
    /// Drivers, PAOs and admins.
    #[command(subcommand)]
    Profile(RecordCommand),
    #[command(subcommand)]
    Assignment(RecordCommand),
    #[command(subcommand)]
    Maintenance(MaintenanceCommand),
    #[command(subcommand)]
    FuelLog(FuelLogCommand),
    #[command(subcommand)]
    Device(RecordCommand),
    #[command(subcommand)]
    Feedback(FeedbackCommand),
    #[command(subcommand)]
    Dispatch(DispatchCommand),
    /// Every assignment with crew names and its unfinished dispatch.
    Overview,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let api = ApiClient::new(cli.base_url, cli.token)?;

    let result = run(&api, cli.command).await;
    if let Err(e) = &result {
        if e.is_unauthorized() {
            tracing::warn!("token rejected; run `fleet-cli login` and set FLEET_API_TOKEN");
        }
    }
    result
}

async fn run(api: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Ping => commands::run_ping(api).await,
        Command::Login { username, password } => commands::run_login(api, &username, &password).await,
        Command::Vehicle(RecordCommand::List(args)) => {
            commands::run_list(api, &args, DEFAULT_PAGE_SIZE, &lists::vehicles()).await
        }
        Command::Vehicle(RecordCommand::Edit(command)) => commands::run_edit::<Vehicle>(api, command).await,
        Command::Profile(RecordCommand::List(args)) => {
            commands::run_list(api, &args, DEFAULT_PAGE_SIZE, &lists::profiles()).await
        }
        Command::Profile(RecordCommand::Edit(command)) => commands::run_edit::<UserProfile>(api, command).await,
        Command::Assignment(command) => commands::run_assignment(api, command).await,
        Command::Maintenance(command) => commands::run_maintenance(api, command).await,
        Command::FuelLog(command) => commands::run_fuel_log(api, command).await,
        Command::Device(RecordCommand::List(args)) => {
            commands::run_list(api, &args, DEFAULT_PAGE_SIZE, &lists::devices()).await
        }
        Command::Device(RecordCommand::Edit(command)) => commands::run_edit::<Device>(api, command).await,
        Command::Feedback(command) => commands::run_feedback(api, command).await,
        Command::Dispatch(command) => commands::run_dispatch(api, command).await,
        Command::Overview => commands::run_overview(api).await,
    }
}
