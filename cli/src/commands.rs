//! Subcommand definitions and their runners.
//!
//! ARCHITECTURE
//! ============
//! Each runner builds request descriptions with `records`, executes them
//! through [`ApiClient`] and prints pretty JSON on stdout. Diagnostics go
//! to stderr through `tracing`. List commands fetch the full collection and
//! page it locally with [`crate::lists`].

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use listing::Matcher;
use records::dispatch::{self, DispatchAction, DispatchLog};
use records::feedback::{self, FeedbackDraft, FeedbackLog, MAX_RATING, MIN_RATING, OTP_LENGTH, OtpVerification};
use records::fuel_log::{self, FuelLog, FuelLogDraft, Upload};
use records::maintenance;
use records::rest::{self, Editable, Resource};
use records::{Record, RecordId};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;
use crate::lists::{self, DEFAULT_PAGE_SIZE, FEEDBACK_PAGE_SIZE, ListArgs, print_json, print_page};
use crate::snapshot::{Required, Snapshot};
use crate::transport::ApiClient;

/// List plus the shared JSON-draft operations.
#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// List records, filtered and paged locally.
    List(ListArgs),
    #[command(flatten)]
    Edit(EditCommand),
}

#[derive(Subcommand, Debug)]
pub enum EditCommand {
    Get {
        id: RecordId,
    },
    Create {
        /// Draft as a JSON object.
        #[arg(long)]
        data: String,
    },
    Update {
        id: RecordId,
        /// Complete draft as a JSON object.
        #[arg(long)]
        data: String,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Subcommand, Debug)]
pub enum MaintenanceCommand {
    List(ListArgs),
    #[command(flatten)]
    Edit(EditCommand),
    /// Flip between pending and completed.
    Toggle { id: RecordId },
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Fuel receipt image.
    #[arg(long)]
    pub receipt: Option<PathBuf>,

    /// Odometer photo.
    #[arg(long)]
    pub odometer_proof: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum FuelLogCommand {
    List(ListArgs),
    Get {
        id: RecordId,
    },
    Create {
        #[arg(long)]
        data: String,
        #[command(flatten)]
        uploads: UploadArgs,
    },
    /// Files not given keep the server's current upload.
    Update {
        id: RecordId,
        #[arg(long)]
        data: String,
        #[command(flatten)]
        uploads: UploadArgs,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Subcommand, Debug)]
pub enum FeedbackCommand {
    List(ListArgs),
    Get {
        id: RecordId,
    },
    /// Submit passenger feedback for a verified phone number.
    Create {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        vehicle_id: RecordId,
        #[arg(long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Text a one-time code to a phone number.
    OtpGenerate { phone: String },
    OtpVerify { phone: String, otp: String },
}

#[derive(Subcommand, Debug)]
pub enum DispatchCommand {
    List(ListArgs),
    Delete { id: RecordId },
    /// Open a new dispatch log for an assignment.
    StartAlley { assignment_id: RecordId },
    EndAlley { id: RecordId },
    StartTrip { id: RecordId },
    EndTrip { id: RecordId },
}

/// # Errors
///
/// Returns an error if the token is missing or the API call fails.
pub async fn run_ping(api: &ApiClient) -> Result<(), CliError> {
    api.require_token()?;
    api.execute(&rest::list::<records::vehicle::Vehicle>()).await?;
    println!("ok");
    Ok(())
}

/// Fetch a whole collection and print one filtered page of it.
///
/// # Errors
///
/// Returns an error if the token is missing or the API call fails.
pub async fn run_list<R>(api: &ApiClient, args: &ListArgs, page_size: usize, matcher: &Matcher<R>) -> Result<(), CliError>
where
    R: Resource + Serialize,
{
    api.require_token()?;
    let items: Vec<R> = api.fetch(&rest::list::<R>()).await?;
    print_page(&items, args, page_size, matcher)
}

/// Get, create, update or delete one JSON-draft record.
///
/// # Errors
///
/// Returns an error if the token is missing, `--data` does not parse as the
/// resource's draft, or the API call fails.
pub async fn run_edit<R>(api: &ApiClient, command: EditCommand) -> Result<(), CliError>
where
    R: Editable + Serialize,
    R::Draft: DeserializeOwned,
{
    api.require_token()?;
    match command {
        EditCommand::Get { id } => print_json(&api.fetch::<R>(&rest::get::<R>(id)).await?),
        EditCommand::Create { data } => {
            let draft: R::Draft = serde_json::from_str(&data)?;
            let created: R = api.fetch(&rest::create::<R>(&draft)?).await?;
            tracing::info!(collection = R::COLLECTION, id = created.id(), "created");
            print_json(&created)
        }
        EditCommand::Update { id, data } => {
            let draft: R::Draft = serde_json::from_str(&data)?;
            let updated: R = api.fetch(&rest::update::<R>(id, &draft)?).await?;
            tracing::info!(collection = R::COLLECTION, id, "updated");
            print_json(&updated)
        }
        EditCommand::Delete { id } => delete::<R>(api, id).await,
    }
}

async fn delete<R: Resource>(api: &ApiClient, id: RecordId) -> Result<(), CliError> {
    api.execute(&rest::delete::<R>(id)).await?;
    tracing::info!(collection = R::COLLECTION, id, "deleted");
    print_json(&serde_json::json!({ "deleted": id }))
}

/// # Errors
///
/// Returns an error if the token is missing or the API call fails.
pub async fn run_assignment(api: &ApiClient, command: RecordCommand) -> Result<(), CliError> {
    match command {
        RecordCommand::List(args) => {
            api.require_token()?;
            let snapshot = Snapshot::fetch(api, Required::Assignments).await?;
            print_page(&snapshot.assignments, &args, DEFAULT_PAGE_SIZE, &lists::assignments())
        }
        RecordCommand::Edit(command) => run_edit::<records::assignment::VehicleAssignment>(api, command).await,
    }
}

/// # Errors
///
/// Returns an error if the token is missing or the API call fails.
pub async fn run_maintenance(api: &ApiClient, command: MaintenanceCommand) -> Result<(), CliError> {
    use records::maintenance::MaintenanceSchedule;

    match command {
        MaintenanceCommand::List(args) => run_list(api, &args, DEFAULT_PAGE_SIZE, &lists::maintenance()).await,
        MaintenanceCommand::Edit(command) => run_edit::<MaintenanceSchedule>(api, command).await,
        MaintenanceCommand::Toggle { id } => {
            api.require_token()?;
            let response = api.execute(&maintenance::toggle_status(id)).await?;
            tracing::info!(id, "maintenance status toggled");
            print_json(&response)
        }
    }
}

/// # Errors
///
/// Returns an error if the token is missing, an upload cannot be read, or
/// the API call fails.
pub async fn run_fuel_log(api: &ApiClient, command: FuelLogCommand) -> Result<(), CliError> {
    match command {
        FuelLogCommand::List(args) => run_list(api, &args, DEFAULT_PAGE_SIZE, &lists::fuel_logs()).await,
        FuelLogCommand::Get { id } => {
            api.require_token()?;
            print_json(&api.fetch::<FuelLog>(&rest::get::<FuelLog>(id)).await?)
        }
        FuelLogCommand::Create { data, uploads } => {
            api.require_token()?;
            let draft: FuelLogDraft = serde_json::from_str(&data)?;
            let (receipt, proof) = read_uploads(&uploads).await?;
            let created: FuelLog = api.fetch(&fuel_log::create(&draft, receipt.as_ref(), proof.as_ref())?).await?;
            tracing::info!(id = created.id, cost = %fuel_log::format_peso(created.fuel_cost), "fuel log created");
            print_json(&created)
        }
        FuelLogCommand::Update { id, data, uploads } => {
            api.require_token()?;
            let draft: FuelLogDraft = serde_json::from_str(&data)?;
            let (receipt, proof) = read_uploads(&uploads).await?;
            let updated: FuelLog = api.fetch(&fuel_log::update(id, &draft, receipt.as_ref(), proof.as_ref())?).await?;
            tracing::info!(id, "fuel log updated");
            print_json(&updated)
        }
        FuelLogCommand::Delete { id } => {
            api.require_token()?;
            delete::<FuelLog>(api, id).await
        }
    }
}

async fn read_uploads(args: &UploadArgs) -> Result<(Option<Upload>, Option<Upload>), CliError> {
    let receipt = match &args.receipt {
        Some(path) => Some(read_upload(path).await?),
        None => None,
    };
    let proof = match &args.odometer_proof {
        Some(path) => Some(read_upload(path).await?),
        None => None,
    };
    Ok((receipt, proof))
}

/// Load a file for a multipart field, named after its final path component.
///
/// # Errors
///
/// Returns [`CliError::ReadFile`] if the file cannot be read.
pub async fn read_upload(path: &Path) -> Result<Upload, CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })?;
    let file_name = path.file_name().map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(Upload { file_name, bytes })
}

/// Normalise and validate the flags of `feedback create`.
///
/// # Errors
///
/// Returns an error for a malformed phone number or an out-of-range rating.
pub fn feedback_draft(phone: &str, vehicle_id: RecordId, rating: u8, comment: &str) -> Result<FeedbackDraft, CliError> {
    let phone_number = checked_phone(phone)?;
    if !feedback::is_valid_rating(rating) {
        return Err(CliError::InvalidRating { min: MIN_RATING, max: MAX_RATING, got: rating });
    }
    Ok(FeedbackDraft { phone_number, vehicle_id, rating, comment: comment.trim().to_owned() })
}

fn checked_phone(raw: &str) -> Result<String, CliError> {
    feedback::normalize_phone(raw).ok_or_else(|| CliError::InvalidPhone(raw.to_owned()))
}

/// Feedback submission and OTP calls are public; listing is admin-only.
///
/// # Errors
///
/// Returns an error for invalid input or a failed API call.
pub async fn run_feedback(api: &ApiClient, command: FeedbackCommand) -> Result<(), CliError> {
    match command {
        FeedbackCommand::List(args) => run_list(api, &args, FEEDBACK_PAGE_SIZE, &lists::feedback()).await,
        FeedbackCommand::Get { id } => {
            api.require_token()?;
            print_json(&api.fetch::<FeedbackLog>(&rest::get::<FeedbackLog>(id)).await?)
        }
        FeedbackCommand::Create { phone, vehicle_id, rating, comment } => {
            let draft = feedback_draft(&phone, vehicle_id, rating, &comment)?;
            let created = api.execute(&feedback::create(&draft)?).await?;
            tracing::info!(vehicle_id, rating, "feedback submitted");
            print_json(&created)
        }
        FeedbackCommand::OtpGenerate { phone } => {
            let phone = checked_phone(&phone)?;
            api.execute(&feedback::generate_otp(&phone)?).await?;
            print_json(&serde_json::json!({ "phone_number": phone, "sent": true }))
        }
        FeedbackCommand::OtpVerify { phone, otp } => {
            let phone = checked_phone(&phone)?;
            let otp = otp.trim();
            if !feedback::is_valid_otp(otp) {
                return Err(CliError::InvalidOtp(OTP_LENGTH));
            }
            let result: OtpVerification = api.fetch(&feedback::verify_otp(&phone, otp)?).await?;
            print_json(&serde_json::json!({ "phone_number": phone, "verified": result.verified }))
        }
    }
}

/// Check that `action` is the next step for `log` before sending it.
///
/// # Errors
///
/// Returns [`CliError::InvalidTransition`] when the log is in another phase.
pub fn check_transition(log: &DispatchLog, action: DispatchAction) -> Result<(), CliError> {
    let phase = log.phase();
    if phase.next_action() == Some(action) {
        return Ok(());
    }
    Err(CliError::InvalidTransition { id: log.id, phase: phase.label(), attempted: action.label() })
}

/// Refuse a second open log for the same assignment.
///
/// # Errors
///
/// Returns [`CliError::DispatchOpen`] if the assignment already has one.
pub fn check_idle(logs: &[DispatchLog], assignment: RecordId) -> Result<(), CliError> {
    match dispatch::open_log_for(logs, assignment) {
        Some(open) => Err(CliError::DispatchOpen { assignment, log: open.id }),
        None => Ok(()),
    }
}

async fn transition(api: &ApiClient, id: RecordId, action: DispatchAction) -> Result<(), CliError> {
    let logs: Vec<DispatchLog> = api.fetch(&rest::list::<DispatchLog>()).await?;
    let log = logs.iter().find(|log| log.id == id).ok_or(CliError::UnknownDispatch(id))?;
    check_transition(log, action)?;
    let response = api.execute(&action.request(id)).await?;
    tracing::info!(id, action = action.label(), "dispatch updated");
    print_json(&response)
}

/// # Errors
///
/// Returns an error if the token is missing, the transition is not
/// available, or the API call fails.
pub async fn run_dispatch(api: &ApiClient, command: DispatchCommand) -> Result<(), CliError> {
    api.require_token()?;
    match command {
        DispatchCommand::List(args) => {
            let snapshot = Snapshot::fetch(api, Required::DispatchLogs).await?;
            print_page(&snapshot.dispatch_rows(), &args, DEFAULT_PAGE_SIZE, &lists::dispatch())
        }
        DispatchCommand::Delete { id } => delete::<DispatchLog>(api, id).await,
        DispatchCommand::StartAlley { assignment_id } => {
            let logs: Vec<DispatchLog> = api.fetch(&rest::list::<DispatchLog>()).await?;
            check_idle(&logs, assignment_id)?;
            let response = api.execute(&dispatch::start_alley(assignment_id)?).await?;
            tracing::info!(assignment_id, "alley started");
            print_json(&response)
        }
        DispatchCommand::EndAlley { id } => transition(api, id, DispatchAction::EndAlley).await,
        DispatchCommand::StartTrip { id } => transition(api, id, DispatchAction::StartTrip).await,
        DispatchCommand::EndTrip { id } => transition(api, id, DispatchAction::EndTrip).await,
    }
}

/// Assignments with crew names and any unfinished dispatch.
///
/// # Errors
///
/// Returns an error if the token is missing, assignments or dispatch logs
/// fail to load, or printing fails.
pub async fn run_overview(api: &ApiClient) -> Result<(), CliError> {
    api.require_token()?;
    let snapshot = Snapshot::fetch(api, Required::Both).await?;
    print_json(&snapshot.overview())
}

/// # Errors
///
/// Returns an error if the credentials are rejected.
pub async fn run_login(api: &ApiClient, username: &str, password: &str) -> Result<(), CliError> {
    let credentials = records::auth::Credentials { username: username.trim().to_owned(), password: password.to_owned() };
    let response: records::auth::LoginResponse = api.fetch(&records::auth::login(&credentials)?).await?;
    tracing::info!(username = %credentials.username, "signed in");
    println!("{}", response.token);
    Ok(())
}
