mod api;
mod form;

use clap::{Args, Parser, Subcommand};
use records::draft::{Draft, DraftError, InspectionDraft, TripDraft, VehicleDraft};
use records::editor::{Editor, Submission};
use records::endpoint::{Endpoint, VehicleFilter};
use records::entity::{
    AssignVehicleRequest, Inspection, LoginRequest, LoginResponse, Notice, Record, Role, Trip, User, UserTrip, Vehicle,
};
use records::error::ApiError;
use records::session::{Session, SessionError};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set FLEET_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("expected key=value, got `{0}`")]
    BadAssignment(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("unknown role `{0}`; expected admin or employee")]
    UnknownRole(String),
    #[error("{0}")]
    Draft(#[from] DraftError),
    #[error("login failed: {0}")]
    Session(#[from] SessionError),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fleet-cli", about = "Fleet management API CLI")]
struct Cli {
    #[arg(long, env = "FLEET_BACKEND_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "FLEET_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the user and token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "admin")]
        role: String,
    },
    Vehicle(VehicleCommand),
    User(UserCommand),
    Trip(TripCommand),
    Inspection(InspectionCommand),
    /// Email every user whose vehicle is due for service.
    NotifyMaintenance,
}

/// Shared `--field key=value` list for add and update.
#[derive(Args, Debug)]
struct FieldArgs {
    #[arg(long = "field", short = 'f', value_name = "KEY=VALUE")]
    fields: Vec<String>,
}

#[derive(Args, Debug)]
struct VehicleCommand {
    #[command(subcommand)]
    command: VehicleSubcommand,
}

#[derive(Subcommand, Debug)]
enum VehicleSubcommand {
    List {
        #[arg(long, default_value = "")]
        make: String,
        #[arg(long, default_value = "")]
        model: String,
        #[arg(long, default_value = "")]
        licence_plate: String,
    },
    Add(FieldArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Delete {
        id: i64,
    },
    /// Vehicle assigned to the user with this email.
    Assigned {
        #[arg(long)]
        email: String,
    },
    /// Vehicles past their service interval.
    ServiceDue,
    /// List accepted `--field` keys.
    Fields,
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List,
    Get {
        id: i64,
    },
    Assign {
        #[arg(long)]
        email: String,
        #[arg(long)]
        vehicle_id: i64,
    },
}

#[derive(Args, Debug)]
struct TripCommand {
    #[command(subcommand)]
    command: TripSubcommand,
}

#[derive(Subcommand, Debug)]
enum TripSubcommand {
    List {
        #[arg(long)]
        user_id: Option<i64>,
    },
    Add(FieldArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Delete {
        id: i64,
    },
    Fields,
}

#[derive(Args, Debug)]
struct InspectionCommand {
    #[command(subcommand)]
    command: InspectionSubcommand,
}

#[derive(Subcommand, Debug)]
enum InspectionSubcommand {
    List,
    Get {
        id: i64,
    },
    Add(FieldArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Delete {
        id: i64,
    },
    Fields,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.base_url, cli.token);

    match cli.command {
        Command::Login { email, password, role } => run_login(&client, email, password, &role).await,
        Command::Vehicle(vehicle) => run_vehicle(&client, vehicle).await,
        Command::User(user) => run_user(&client, user).await,
        Command::Trip(trip) => run_trip(&client, trip).await,
        Command::Inspection(inspection) => run_inspection(&client, inspection).await,
        Command::NotifyMaintenance => {
            let notice: Notice = client.call(Endpoint::SendMaintenanceNotification, None).await?;
            println!("{}", notice.message);
            Ok(())
        }
    }
}

async fn run_login(client: &ApiClient, email: String, password: String, role: &str) -> Result<(), CliError> {
    let role = Role::parse(role).ok_or_else(|| CliError::UnknownRole(role.to_owned()))?;
    let body = serde_json::to_value(LoginRequest { email, password, role })?;
    let response: LoginResponse = client.call(Endpoint::Login, Some(body)).await?;
    let session = Session::from_response(response)?;
    print_json(&serde_json::json!({ "user": session.user, "token": session.token }))
}

async fn run_vehicle(client: &ApiClient, vehicle: VehicleCommand) -> Result<(), CliError> {
    match vehicle.command {
        VehicleSubcommand::List {
            make,
            model,
            licence_plate,
        } => {
            let filter = VehicleFilter {
                make,
                model,
                licence_plate,
            };
            let rows: Vec<Vehicle> = client.call(Endpoint::ListVehicles(filter), None).await?;
            print_records(&rows)
        }
        VehicleSubcommand::Add(args) => {
            let submission = create_submission::<VehicleDraft>(&args)?;
            save(client, &submission, Endpoint::AddVehicle, Endpoint::UpdateVehicle).await
        }
        VehicleSubcommand::Update { id, fields } => {
            let rows: Vec<Vehicle> = client
                .call(Endpoint::ListVehicles(VehicleFilter::default()), None)
                .await?;
            let row = find_row(rows, "vehicle", id)?;
            let submission = update_submission::<VehicleDraft>(&row, &fields)?;
            save(client, &submission, Endpoint::AddVehicle, Endpoint::UpdateVehicle).await
        }
        VehicleSubcommand::Delete { id } => {
            let json: Value = client.call(Endpoint::DeleteVehicle(id), None).await?;
            print_json(&json)
        }
        VehicleSubcommand::Assigned { email } => {
            let row: Vehicle = client.call(Endpoint::AssignedVehicle { email }, None).await?;
            print_records(&row)
        }
        VehicleSubcommand::ServiceDue => {
            let rows: Vec<Vehicle> = client.call(Endpoint::OutOfServiceVehicles, None).await?;
            print_records(&rows)
        }
        VehicleSubcommand::Fields => {
            println!("{}", form::field_keys::<VehicleDraft>().join("\n"));
            Ok(())
        }
    }
}

async fn run_user(client: &ApiClient, user: UserCommand) -> Result<(), CliError> {
    match user.command {
        UserSubcommand::List => {
            let rows: Vec<User> = client.call(Endpoint::ListUsers, None).await?;
            print_records(&rows)
        }
        UserSubcommand::Get { id } => {
            let row: User = client.call(Endpoint::GetUser(id), None).await?;
            print_records(&row)
        }
        UserSubcommand::Assign { email, vehicle_id } => {
            let body = serde_json::to_value(AssignVehicleRequest { email, vehicle_id })?;
            let json: Value = client.call(Endpoint::AssignVehicle, Some(body)).await?;
            print_json(&json)
        }
    }
}

async fn run_trip(client: &ApiClient, trip: TripCommand) -> Result<(), CliError> {
    match trip.command {
        TripSubcommand::List { user_id: Some(user_id) } => {
            let rows: Vec<UserTrip> = client.call(Endpoint::UserTrips(user_id), None).await?;
            let rows: Vec<Trip> = rows.iter().map(|row| row.to_trip(user_id)).collect();
            print_records(&rows)
        }
        TripSubcommand::List { user_id: None } => {
            let rows: Vec<Trip> = client.call(Endpoint::ListTrips, None).await?;
            print_records(&rows)
        }
        TripSubcommand::Add(args) => {
            let submission = create_submission::<TripDraft>(&args)?;
            save(client, &submission, Endpoint::AddTrip, Endpoint::UpdateTrip).await
        }
        TripSubcommand::Update { id, fields } => {
            let rows: Vec<Trip> = client.call(Endpoint::ListTrips, None).await?;
            let row = find_row(rows, "trip", id)?;
            let submission = update_submission::<TripDraft>(&row, &fields)?;
            save(client, &submission, Endpoint::AddTrip, Endpoint::UpdateTrip).await
        }
        TripSubcommand::Delete { id } => {
            let json: Value = client.call(Endpoint::DeleteTrip(id), None).await?;
            print_json(&json)
        }
        TripSubcommand::Fields => {
            println!("{}", form::field_keys::<TripDraft>().join("\n"));
            Ok(())
        }
    }
}

async fn run_inspection(client: &ApiClient, inspection: InspectionCommand) -> Result<(), CliError> {
    match inspection.command {
        InspectionSubcommand::List => {
            let rows: Vec<Inspection> = client.call(Endpoint::ListInspections, None).await?;
            print_records(&rows)
        }
        InspectionSubcommand::Get { id } => {
            let row: Inspection = client.call(Endpoint::GetInspection(id), None).await?;
            print_records(&row)
        }
        InspectionSubcommand::Add(args) => {
            let submission = create_submission::<InspectionDraft>(&args)?;
            save(client, &submission, Endpoint::AddInspection, Endpoint::UpdateInspection).await
        }
        InspectionSubcommand::Update { id, fields } => {
            let row: Inspection = client.call(Endpoint::GetInspection(id), None).await?;
            let submission = update_submission::<InspectionDraft>(&row, &fields)?;
            save(client, &submission, Endpoint::AddInspection, Endpoint::UpdateInspection).await
        }
        InspectionSubcommand::Delete { id } => {
            let json: Value = client.call(Endpoint::DeleteInspection(id), None).await?;
            print_json(&json)
        }
        InspectionSubcommand::Fields => {
            println!("{}", form::field_keys::<InspectionDraft>().join("\n"));
            Ok(())
        }
    }
}

fn create_submission<D: Draft + Default>(args: &FieldArgs) -> Result<Submission<D::Payload>, CliError> {
    let mut editor = Editor::<D>::default();
    editor.open_create();
    form::fill(&mut editor, &args.fields)
}

fn update_submission<D: Draft + Default>(row: &D::Record, args: &FieldArgs) -> Result<Submission<D::Payload>, CliError> {
    let mut editor = Editor::<D>::default();
    editor.open_edit(row);
    form::fill(&mut editor, &args.fields)
}

fn find_row<R: Record>(rows: Vec<R>, kind: &'static str, id: i64) -> Result<R, CliError> {
    rows.into_iter()
        .find(|row| row.record_id() == id)
        .ok_or(CliError::NotFound { kind, id })
}

async fn save<P: Serialize>(
    client: &ApiClient,
    submission: &Submission<P>,
    create: Endpoint,
    update: fn(i64) -> Endpoint,
) -> Result<(), CliError> {
    let (endpoint, payload) = match submission {
        Submission::Create(payload) => (create, payload),
        Submission::Update { id, payload } => (update(*id), payload),
    };
    let body = serde_json::to_value(payload)?;
    let json: Value = client.call(endpoint, Some(body)).await?;
    print_json(&json)
}

fn print_records<T: Serialize + ?Sized>(rows: &T) -> Result<(), CliError> {
    print_json(&serde_json::to_value(rows)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
