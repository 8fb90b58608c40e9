mod store;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use portal::api::{ApiError, AuthClient, Payload, Resource};
use portal::claims::{self, Claims};
use portal::forms::{self, Credentials};
use portal::guard::{self, Authorization};
use portal::page::{self, PageOutcome, RedirectReason};
use portal::route::Route;
use portal::session::Session;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::store::{FileSessionStore, default_session_path};
use crate::transport::{ReqwestTransport, normalize_base_url};

const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid API URL: {0}")]
    InvalidApiUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{}", page::UNAUTHORIZED_ROLE)]
    UnauthorizedRole,
    #[error("{path}: {}", reason.message())]
    Refused { path: String, reason: RedirectReason },
    #[error("not logged in; run `portal-cli login` first")]
    NotLoggedIn,
    #[error("could not read password: {0}")]
    Prompt(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "VT DroneZone quote portal from the terminal")]
struct Cli {
    #[arg(long, env = "PORTAL_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "PORTAL_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the issued token.
    Login(CredentialArgs),
    /// Forget the stored token.
    Logout,
    /// Show the claims carried by the stored token.
    Whoami,
    /// Create an account; the username must be an email address.
    Register(CredentialArgs),
    Reset(ResetCommand),
    /// Fetch the admin dashboard message.
    Admin,
    /// Fetch the end-user dashboard data.
    User,
    /// Fetch the unauthenticated public endpoint.
    Public,
    /// Check whether the stored session may open a portal path.
    Guard { path: String },
}

#[derive(Args, Debug)]
struct CredentialArgs {
    username: String,

    /// Read from stdin when omitted.
    #[arg(long, env = "PORTAL_PASSWORD")]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct ResetCommand {
    #[command(subcommand)]
    command: ResetSubcommand,
}

#[derive(Subcommand, Debug)]
enum ResetSubcommand {
    /// Ask the backend for a password reset link.
    Request { username: String },
    /// Set a new password using the token from a reset link.
    Confirm {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: Option<String>,
    },
}

struct CliContext {
    session: Session,
    client: AuthClient<ReqwestTransport>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = normalize_base_url(&cli.api_url).ok_or_else(|| CliError::InvalidApiUrl(cli.api_url.clone()))?;
    let session_path = cli.session_file.unwrap_or_else(default_session_path);
    tracing::debug!(%base_url, session = %session_path.display(), "starting");

    let ctx = CliContext {
        session: Session::new(FileSessionStore::new(session_path)),
        client: AuthClient::new(ReqwestTransport::new(base_url)?),
    };

    match cli.command {
        Command::Login(args) => run_login(&ctx, args).await,
        Command::Logout => {
            page::logout(&ctx.session);
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&ctx),
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Reset(reset) => run_reset(&ctx, reset).await,
        Command::Admin => run_protected(&ctx, &Route::Admin, Resource::Admin).await,
        Command::User => run_protected(&ctx, &Route::User, Resource::User).await,
        Command::Public => {
            let payload = ctx.client.fetch_public().await?;
            print_payload(&payload)
        }
        Command::Guard { path } => {
            println!("{}", guard_report(&ctx.session, &path));
            Ok(())
        }
    }
}

async fn run_login(ctx: &CliContext, args: CredentialArgs) -> Result<(), CliError> {
    let password = password_or_prompt(args.password)?;
    let credentials = forms::validate_login(&args.username, &password).map_err(forms::rejected)?;
    let token = ctx.client.login(&credentials.identifier, &credentials.secret).await?;
    let landing = page::complete_login(&ctx.session, &token).map_err(|_| CliError::UnauthorizedRole)?;
    println!("logged in as {}; landing page {}", credentials.identifier, landing.path());
    Ok(())
}

fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    let token = ctx.session.read().ok_or(CliError::NotLoggedIn)?;
    let claims = claims::decode_claims(&token).unwrap_or_default();
    for line in describe_claims(&claims, now_secs()) {
        println!("{line}");
    }
    Ok(())
}

async fn run_register(ctx: &CliContext, args: CredentialArgs) -> Result<(), CliError> {
    let password = password_or_prompt(args.password)?;
    let credentials = registration_credentials(&args.username, &password)?;
    ctx.client.register(&credentials.identifier, &credentials.secret).await?;
    println!("Registration successful! You can now log in.");
    Ok(())
}

async fn run_reset(ctx: &CliContext, reset: ResetCommand) -> Result<(), CliError> {
    match reset.command {
        ResetSubcommand::Request { username } => {
            let identifier = forms::validate_reset_request(&username).map_err(forms::rejected)?;
            let reference = ctx.client.request_password_reset(&identifier).await?;
            if reference.is_empty() {
                println!("Password reset email sent. Check your inbox.");
            } else {
                println!("Password reset email sent. Reference: {reference}");
            }
        }
        ResetSubcommand::Confirm { token, password } => {
            let password = password_or_prompt(password)?;
            let (token, secret) =
                forms::validate_reset_confirm(Some(&token), &password).map_err(forms::rejected)?;
            ctx.client.confirm_password_reset(&token, &secret).await?;
            println!("Password reset successful. You can now log in.");
        }
    }
    Ok(())
}

/// Guard `route` against the stored session, then load `resource` once.
async fn run_protected(ctx: &CliContext, route: &Route, resource: Resource) -> Result<(), CliError> {
    if guard::evaluate_session(&ctx.session, route) == Authorization::RedirectToLogin {
        return Err(CliError::Refused { path: route.path(), reason: RedirectReason::refusal(&ctx.session) });
    }
    match page::load_protected(&ctx.session, &ctx.client, resource).await {
        PageOutcome::Render(payload) => print_payload(&payload),
        PageOutcome::InlineError(message) => Err(CliError::Api(ApiError::NetworkOrServer(message))),
        PageOutcome::Redirect { reason, .. } => Err(CliError::Refused { path: route.path(), reason }),
    }
}

fn registration_credentials(username: &str, password: &str) -> Result<Credentials, CliError> {
    forms::validate_registration(username, password).map_err(|message| CliError::Api(forms::rejected(message)))
}

/// One-line guard decision for an address-bar style `path`.
fn guard_report(session: &Session, path: &str) -> String {
    let route = Route::parse(path);
    match guard::evaluate_session(session, &route) {
        Authorization::Allow => format!("{}: allowed", route.path()),
        Authorization::RedirectToLogin => format!(
            "{}: redirect to {} ({})",
            route.path(),
            Route::Login.path(),
            RedirectReason::refusal(session).message()
        ),
    }
}

/// Human-readable summary of token claims, one line per fact.
fn describe_claims(claims: &Claims, now_secs: i64) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("username: {}", claims.username.as_deref().unwrap_or("(unknown)")));
    if let Some(user_id) = claims.user_id {
        lines.push(format!("user id: {user_id}"));
    }
    let roles = claims.role_set();
    if roles.is_empty() {
        lines.push("roles: (none)".to_owned());
    } else {
        let names = roles.iter().map(ToString::to_string).collect::<Vec<_>>();
        lines.push(format!("roles: {}", names.join(", ")));
    }
    match guard::landing_route(&roles) {
        Some(route) => lines.push(format!("landing page: {}", route.path())),
        None => lines.push(format!("landing page: none ({})", page::UNAUTHORIZED_ROLE)),
    }
    if claims.is_expired(now_secs) {
        lines.push("token: expired".to_owned());
    }
    lines
}

fn password_or_prompt(password: Option<String>) -> Result<String, CliError> {
    if let Some(password) = password {
        return Ok(password);
    }
    eprint!("password: ");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn print_payload(payload: &Payload) -> Result<(), CliError> {
    match payload.message() {
        Some(message) => println!("{message}"),
        None => print_json(&payload.0)?,
    }
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn now_secs() -> i64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_secs()).unwrap_or(0)
}
