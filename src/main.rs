pub mod modules;
pub use modules::auth;
pub use modules::email;
pub use modules::location;
pub mod api;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::account_query_postgres::AccountQueryPostgres;
use crate::auth::adapter::outgoing::account_repository_postgres::AccountRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher, OsRngOtpGenerator};
use crate::auth::adapter::outgoing::system_clock::SystemClock;
use crate::auth::application::helpers::access_resolver::AccessResolver;
use crate::auth::application::orchestrator::account_registration::AccountRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{Clock, OtpGenerator, TokenProvider};
use crate::auth::application::services::account_lifecycle::{
    LoginAccountService, RegisterAccountService, ResendOtpService, VerifyOtpService,
};
use crate::auth::application::services::hash::PasswordHashingService;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::user_profile::{
    CompleteProfileService, FetchProfileService, UpdateProfileService,
};
use crate::auth::application::use_cases::{
    complete_profile::CompleteProfileUseCase, fetch_profile::FetchProfileUseCase,
    login_account::LoginAccountUseCase, update_profile::UpdateProfileUseCase,
    verify_otp::VerifyOtpUseCase,
};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::services::OtpEmailService;
use crate::location::adapter::outgoing::location_query_postgres::LocationQueryPostgres;
use crate::location::application::services::ListRegionsService;
use crate::location::application::use_cases::list_regions::ListRegionsUseCase;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const PLATFORM_NAME: &str = "Medical Platform";

#[derive(Clone)]
pub struct AppState {
    pub account_registration: Arc<AccountRegistrationOrchestrator>,
    pub verify_otp_use_case: Arc<dyn VerifyOtpUseCase + Send + Sync>,
    pub login_account_use_case: Arc<dyn LoginAccountUseCase + Send + Sync>,
    pub complete_profile_use_case: Arc<dyn CompleteProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub list_regions_use_case: Arc<dyn ListRegionsUseCase + Send + Sync>,
    pub access_resolver: AccessResolver,
}

fn config_error(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg.into())
}

fn required_env(key: &str) -> io::Result<String> {
    env::var(key).map_err(|_| config_error(format!("{key} is not set")))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let run_migrations = env::var("RUN_MIGRATIONS")
        .map(|v| v != "false" && v != "0")
        .unwrap_or(true);

    let jwt_config = JwtConfig::from_env().map_err(|e| config_error(e.to_string()))?;
    let argon2_hasher = Argon2Hasher::from_env().map_err(|e| config_error(e.to_string()))?;

    // SMTP SETUPS
    let from_email = required_env("EMAIL_FROM")?;
    let smtp_sender = if rust_env == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .map_err(|_| config_error("SMTP_PORT must be a port number"))?;

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = required_env("SMTP_SERVER")?;
        let smtp_user = required_env("SMTP_USERNAME")?;
        let smtp_pass = required_env("SMTP_PASSWORD")?;

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .map_err(|e| config_error(e.to_string()))?
    };

    let server_url = format!("{host}:{port}");
    info!(environment = %rust_env, "Server binding to {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| io::Error::other(format!("Failed to connect to database: {e}")))?;

    if run_migrations {
        Migrator::up(&conn, None)
            .await
            .map_err(|e| io::Error::other(format!("Failed to apply migrations: {e}")))?;
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let location_query = LocationQueryPostgres::new(Arc::clone(&db_arc));

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let otp_generator: Arc<dyn OtpGenerator + Send + Sync> = Arc::new(OsRngOtpGenerator);
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let password_hashing =
        PasswordHashingService::new(Arc::new(argon2_hasher), Arc::new(BcryptHasher::new()));

    // Account lifecycle
    let register_account = RegisterAccountService::new(
        account_query.clone(),
        account_repo.clone(),
        password_hashing.clone(),
        Arc::new(BasicPasswordPolicy),
        Arc::clone(&otp_generator),
        Arc::clone(&clock),
    );
    let resend_otp = ResendOtpService::new(
        account_query.clone(),
        account_repo.clone(),
        Arc::clone(&otp_generator),
        Arc::clone(&clock),
    );
    let verify_otp = VerifyOtpService::new(
        account_query.clone(),
        account_repo.clone(),
        Arc::clone(&token_provider),
        Arc::clone(&clock),
    );
    let login_account = LoginAccountService::new(
        account_query.clone(),
        password_hashing,
        Arc::clone(&token_provider),
    );

    let otp_notifier = OtpEmailService::new(Arc::new(smtp_sender), PLATFORM_NAME);
    let account_registration = AccountRegistrationOrchestrator::new(
        Arc::new(register_account),
        Arc::new(resend_otp),
        Arc::new(otp_notifier),
    );

    // Profile
    let complete_profile = CompleteProfileService::new(
        account_repo.clone(),
        Arc::clone(&token_provider),
        Arc::new(location_query.clone()),
    );
    let update_profile = UpdateProfileService::new(account_repo);
    let fetch_profile = FetchProfileService::new(account_query.clone());

    // Location
    let list_regions = ListRegionsService::new(location_query);

    let access_resolver = AccessResolver::new(token_provider, Arc::new(account_query));

    let state = AppState {
        account_registration: Arc::new(account_registration),
        verify_otp_use_case: Arc::new(verify_otp),
        login_account_use_case: Arc::new(login_account),
        complete_profile_use_case: Arc::new(complete_profile),
        update_profile_use_case: Arc::new(update_profile),
        fetch_profile_use_case: Arc::new(fetch_profile),
        list_regions_use_case: Arc::new(list_regions),
        access_resolver,
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_otp_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::resend_otp_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::complete_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    // Location
    cfg.service(crate::location::adapter::incoming::web::routes::list_countries_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::list_states_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::list_cities_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::list_districts_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
