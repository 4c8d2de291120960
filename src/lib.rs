use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, cors, db, utils};

use auth::jwt::JwtService;
use repositories::{
    application::DynApplicationRepo, session::SessionResolver, sqlx_repo::SqlxApplicationRepo,
};
use use_cases::applications::ApplicationHandler;

pub type AppApplicationHandler = ApplicationHandler<DynApplicationRepo>;

pub struct AppState {
    pub application_handler: AppApplicationHandler,
    pub session_resolver: Arc<dyn SessionResolver>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let application_repo: DynApplicationRepo = Arc::new(SqlxApplicationRepo::new(pool));
        let session_resolver: Arc<dyn SessionResolver> = Arc::new(JwtService::new(config));

        AppState::from_parts(application_repo, session_resolver)
    }

    /// Wires the state from already-built collaborators, e.g. a substitute
    /// store in tests.
    pub fn from_parts(
        application_repo: DynApplicationRepo,
        session_resolver: Arc<dyn SessionResolver>,
    ) -> Self {
        AppState {
            application_handler: ApplicationHandler::new(application_repo),
            session_resolver,
        }
    }
}
