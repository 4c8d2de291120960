pub mod application;
pub mod session;
pub mod sqlx_repo;
