pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod translate;

pub use crate::config::Config;
pub use crate::routes::build_app;
pub use crate::state::AppState;
