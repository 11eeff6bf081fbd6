use crate::state::AppState;
use axum::Router;

pub mod dto;
mod extractors;
pub mod handlers;
pub mod repo;
pub mod repo_types;

#[cfg(test)]
pub(crate) mod fake;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::employee_routes())
}
