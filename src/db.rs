use anyhow::Context;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use thiserror::Error;

use crate::config::DatabaseConfig;

const MAX_CONNECTIONS: u32 = 10;

const UNIQUE_VIOLATION: &str = "23505";
const NOT_NULL_VIOLATION: &str = "23502";

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .database(&cfg.name)
        .username(&cfg.user)
        .password(&cfg.password);

    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .context("connect to database")
}

/// Store failures, classified once so callers never look at driver error codes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,

    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("required column is null")]
    RequiredFieldMissing,

    #[error(transparent)]
    Other(sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConstraintKind {
    Unique,
    NotNull,
}

fn constraint_kind(sqlstate: &str) -> Option<ConstraintKind> {
    match sqlstate {
        UNIQUE_VIOLATION => Some(ConstraintKind::Unique),
        NOT_NULL_VIOLATION => Some(ConstraintKind::NotNull),
        _ => None,
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::RowNotFound => return StoreError::NotFound,
            sqlx::Error::Database(db_err) => db_err.code().and_then(|c| constraint_kind(&c)),
            _ => None,
        };
        match kind {
            Some(ConstraintKind::Unique) => StoreError::UniqueViolation,
            Some(ConstraintKind::NotNull) => StoreError::RequiredFieldMissing,
            None => StoreError::Other(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_constraint_sqlstates() {
        assert_eq!(constraint_kind("23505"), Some(ConstraintKind::Unique));
        assert_eq!(constraint_kind("23502"), Some(ConstraintKind::NotNull));
        // foreign key and check violations are not part of the taxonomy
        assert_eq!(constraint_kind("23503"), None);
        assert_eq!(constraint_kind("23514"), None);
        assert_eq!(constraint_kind("42P01"), None);
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::NotFound
        ));
    }

    #[test]
    fn pool_errors_stay_opaque() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Other(_)
        ));
    }
}
