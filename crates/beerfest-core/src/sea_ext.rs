//! Helpers for classifying `sea-orm` errors at repository boundaries.

use sea_orm::{DbErr, SqlErr};

pub trait DbErrExt {
    /// Insert or update hit a unique index or primary key.
    fn is_unique_violation(&self) -> bool;

    /// Database message for a write that referenced a missing row. It names
    /// the violated constraint.
    fn foreign_key_violation(&self) -> Option<String>;
}

impl DbErrExt for DbErr {
    fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    fn foreign_key_violation(&self) -> Option<String> {
        match self.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => Some(message),
            _ => None,
        }
    }
}
