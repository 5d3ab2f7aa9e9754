use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}
