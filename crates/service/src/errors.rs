use axum::http::StatusCode;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self { Self::NotFound(format!("{entity} {id} not found")) }

    /// HTTP status carried by the failure envelope.
    pub fn status_code(&self) -> StatusCode {
        use models::errors::ModelError;
        match self {
            Self::Validation(_) | Self::Model(ModelError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Db(_) | Self::Model(ModelError::Db(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Self::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return Self::Conflict(msg),
            _ => {}
        }
        match e {
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            other => Self::Db(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn taxonomy_maps_to_http_codes() {
        assert_eq!(ServiceError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::Model(ModelError::validation("x")).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::not_found("category", 3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServiceError::Conflict("dup".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(ServiceError::Db("down".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let model_db: ModelError = DbErr::Custom("pool closed".into()).into();
        assert_eq!(ServiceError::Model(model_db).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        assert_eq!(ServiceError::not_found("order", 42).to_string(), "order 42 not found");
    }

    #[test]
    fn db_errors_become_infrastructure_failures() {
        let e: ServiceError = DbErr::Custom("connection reset".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
        let e: ServiceError = DbErr::RecordNotFound("gone".into()).into();
        assert!(matches!(e, ServiceError::NotFound(_)));
    }
}
