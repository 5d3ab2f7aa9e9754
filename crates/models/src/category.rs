use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{CategoryStatus, ProductCategory};
use crate::errors::ModelError;

pub const DESCRIPTION_MAX: usize = 255;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categoria_producto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "categoria_producto")]
    pub category: ProductCategory,
    #[sea_orm(column_name = "descripcion_producto")]
    pub description: Option<String>,
    /// Set once, when the category is created.
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTimeWithTimeZone,
    /// Refreshed on every update.
    #[sea_orm(column_name = "fecha_modificacion")]
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "estado_categoria")]
    pub status: CategoryStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_description(description: Option<&str>) -> Result<(), ModelError> {
    match description {
        Some(d) if d.chars().count() > DESCRIPTION_MAX => {
            Err(ModelError::validation(format!("description must be at most {DESCRIPTION_MAX} characters")))
        }
        _ => Ok(()),
    }
}
