use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const PHONE_MAX: usize = 32;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    pub email: String,
    #[sea_orm(column_name = "telefono")]
    pub phone: Option<String>,
    #[sea_orm(column_name = "direccion")]
    pub address: Option<String>,
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "fecha_modificacion")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Order,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Order => Entity::has_many(crate::order::Entity).into() }
    }
}

impl Related<crate::order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() { return Err(ModelError::validation("name required")); }
    if trimmed.chars().count() > 128 { return Err(ModelError::validation("name must be at most 128 characters")); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ModelError::validation("invalid email"));
    };
    if local.is_empty() || domain.is_empty() || email.len() > 255 {
        return Err(ModelError::validation("invalid email"));
    }
    Ok(())
}

pub fn validate_phone(phone: Option<&str>) -> Result<(), ModelError> {
    if let Some(p) = phone {
        if p.chars().count() > PHONE_MAX {
            return Err(ModelError::validation(format!("phone must be at most {PHONE_MAX} characters")));
        }
    }
    Ok(())
}

pub fn validate_address(address: Option<&str>) -> Result<(), ModelError> {
    if let Some(a) = address {
        if a.chars().count() > 255 { return Err(ModelError::validation("address must be at most 255 characters")); }
    }
    Ok(())
}
