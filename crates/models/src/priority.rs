use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::PriorityLevel;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prioridad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "nivel")]
    pub level: PriorityLevel,
    #[sea_orm(column_name = "descripcion")]
    pub description: Option<String>,
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

pub fn validate_description(description: Option<&str>) -> Result<(), ModelError> {
    crate::category::validate_description(description)
}
