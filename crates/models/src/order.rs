use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, PaymentMethod};
use crate::errors::ModelError;
use crate::{client, priority};

pub const SHIPPING_ADDRESS_MAX: usize = 255;
pub const TRACKING_NUMBER_MAX: usize = 64;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pedido")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "cliente_id")]
    pub client_id: i64,
    #[sea_orm(column_name = "prioridad_id")]
    pub priority_id: Option<i64>,
    #[sea_orm(column_name = "fecha_pedido")]
    pub order_date: DateTimeWithTimeZone,
    /// Estimated delivery.
    #[sea_orm(column_name = "fecha_entrega")]
    pub delivery_date: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_name = "estado_pedido")]
    pub status: OrderStatus,
    #[sea_orm(column_name = "monto_total", column_type = "Decimal(Some((12, 2)))")]
    pub total_amount: Decimal,
    #[sea_orm(column_name = "metodo_pago")]
    pub payment_method: PaymentMethod,
    #[sea_orm(column_name = "direccion_envio")]
    pub shipping_address: String,
    #[sea_orm(column_name = "fecha_modificacion")]
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "numero_seguimiento")]
    pub tracking_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
    Priority,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::Id)
                .into(),
            Relation::Priority => Entity::belongs_to(priority::Entity)
                .from(Column::PriorityId)
                .to(priority::Column::Id)
                .into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl Related<priority::Entity> for Entity {
    fn to() -> RelationDef { Relation::Priority.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_total_amount(amount: Decimal) -> Result<(), ModelError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ModelError::validation("total_amount must not be negative"));
    }
    if amount.scale() > 2 {
        return Err(ModelError::validation("total_amount supports at most 2 decimal places"));
    }
    Ok(())
}

pub fn validate_shipping_address(address: &str) -> Result<(), ModelError> {
    let trimmed = address.trim();
    if trimmed.is_empty() { return Err(ModelError::validation("shipping_address required")); }
    if trimmed.chars().count() > SHIPPING_ADDRESS_MAX {
        return Err(ModelError::validation(format!("shipping_address must be at most {SHIPPING_ADDRESS_MAX} characters")));
    }
    Ok(())
}

pub fn validate_tracking_number(tracking: Option<&str>) -> Result<(), ModelError> {
    match tracking {
        Some(t) if t.trim().is_empty() => Err(ModelError::validation("tracking_number must not be blank")),
        Some(t) if t.chars().count() > TRACKING_NUMBER_MAX => {
            Err(ModelError::validation(format!("tracking_number must be at most {TRACKING_NUMBER_MAX} characters")))
        }
        _ => Ok(()),
    }
}

/// Estimated delivery cannot precede the order date.
pub fn validate_delivery_window(order_date: DateTimeWithTimeZone, delivery_date: Option<DateTimeWithTimeZone>) -> Result<(), ModelError> {
    if let Some(d) = delivery_date {
        if d < order_date {
            return Err(ModelError::validation("delivery_date must not be before order_date"));
        }
    }
    Ok(())
}
