//! SeaORM entities for the store: product categories, orders, clients and
//! priorities, plus the closed enumerations their columns hold and the field
//! validators shared by the service layer.

pub mod errors;
pub mod db;
pub mod enums;
pub mod category;
pub mod client;
pub mod priority;
pub mod order;

#[cfg(test)]
mod tests;
