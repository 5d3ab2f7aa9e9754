#![cfg(test)]
use std::io;
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use tracing::subscriber::DefaultGuard;

use models::enums::{CategoryStatus, PaymentMethod, ProductCategory};

use crate::category_service::CategoryInput;
use crate::client_service::ClientInput;
use crate::order_service::OrderInput;
use crate::registry::Services;

/// Fresh services over empty in-memory repositories.
pub fn services() -> Services {
    Services::in_memory()
}

pub fn category_input(description: &str) -> CategoryInput {
    CategoryInput {
        category: ProductCategory::Electronics,
        description: Some(description.to_string()),
        status: CategoryStatus::Active,
    }
}

pub fn client_input(email: &str) -> ClientInput {
    ClientInput { name: "Ana Garcia".into(), email: email.into(), phone: None, address: None }
}

pub fn order_input(client_id: i64) -> OrderInput {
    OrderInput {
        client_id,
        priority_id: None,
        order_date: None,
        delivery_date: None,
        status: Default::default(),
        total_amount: Decimal::new(19999, 2),
        payment_method: PaymentMethod::CreditCard,
        shipping_address: "Calle Mayor 1, Madrid".into(),
        tracking_number: None,
    }
}

/// Log lines written while the guard is alive, without ANSI codes.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Route this thread's events into a buffer; `#[tokio::test]` runs on the
/// current thread, so every service call in the test is captured.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
