use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Uniform envelope: `response` holds the entity, a list of entities, or null.
#[derive(ToSchema)]
pub struct EnvelopeDoc {
    #[schema(value_type = Object, nullable)]
    pub response: Option<String>,
    #[schema(example = 201)]
    pub code: u16,
    #[schema(example = "Category created successfully")]
    pub message: String,
}

#[derive(ToSchema)]
pub struct CategoryInputDoc {
    /// ELECTRONICS, CLOTHING, HOME, FOOD, BOOKS, TOYS, SPORTS, BEAUTY or OTHER
    #[schema(example = "ELECTRONICS")]
    pub category: String,
    pub description: Option<String>,
    /// ACTIVE (default) or INACTIVE
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct OrderInputDoc {
    pub client_id: i64,
    pub priority_id: Option<i64>,
    /// RFC 3339; defaults to now on create
    pub order_date: Option<String>,
    pub delivery_date: Option<String>,
    /// PENDING (default), PROCESSING, SHIPPED, DELIVERED or CANCELLED
    pub status: Option<String>,
    #[schema(example = "199.99")]
    pub total_amount: String,
    /// CREDIT_CARD, DEBIT_CARD, CASH, BANK_TRANSFER or PAYPAL
    pub payment_method: String,
    pub shipping_address: String,
    pub tracking_number: Option<String>,
}

#[derive(ToSchema)]
pub struct ClientInputDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(ToSchema)]
pub struct PriorityInputDoc {
    /// LOW, MEDIUM, HIGH or URGENT
    pub level: String,
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::create,
        crate::routes::categories::get,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::get,
        crate::routes::orders::update,
        crate::routes::orders::delete,
        crate::routes::clients::list,
        crate::routes::clients::create,
        crate::routes::clients::get,
        crate::routes::clients::update,
        crate::routes::clients::delete,
        crate::routes::priorities::list,
        crate::routes::priorities::create,
        crate::routes::priorities::get,
        crate::routes::priorities::update,
        crate::routes::priorities::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EnvelopeDoc,
            CategoryInputDoc,
            OrderInputDoc,
            ClientInputDoc,
            PriorityInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "orders"),
        (name = "clients"),
        (name = "priorities")
    )
)]
pub struct ApiDoc;
