use anyhow::Result;
use chrono::{SubsecRound, Utc};
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, Set};
use tokio::sync::OnceCell;

use crate::db::connect;
use crate::enums::{CategoryStatus, OrderStatus, PaymentMethod, PriorityLevel, ProductCategory};
use crate::{category, client, order, priority};

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect and migrate once; `None` when no database is configured.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    let _ = dotenvy::dotenv();
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    MIGRATED
        .get_or_try_init(|| async { migration::Migrator::up(&db, None).await })
        .await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_category_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()); };

    let now = Utc::now().trunc_subsecs(6).fixed_offset();
    let created = category::ActiveModel {
        id: NotSet,
        category: Set(ProductCategory::Books),
        description: Set(Some("Novels".into())),
        created_at: Set(now),
        updated_at: Set(now),
        status: Set(CategoryStatus::Active),
    }
    .insert(&db)
    .await?;
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = category::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|c| c.category), Some(ProductCategory::Books));

    category::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(category::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_order_with_client_and_priority() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()); };

    let now = Utc::now().trunc_subsecs(6).fixed_offset();
    let c = client::ActiveModel {
        id: NotSet,
        name: Set("Order Tester".into()),
        email: Set(format!("order_{}@example.com", now.timestamp_micros())),
        phone: Set(None),
        address: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;
    let p = priority::ActiveModel { id: NotSet, level: Set(PriorityLevel::High), description: Set(None) }
        .insert(&db)
        .await?;

    let o = order::ActiveModel {
        id: NotSet,
        client_id: Set(c.id),
        priority_id: Set(Some(p.id)),
        order_date: Set(now),
        delivery_date: Set(None),
        status: Set(OrderStatus::Pending),
        total_amount: Set(Decimal::new(4550, 2)),
        payment_method: Set(PaymentMethod::Cash),
        shipping_address: Set("Calle Mayor 1".into()),
        updated_at: Set(now),
        tracking_number: Set(None),
    }
    .insert(&db)
    .await?;
    assert_eq!(o.total_amount, Decimal::new(4550, 2));

    let owner = o.find_related(client::Entity).one(&db).await?;
    assert_eq!(owner.map(|x| x.id), Some(c.id));

    order::Entity::delete_by_id(o.id).exec(&db).await?;
    priority::Entity::delete_by_id(p.id).exec(&db).await?;
    client::Entity::delete_by_id(c.id).exec(&db).await?;
    Ok(())
}
