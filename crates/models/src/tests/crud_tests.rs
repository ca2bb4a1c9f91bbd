use super::setup_test_db;
use crate::{client, clinic_service, invoice, product};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait};
use anyhow::Result;

/// Test client insert/update/delete through the generated active models
#[tokio::test]
async fn test_client_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = client::ClientFields::new("Ana Lopez", "555 0101", "Calle 5")
        .into_active_model()
        .insert(&db)
        .await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Ana Lopez");

    let mut am: client::ActiveModel = created.clone().into();
    am.phone = sea_orm::Set("555 0202".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.phone, "555 0202");

    client::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(client::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Products and services share the same shape but live in separate tables
#[tokio::test]
async fn test_product_and_service_tables_are_independent() -> Result<()> {
    let db = setup_test_db().await?;

    product::ProductFields::new("Dog food", 12.5).into_active_model().insert(&db).await?;
    clinic_service::ServiceFields::new("Vaccination", 30.0).into_active_model().insert(&db).await?;
    clinic_service::ServiceFields::new("Consultation", 20.0).into_active_model().insert(&db).await?;

    assert_eq!(product::Entity::find().count(&db).await?, 1);
    assert_eq!(clinic_service::Entity::find().count(&db).await?, 2);

    let food = product::Entity::find().one(&db).await?.expect("product row");
    assert_eq!(food.price, 12.5);
    Ok(())
}

/// Invoices resolve their client and disappear with it
#[tokio::test]
async fn test_invoice_belongs_to_client() -> Result<()> {
    let db = setup_test_db().await?;

    let owner = client::ClientFields::new("Luis", "555", "Main St").into_active_model().insert(&db).await?;
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    let inv = invoice::InvoiceFields::new(owner.id, date, 80.0).into_active_model().insert(&db).await?;
    assert_eq!(inv.date, date);

    let related = inv.find_related(client::Entity).one(&db).await?.expect("owner");
    assert_eq!(related.id, owner.id);

    let invoices = owner.find_related(invoice::Entity).all(&db).await?;
    assert_eq!(invoices.len(), 1);

    client::Entity::delete_by_id(owner.id).exec(&db).await?;
    assert_eq!(invoice::Entity::find().count(&db).await?, 0);
    Ok(())
}
