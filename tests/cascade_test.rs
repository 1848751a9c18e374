use catalog_service::clients::ProductClient;
use catalog_service::framework::{mock::MockClient, FrameworkError};
use catalog_service::integrity::{CascadeCoordinator, CascadeError};
use catalog_service::model::{Product, SupplierId, SupplierPayload};
use catalog_service::product_actor::ProductError;
use catalog_service::supplier_actor::SupplierError;

fn payload() -> SupplierPayload {
    SupplierPayload {
        cuit: Some("30-71234567-1".to_string()),
        company_name: Some("Textiles Norte".to_string()),
        address: Some("Av. Siempre Viva 742".to_string()),
        phone: Some("555-0101".to_string()),
        email: Some("ventas@textilesnorte.com".to_string()),
    }
}

/// Real Supplier actor, mocked Product collection that fails the bulk delete.
/// The supplier must stay deleted and the caller must learn the cascade failed.
#[tokio::test]
async fn test_failed_cascade_keeps_supplier_deleted() {
    let (supplier_actor, supplier_client) = catalog_service::supplier_actor::new(8);
    let supplier_handle = tokio::spawn(supplier_actor.run(()));

    let supplier = supplier_client.create_supplier(payload()).await.unwrap();

    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_delete_where()
        .return_err(FrameworkError::ActorClosed);

    let cascade = CascadeCoordinator::new(
        supplier_client.clone(),
        ProductClient::new(product_mock.client()),
    );

    match cascade.delete_supplier(&supplier.id.to_string()).await {
        Err(CascadeError::CascadeFailed {
            supplier_id,
            source,
        }) => {
            assert_eq!(supplier_id, supplier.id);
            assert!(matches!(source, ProductError::StoreFailure(_)));
        }
        other => panic!("expected CascadeFailed, got {other:?}"),
    }

    let lookup = supplier_client.get_supplier(&supplier.id.to_string()).await;
    assert_eq!(lookup, Err(SupplierError::NotFound(supplier.id.to_string())));

    product_mock.verify();

    // Cleanup
    drop(cascade);
    drop(supplier_client);
    supplier_handle.await.unwrap();
}

#[tokio::test]
async fn test_cascade_reports_deleted_count() {
    let (supplier_actor, supplier_client) = catalog_service::supplier_actor::new(8);
    tokio::spawn(supplier_actor.run(()));
    let supplier = supplier_client.create_supplier(payload()).await.unwrap();

    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_delete_where().return_ok(3);

    let cascade = CascadeCoordinator::new(supplier_client, ProductClient::new(product_mock.client()));
    let removal = cascade
        .delete_supplier(&supplier.id.to_string())
        .await
        .unwrap();

    assert_eq!(removal.supplier, supplier);
    assert_eq!(removal.products.deleted_count, 3);
    product_mock.verify();
}

#[tokio::test]
async fn test_missing_supplier_skips_product_cleanup() {
    let (supplier_actor, supplier_client) = catalog_service::supplier_actor::new(8);
    tokio::spawn(supplier_actor.run(()));

    // No expectations: a bulk delete request would fail the test.
    let product_mock = MockClient::<Product>::new();
    let cascade = CascadeCoordinator::new(supplier_client, ProductClient::new(product_mock.client()));

    let unknown = SupplierId::generate().to_string();
    let result = cascade.delete_supplier(&unknown).await;
    assert!(matches!(
        result,
        Err(CascadeError::Supplier(SupplierError::NotFound(id))) if id == unknown
    ));

    let result = cascade.delete_supplier("12345").await;
    assert!(matches!(
        result,
        Err(CascadeError::Supplier(SupplierError::InvalidIdentifier(_)))
    ));

    product_mock.verify();
}
