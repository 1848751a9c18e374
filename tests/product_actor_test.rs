use catalog_service::clients::SupplierClient;
use catalog_service::framework::{mock::MockClient, FrameworkError};
use catalog_service::integrity::IntegrityCoordinator;
use catalog_service::model::{ProductId, ProductPayload, Supplier, SupplierDraft, SupplierId};
use catalog_service::product_actor::ProductError;
use std::sync::Arc;

fn supplier(id: SupplierId) -> Supplier {
    Supplier::new(
        id,
        SupplierDraft {
            cuit: "30-71234567-1".to_string(),
            company_name: "Textiles Norte".to_string(),
            address: "Av. Siempre Viva 742".to_string(),
            phone: "555-0101".to_string(),
            email: None,
        },
    )
}

fn payload(id_supplier: &str) -> ProductPayload {
    ProductPayload {
        name: Some("Red Shirt".to_string()),
        description: None,
        image: Some("https://img.example/red-shirt.png".to_string()),
        price: Some(24.99),
        stock: Some(12),
        quotas: None,
        id_supplier: Some(id_supplier.to_string()),
    }
}

/// Real Product actor with a mocked Supplier collection behind the
/// integrity coordinator. Exercises the reference checks in
/// `Product::on_create` / `Product::before_update` in isolation.
///
/// Pattern 2: Actor + Mocks
/// - Real Product actor (tests hook logic)
/// - Mocked Supplier client (isolates the dependency)
#[tokio::test]
async fn test_product_actor_with_mocked_supplier_store() {
    let supplier_id = SupplierId::generate();

    // Product::on_create resolves the supplier exactly once
    let mut supplier_mock = MockClient::<Supplier>::new();
    supplier_mock
        .expect_get(supplier_id)
        .return_ok(Some(supplier(supplier_id)));

    let resolver: Arc<dyn IntegrityCoordinator> =
        Arc::new(SupplierClient::new(supplier_mock.client()));
    let (product_actor, product_client) = catalog_service::product_actor::new(8);
    let actor_handle = tokio::spawn(product_actor.run(resolver));

    let product = product_client
        .create_product(payload(&supplier_id.to_string()))
        .await
        .expect("create should succeed");
    assert_eq!(product.id_supplier, supplier_id);
    assert_eq!(product.quotas, 1);

    let fetched = product_client
        .get_product(&product.id.to_string())
        .await
        .unwrap();
    assert_eq!(fetched, product);

    supplier_mock.verify();

    // Cleanup
    drop(product_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_supplier_is_rejected_and_nothing_is_stored() {
    let missing = SupplierId::generate();

    let mut supplier_mock = MockClient::<Supplier>::new();
    supplier_mock.expect_get(missing).return_ok(None);

    let (product_actor, product_client) = catalog_service::product_actor::new(8);
    tokio::spawn(product_actor.run(Arc::new(SupplierClient::new(supplier_mock.client()))));

    let result = product_client
        .create_product(payload(&missing.to_string()))
        .await;
    assert_eq!(result, Err(ProductError::InvalidReference(missing.to_string())));
    assert!(product_client.list_products(None).await.unwrap().is_empty());

    supplier_mock.verify();
}

#[tokio::test]
async fn test_malformed_supplier_reference_never_queries_suppliers() {
    // No expectations: any request to the supplier mock would fail the test.
    let supplier_mock = MockClient::<Supplier>::new();

    let (product_actor, product_client) = catalog_service::product_actor::new(8);
    tokio::spawn(product_actor.run(Arc::new(SupplierClient::new(supplier_mock.client()))));

    let result = product_client.create_product(payload("not-an-id")).await;
    assert_eq!(result, Err(ProductError::InvalidReference("not-an-id".to_string())));

    supplier_mock.verify();
}

#[tokio::test]
async fn test_supplier_store_failure_surfaces_as_store_failure() {
    let supplier_id = SupplierId::generate();

    let mut supplier_mock = MockClient::<Supplier>::new();
    supplier_mock
        .expect_get(supplier_id)
        .return_err(FrameworkError::ActorClosed);

    let (product_actor, product_client) = catalog_service::product_actor::new(8);
    tokio::spawn(product_actor.run(Arc::new(SupplierClient::new(supplier_mock.client()))));

    let result = product_client
        .create_product(payload(&supplier_id.to_string()))
        .await;
    assert!(matches!(result, Err(ProductError::StoreFailure(_))), "{result:?}");
    assert!(product_client.list_products(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_update_leaves_product_unchanged() {
    let supplier_id = SupplierId::generate();
    let gone = SupplierId::generate();

    let mut supplier_mock = MockClient::<Supplier>::new();
    supplier_mock
        .expect_get(supplier_id)
        .return_ok(Some(supplier(supplier_id)));
    supplier_mock.expect_get(gone).return_ok(None);

    let (product_actor, product_client) = catalog_service::product_actor::new(8);
    tokio::spawn(product_actor.run(Arc::new(SupplierClient::new(supplier_mock.client()))));

    let original = product_client
        .create_product(payload(&supplier_id.to_string()))
        .await
        .unwrap();

    let mut change = payload(&gone.to_string());
    change.name = Some("Renamed".to_string());
    let result = product_client
        .update_product(&original.id.to_string(), change)
        .await;
    assert_eq!(result, Err(ProductError::InvalidReference(gone.to_string())));

    let stored = product_client
        .get_product(&original.id.to_string())
        .await
        .unwrap();
    assert_eq!(stored, original);

    supplier_mock.verify();
}

#[tokio::test]
async fn test_update_reports_bad_reference_before_missing_product() {
    let gone = SupplierId::generate();
    let known = SupplierId::generate();
    let unknown_product = ProductId::generate().to_string();

    let mut supplier_mock = MockClient::<Supplier>::new();
    supplier_mock.expect_get(gone).return_ok(None);
    supplier_mock.expect_get(known).return_ok(Some(supplier(known)));

    let (product_actor, product_client) = catalog_service::product_actor::new(8);
    tokio::spawn(product_actor.run(Arc::new(SupplierClient::new(supplier_mock.client()))));

    // Neither the product nor the supplier exists: the reference wins.
    let result = product_client
        .update_product(&unknown_product, payload(&gone.to_string()))
        .await;
    assert_eq!(result, Err(ProductError::InvalidReference(gone.to_string())));

    // Valid reference, unknown product.
    let result = product_client
        .update_product(&unknown_product, payload(&known.to_string()))
        .await;
    assert!(matches!(result, Err(ProductError::NotFound(_))), "{result:?}");

    supplier_mock.verify();
}
