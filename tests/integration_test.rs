use catalog_service::lifecycle::CatalogSystem;
use catalog_service::model::{ProductPayload, SupplierId, SupplierPayload};
use catalog_service::product_actor::ProductError;
use catalog_service::supplier_actor::SupplierError;
use std::collections::HashSet;
use tokio::task::JoinSet;

fn supplier_payload(company: &str) -> SupplierPayload {
    SupplierPayload {
        cuit: Some("30-71234567-1".to_string()),
        company_name: Some(company.to_string()),
        address: Some("Av. Siempre Viva 742".to_string()),
        phone: Some("555-0101".to_string()),
        email: None,
    }
}

fn product_payload(name: &str, supplier: SupplierId) -> ProductPayload {
    ProductPayload {
        name: Some(name.to_string()),
        description: None,
        image: Some(format!("https://img.example/{name}.png")),
        price: Some(10.0),
        stock: Some(5),
        quotas: None,
        id_supplier: Some(supplier.to_string()),
    }
}

/// Full end-to-end run with both real actors: create, filter, update,
/// cascade delete, then shut down.
#[tokio::test]
async fn test_full_catalog_integration() {
    let system = CatalogSystem::new(16);

    let north = system
        .supplier_client
        .create_supplier(supplier_payload("Textiles Norte"))
        .await
        .expect("Failed to create supplier");
    let south = system
        .supplier_client
        .create_supplier(supplier_payload("Textiles Sur"))
        .await
        .expect("Failed to create supplier");

    let shirt = system
        .product_client
        .create_product(product_payload("Red Shirt", north.id))
        .await
        .expect("Failed to create product");
    system
        .product_client
        .create_product(product_payload("Blue Shirt", north.id))
        .await
        .expect("Failed to create product");
    let hat = system
        .product_client
        .create_product(product_payload("Hat", south.id))
        .await
        .expect("Failed to create product");

    // Store order and name filter
    let names: Vec<String> = system
        .product_client
        .list_products(None)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Red Shirt", "Blue Shirt", "Hat"]);

    let shirts = system
        .product_client
        .list_products(Some("SHIRT"))
        .await
        .unwrap();
    assert_eq!(shirts.len(), 2);

    // Move the red shirt to the other supplier
    let moved = system
        .product_client
        .update_product(&shirt.id.to_string(), product_payload("Red Shirt", south.id))
        .await
        .unwrap();
    assert_eq!(moved.id_supplier, south.id);

    // Cascade: only the blue shirt references `north` now
    let cascade = system.cascade();
    let removal = cascade
        .delete_supplier(&north.id.to_string())
        .await
        .expect("Cascade delete failed");
    assert_eq!(removal.supplier.id, north.id);
    assert_eq!(removal.products.deleted_count, 1);

    // Every remaining product references an existing supplier
    let remaining = system.product_client.list_products(None).await.unwrap();
    let remaining_ids: HashSet<_> = remaining.iter().map(|p| p.id).collect();
    assert_eq!(remaining_ids, HashSet::from([shirt.id, hat.id]));
    for product in &remaining {
        system
            .supplier_client
            .get_supplier(&product.id_supplier.to_string())
            .await
            .expect("Product references a missing supplier");
    }

    // The deleted supplier can no longer be referenced
    let orphan = system
        .product_client
        .create_product(product_payload("Scarf", north.id))
        .await;
    assert_eq!(orphan, Err(ProductError::InvalidReference(north.id.to_string())));

    drop(cascade);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let system = CatalogSystem::new(4);
    let supplier = system
        .supplier_client
        .create_supplier(supplier_payload("Textiles Norte"))
        .await
        .unwrap();

    let mut tasks = JoinSet::new();
    for i in 0..50 {
        let client = system.product_client.clone();
        let payload = product_payload(&format!("Item {i}"), supplier.id);
        tasks.spawn(async move { client.create_product(payload).await });
    }

    let mut ids = HashSet::new();
    while let Some(joined) = tasks.join_next().await {
        let product = joined.unwrap().expect("Concurrent create failed");
        ids.insert(product.id);
    }
    assert_eq!(ids.len(), 50);
    assert_eq!(system.product_client.list_products(None).await.unwrap().len(), 50);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_deleting_supplier_without_products() {
    let system = CatalogSystem::new(8);
    let supplier = system
        .supplier_client
        .create_supplier(supplier_payload("Solo"))
        .await
        .unwrap();

    let cascade = system.cascade();
    let removal = cascade
        .delete_supplier(&supplier.id.to_string())
        .await
        .unwrap();
    assert_eq!(removal.products.deleted_count, 0);
    assert!(system.supplier_client.list_suppliers().await.unwrap().is_empty());

    drop(cascade);
    system.shutdown().await.expect("Shutdown failed");
}

/// Deleting a supplier makes both it and its product unreachable.
#[tokio::test]
async fn test_supplier_and_product_are_gone_after_cascade() {
    let system = CatalogSystem::new(8);

    let acme = system
        .supplier_client
        .create_supplier(SupplierPayload {
            cuit: Some("30-1-1".to_string()),
            company_name: Some("Acme".to_string()),
            address: Some("Main 1".to_string()),
            phone: Some("555".to_string()),
            email: None,
        })
        .await
        .unwrap();
    let widget = system
        .product_client
        .create_product(ProductPayload {
            name: Some("Widget".to_string()),
            description: None,
            image: Some("w.png".to_string()),
            price: Some(10.0),
            stock: Some(5),
            quotas: None,
            id_supplier: Some(acme.id.to_string()),
        })
        .await
        .unwrap();

    let cascade = system.cascade();
    cascade.delete_supplier(&acme.id.to_string()).await.unwrap();

    let supplier_lookup = system.supplier_client.get_supplier(&acme.id.to_string()).await;
    assert_eq!(
        supplier_lookup,
        Err(SupplierError::NotFound(acme.id.to_string()))
    );
    let product_lookup = system.product_client.get_product(&widget.id.to_string()).await;
    assert_eq!(
        product_lookup,
        Err(ProductError::NotFound(widget.id.to_string()))
    );

    drop(cascade);
    system.shutdown().await.expect("Shutdown failed");
}
