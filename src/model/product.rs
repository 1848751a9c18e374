use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{missing_fields, present, FieldError};
use super::{ProductId, SupplierId};

/// Installment count given to products created without one.
pub const DEFAULT_QUOTAS: u32 = 1;

/// A product record. `id_supplier` always names a supplier that existed when
/// the record was last written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub price: f64,
    pub stock: u32,
    pub quotas: u32,
    pub id_supplier: SupplierId,
}

impl Product {
    pub fn new(id: ProductId, draft: ProductDraft, id_supplier: SupplierId) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            image: draft.image,
            price: draft.price,
            stock: draft.stock,
            quotas: draft.quotas.unwrap_or(DEFAULT_QUOTAS),
            id_supplier,
        }
    }

    /// Full-record replacement. `quotas` and `description` keep their stored
    /// values when the draft leaves them out.
    pub fn apply(&mut self, draft: ProductDraft, id_supplier: SupplierId) {
        self.name = draft.name;
        self.image = draft.image;
        self.price = draft.price;
        self.stock = draft.stock;
        self.id_supplier = id_supplier;
        if let Some(quotas) = draft.quotas {
            self.quotas = quotas;
        }
        if draft.description.is_some() {
            self.description = draft.description;
        }
    }
}

/// Product attributes as they arrive in a request body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(required)]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub image: Option<String>,
    #[validate(required)]
    pub price: Option<f64>,
    #[validate(required)]
    pub stock: Option<u32>,
    pub quotas: Option<u32>,
    #[validate(required)]
    pub id_supplier: Option<String>,
}

const REQUIRED: [(&str, &str); 5] = [
    ("name", "name"),
    ("image", "image"),
    ("price", "price"),
    ("stock", "stock"),
    ("id_supplier", "idSupplier"),
];

/// A product payload whose required attributes are all present.
///
/// The supplier reference is still raw text here; the product store resolves
/// it before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub price: f64,
    pub stock: u32,
    pub quotas: Option<u32>,
    pub id_supplier: String,
}

impl ProductPayload {
    pub fn into_draft(self) -> Result<ProductDraft, FieldError> {
        let checked = Self {
            name: present(self.name),
            description: present(self.description),
            image: present(self.image),
            id_supplier: present(self.id_supplier),
            ..self
        };
        if let Err(errors) = checked.validate() {
            return Err(FieldError::Missing {
                entity: "product",
                missing: missing_fields(&REQUIRED, &errors),
            });
        }

        // `required` has passed, so every default below is unused.
        Ok(ProductDraft {
            name: checked.name.unwrap_or_default(),
            description: checked.description,
            image: checked.image.unwrap_or_default(),
            price: checked.price.unwrap_or_default(),
            stock: checked.stock.unwrap_or_default(),
            quotas: checked.quotas,
            id_supplier: checked.id_supplier.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: Some("Red Shirt".into()),
            description: None,
            image: Some("https://img.example/shirt.png".into()),
            price: Some(19.5),
            stock: Some(3),
            quotas: None,
            id_supplier: Some("507f1f77bcf86cd799439011".into()),
        }
    }

    #[test]
    fn test_missing_fields_are_reported_by_wire_name() {
        let mut body = payload();
        body.price = None;
        body.id_supplier = Some(" ".into());

        assert_eq!(
            body.into_draft(),
            Err(FieldError::Missing {
                entity: "product",
                missing: vec!["price", "idSupplier"],
            })
        );
    }

    #[test]
    fn test_all_missing_fields_are_listed() {
        assert_eq!(
            ProductPayload::default().into_draft(),
            Err(FieldError::Missing {
                entity: "product",
                missing: vec!["name", "image", "price", "stock", "idSupplier"],
            })
        );
    }

    #[test]
    fn test_zero_stock_and_price_are_present_values() {
        let mut body = payload();
        body.price = Some(0.0);
        body.stock = Some(0);
        let draft = body.into_draft().unwrap();
        assert_eq!(draft.stock, 0);
    }

    #[test]
    fn test_quotas_default_on_create_and_persist_on_update() {
        let supplier = SupplierId::generate();
        let mut product = Product::new(ProductId::generate(), payload().into_draft().unwrap(), supplier);
        assert_eq!(product.quotas, DEFAULT_QUOTAS);

        let mut with_quotas = payload();
        with_quotas.quotas = Some(6);
        with_quotas.description = Some("cotton".into());
        product.apply(with_quotas.into_draft().unwrap(), supplier);
        assert_eq!(product.quotas, 6);

        let mut renamed = payload();
        renamed.name = Some("Blue Shirt".into());
        product.apply(renamed.into_draft().unwrap(), supplier);
        assert_eq!(product.name, "Blue Shirt");
        assert_eq!(product.quotas, 6);
        assert_eq!(product.description.as_deref(), Some("cotton"));
    }

    #[test]
    fn test_wire_format() {
        let supplier: SupplierId = "507f1f77bcf86cd799439011".parse().unwrap();
        let product = Product::new(ProductId::generate(), payload().into_draft().unwrap(), supplier);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["idSupplier"], "507f1f77bcf86cd799439011");
        assert_eq!(json["quotas"], 1);
        assert_eq!(json["_id"], product.id.to_string());
        assert!(json.get("description").is_none());
    }
}
