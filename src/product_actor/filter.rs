use crate::model::SupplierId;

/// Selects products for listing or bulk deletion.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Case-insensitive substring of the product name. Stored lowercased.
    NameContains(String),
    /// Every product referencing the supplier.
    Supplier(SupplierId),
}

impl ProductFilter {
    pub fn name_contains(needle: &str) -> Self {
        ProductFilter::NameContains(needle.to_lowercase())
    }
}
