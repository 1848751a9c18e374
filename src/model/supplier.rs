use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{missing_fields, present, FieldError};
use super::SupplierId;

/// A supplier record as stored and as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: SupplierId,
    pub cuit: String,
    pub company_name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Supplier {
    pub fn new(id: SupplierId, draft: SupplierDraft) -> Self {
        Self {
            id,
            cuit: draft.cuit,
            company_name: draft.company_name,
            address: draft.address,
            phone: draft.phone,
            email: draft.email,
        }
    }

    /// Replaces every attribute from `draft`. The stored email is kept when the
    /// draft carries none.
    pub fn apply(&mut self, draft: SupplierDraft) {
        self.cuit = draft.cuit;
        self.company_name = draft.company_name;
        self.address = draft.address;
        self.phone = draft.phone;
        if draft.email.is_some() {
            self.email = draft.email;
        }
    }
}

/// Supplier attributes as they arrive in a request body. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    #[validate(required)]
    pub cuit: Option<String>,
    #[validate(required)]
    pub company_name: Option<String>,
    #[validate(required)]
    pub address: Option<String>,
    #[validate(required)]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

const REQUIRED: [(&str, &str); 4] = [
    ("cuit", "cuit"),
    ("company_name", "companyName"),
    ("address", "address"),
    ("phone", "phone"),
];

/// A validated supplier payload, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierDraft {
    pub cuit: String,
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
}

impl SupplierPayload {
    /// Checks presence of the required attributes, then the email shape.
    pub fn into_draft(self) -> Result<SupplierDraft, FieldError> {
        let checked = Self {
            cuit: present(self.cuit),
            company_name: present(self.company_name),
            address: present(self.address),
            phone: present(self.phone),
            email: present(self.email),
        };
        if let Err(errors) = checked.validate() {
            let missing = missing_fields(&REQUIRED, &errors);
            if missing.is_empty() {
                return Err(FieldError::InvalidEmail(checked.email.unwrap_or_default()));
            }
            return Err(FieldError::Missing {
                entity: "supplier",
                missing,
            });
        }

        // `required` has passed, so every default below is unused.
        Ok(SupplierDraft {
            cuit: checked.cuit.unwrap_or_default(),
            company_name: checked.company_name.unwrap_or_default(),
            address: checked.address.unwrap_or_default(),
            phone: checked.phone.unwrap_or_default(),
            email: checked.email,
        })
    }
}
