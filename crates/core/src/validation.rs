//! Pre-submission field validation.
//!
//! These checks run on the client before a draft ever reaches the network
//! layer, and report per field so a form can highlight individual inputs.
//! Server-side rejection is still possible and surfaces as
//! [`StoreError::Validation`](crate::StoreError::Validation).

use thiserror::Error;

use crate::product::ProductDraft;

/// A single rejected field with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub reason: &'static str,
}

/// All field issues found in one draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("draft validation failed on {} field(s)", .issues.len())]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn field(&self, name: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.field == name)
    }
}

/// Name: letters and spaces only, at least 3 characters.
///
/// Letters in the Unicode sense: the catalogue is French and accented
/// product names ("Écran") must pass.
pub fn valid_name(name: &str) -> bool {
    name.chars().count() >= 3 && name.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// Category: non-blank after trimming.
pub fn valid_category(category: &str) -> bool {
    !category.trim().is_empty()
}

/// Barcode: 13 or 14 digits, leading digit non-zero.
pub fn valid_barcode(barcode: &str) -> bool {
    let len = barcode.len();
    (13..=14).contains(&len)
        && barcode.starts_with(|c: char| ('1'..='9').contains(&c))
        && barcode.chars().all(|c| c.is_ascii_digit())
}

/// Price: decimal digit string with an optional fraction of at most two
/// digits ("12", "12.5", "12.50").
pub fn valid_price(price: &str) -> bool {
    let (whole, fraction) = match price.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (price, None),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match fraction {
        None => true,
        Some(f) => (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()),
    }
}

/// Supplier: non-blank after trimming.
pub fn valid_supplier(supplier: &str) -> bool {
    !supplier.trim().is_empty()
}

/// Quantity: a positive integer without leading zeros when stock is declared
/// available; anything passes when it is not.
pub fn valid_quantity(quantity: &str, stock_available: bool) -> bool {
    if !stock_available {
        return true;
    }
    !quantity.is_empty()
        && quantity.starts_with(|c: char| ('1'..='9').contains(&c))
        && quantity.chars().all(|c| c.is_ascii_digit())
}

/// Secret key submitted at login: alphanumeric, at least 6 characters.
pub fn valid_secret_key(secret_key: &str) -> bool {
    secret_key.len() >= 6 && secret_key.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validate a creation draft, reporting every failing field at once.
pub fn validate_draft(draft: &ProductDraft) -> Result<(), ValidationReport> {
    let mut issues = Vec::new();

    if !valid_name(&draft.name) {
        issues.push(FieldIssue {
            field: "name",
            reason: "letters and spaces only, at least 3 characters",
        });
    }
    if !valid_category(&draft.category) {
        issues.push(FieldIssue {
            field: "type",
            reason: "must not be blank",
        });
    }
    if !valid_barcode(&draft.barcode) {
        issues.push(FieldIssue {
            field: "barcode",
            reason: "13 or 14 digits, must not start with 0",
        });
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        issues.push(FieldIssue {
            field: "price",
            reason: "must be a non-negative number",
        });
    }
    if !valid_supplier(&draft.supplier) {
        issues.push(FieldIssue {
            field: "supplier",
            reason: "must not be blank",
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport { issues })
    }
}
