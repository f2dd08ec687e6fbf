use crate::errors::internal::ItemError;
use crate::types::internal::{ItemDraft, ItemPatch, NewItem};

/// Check a creation payload against the canonical item shape
///
/// All required fields must be present; text fields and image URLs must be
/// non-empty after trimming and `price` must be a finite number. Every
/// offending field is reported, in payload order, not just the first.
///
/// # Returns
/// * `Ok(NewItem)` - Trimmed, complete item
/// * `Err(ItemError::Validation)` - Names of missing or empty fields
pub fn validate_new_item(draft: ItemDraft) -> Result<NewItem, ItemError> {
    let mut invalid = Vec::new();

    let name = required_text(draft.name, "name", &mut invalid);
    let category = required_text(draft.category, "category", &mut invalid);
    let thickness = required_text(draft.thickness, "thickness", &mut invalid);
    let side = required_text(draft.side, "side", &mut invalid);
    let lamination = required_text(draft.lamination, "lamination", &mut invalid);
    let size = required_text(draft.size, "size", &mut invalid);
    let price = match draft.price.filter(|p| p.is_finite()) {
        Some(price) => price,
        None => {
            invalid.push("price".to_string());
            0.0
        }
    };
    let description = required_text(draft.description, "description", &mut invalid);
    let image_urls = match draft.image_urls.and_then(normalize_image_urls) {
        Some(urls) => urls,
        None => {
            invalid.push("imageUrls".to_string());
            Vec::new()
        }
    };

    if !invalid.is_empty() {
        return Err(ItemError::Validation { fields: invalid });
    }

    Ok(NewItem {
        name,
        category,
        thickness,
        side,
        lamination,
        size,
        price,
        description,
        image_urls,
    })
}

/// Check a merge-patch payload
///
/// Absent fields are left alone; present ones obey the same rules as on
/// creation.
pub fn validate_patch(draft: ItemDraft) -> Result<ItemPatch, ItemError> {
    let mut invalid = Vec::new();

    let patch = ItemPatch {
        name: present_text(draft.name, "name", &mut invalid),
        category: present_text(draft.category, "category", &mut invalid),
        thickness: present_text(draft.thickness, "thickness", &mut invalid),
        side: present_text(draft.side, "side", &mut invalid),
        lamination: present_text(draft.lamination, "lamination", &mut invalid),
        size: present_text(draft.size, "size", &mut invalid),
        price: match draft.price {
            Some(price) if !price.is_finite() => {
                invalid.push("price".to_string());
                None
            }
            other => other,
        },
        description: present_text(draft.description, "description", &mut invalid),
        image_urls: match draft.image_urls {
            Some(urls) => {
                let normalized = normalize_image_urls(urls);
                if normalized.is_none() {
                    invalid.push("imageUrls".to_string());
                }
                normalized
            }
            None => None,
        },
    };

    if !invalid.is_empty() {
        return Err(ItemError::Validation { fields: invalid });
    }

    Ok(patch)
}

fn required_text(value: Option<String>, field: &str, invalid: &mut Vec<String>) -> String {
    match non_blank(value) {
        Some(text) => text,
        None => {
            invalid.push(field.to_string());
            String::new()
        }
    }
}

fn present_text(value: Option<String>, field: &str, invalid: &mut Vec<String>) -> Option<String> {
    let value = value?;
    let trimmed = non_blank(Some(value));
    if trimmed.is_none() {
        invalid.push(field.to_string());
    }
    trimmed
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// At least one URL, none of them blank
fn normalize_image_urls(urls: Vec<String>) -> Option<Vec<String>> {
    let trimmed: Vec<String> = urls.iter().map(|u| u.trim().to_string()).collect();
    if trimmed.is_empty() || trimmed.iter().any(|u| u.is_empty()) {
        return None;
    }
    Some(trimmed)
}
