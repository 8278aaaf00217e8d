//! Required-field validation for promotion change requests.

use crate::domain::promotions::data::PromotionData;

/// The required string fields of a promotion change request, in
/// declaration order.
const REQUIRED_FIELDS: [(&str, fn(&PromotionData) -> &str); 1] =
    [("name", |data| &data.name)];

/// Check a promotion change request for structural completeness.
///
/// Range and date-order checks live in the service; this inspects only
/// the required string fields.
#[must_use]
pub fn missing_required_fields(data: &PromotionData) -> Option<String> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|(_, field)| field(data).trim().is_empty())
        .map(|(name, _)| format!("field '{name}' must not be empty"))
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(missing.join("; "))
    }
}
