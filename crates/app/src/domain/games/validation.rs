//! Required-field validation for game change requests.

use crate::domain::games::data::GameData;

/// The required string fields of a change request, in declaration order.
///
/// The list is explicit rather than derived from the shape so that the
/// validation contract is stable and testable on its own. Numeric and
/// enum fields are not inspected here.
const REQUIRED_FIELDS: [(&str, fn(&GameData) -> &str); 2] = [
    ("name", |data| &data.name),
    ("company", |data| &data.company),
];

/// Check a change request for structural completeness.
///
/// Returns `None` when every required string field is non-empty and not
/// whitespace-only; otherwise a single combined message naming the
/// offending fields in declaration order.
#[must_use]
pub fn missing_required_fields(data: &GameData) -> Option<String> {
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
