//! Promotion change-request data.

use jiff::Timestamp;

use crate::domain::promotions::records::PromotionRecord;

/// The transport shape of a promotion write: every scalar field of
/// [`PromotionRecord`] minus identity and game links.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionData {
    pub name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub discount_percentage: i32,
}

impl PromotionData {
    /// Overwrite the scalar fields of an existing record, leaving the
    /// game links untouched.
    pub fn apply_to(&self, promotion: &mut PromotionRecord) {
        promotion.name = self.name.clone();
        promotion.start_date = self.start_date;
        promotion.end_date = self.end_date;
        promotion.discount_percentage = self.discount_percentage;
    }
}
