//! Promotion Records

use jiff::Timestamp;

use crate::{domain::games::records::GameId, ids::TypedId};

/// Promotion id, assigned by the store on insert.
pub type PromotionId = TypedId<PromotionRecord>;

/// A promotional discount window applied to a set of games.
///
/// Games and promotions form a many-to-many relation; a link must always
/// resolve to an existing row on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRecord {
    pub id: PromotionId,
    pub name: String,
    pub start_date: Timestamp,
    /// Never precedes `start_date`.
    pub end_date: Timestamp,
    /// Whole percentage points, 0 to 100.
    pub discount_percentage: i32,
    pub game_ids: Vec<GameId>,
}
