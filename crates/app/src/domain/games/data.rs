//! Game change-request data.

use crate::domain::games::records::{GameRecord, Genre, Rating};

/// The transport shape of a game write: every scalar field of
/// [`GameRecord`] minus identity and promotions. Used by both the create
/// and the update payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct GameData {
    pub name: String,
    pub company: String,
    pub price: f64,
    pub rating: Rating,
    pub genre: Genre,
}

impl GameData {
    /// Overwrite the five scalar fields of an existing record, leaving the
    /// promotions collection untouched.
    pub fn apply_to(&self, game: &mut GameRecord) {
        game.name = self.name.clone();
        game.company = self.company.clone();
        game.price = self.price;
        game.rating = self.rating;
        game.genre = self.genre;
    }
}
