//! Game Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

use crate::{domain::promotions::records::PromotionId, ids::TypedId};

/// Game id, assigned by the store on insert.
pub type GameId = TypedId<GameRecord>;

/// A purchasable game, the aggregate root of the catalog write path.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    pub company: String,
    pub price: f64,
    pub rating: Rating,
    pub genre: Genre,
    /// Promotions currently applied to this game. The game update path
    /// never touches this collection; membership is managed through the
    /// promotions surface.
    pub promotions: Vec<PromotionId>,
}

/// Error returned when a symbolic enum name does not match any variant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {field} \"{value}\"")]
pub struct UnknownVariantError {
    pub field: &'static str,
    pub value: String,
}

/// Age rating, a closed set.
///
/// The symbolic names are part of the notification wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Everyone,
    Everyone10Plus,
    Teen,
    Mature,
    AdultsOnly,
}

impl Rating {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Everyone => "Everyone",
            Self::Everyone10Plus => "Everyone10Plus",
            Self::Teen => "Teen",
            Self::Mature => "Mature",
            Self::AdultsOnly => "AdultsOnly",
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Everyone" => Ok(Self::Everyone),
            "Everyone10Plus" => Ok(Self::Everyone10Plus),
            "Teen" => Ok(Self::Teen),
            "Mature" => Ok(Self::Mature),
            "AdultsOnly" => Ok(Self::AdultsOnly),
            _ => Err(UnknownVariantError {
                field: "rating",
                value: value.to_string(),
            }),
        }
    }
}

/// Genre, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Action,
    Adventure,
    Rpg,
    Strategy,
    Sports,
    Racing,
    Simulation,
    Puzzle,
}

impl Genre {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Rpg => "RPG",
            Self::Strategy => "Strategy",
            Self::Sports => "Sports",
            Self::Racing => "Racing",
            Self::Simulation => "Simulation",
            Self::Puzzle => "Puzzle",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Action" => Ok(Self::Action),
            "Adventure" => Ok(Self::Adventure),
            "RPG" => Ok(Self::Rpg),
            "Strategy" => Ok(Self::Strategy),
            "Sports" => Ok(Self::Sports),
            "Racing" => Ok(Self::Racing),
            "Simulation" => Ok(Self::Simulation),
            "Puzzle" => Ok(Self::Puzzle),
            _ => Err(UnknownVariantError {
                field: "genre",
                value: value.to_string(),
            }),
        }
    }
}
