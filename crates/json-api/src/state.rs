//! State

use std::sync::Arc;

use arcade_app::{
    context::AppContext,
    domain::{games::GamesService, promotions::PromotionsService},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) games: Arc<dyn GamesService>,
    pub(crate) promotions: Arc<dyn PromotionsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        games: Arc<dyn GamesService>,
        promotions: Arc<dyn PromotionsService>,
    ) -> Self {
        Self { games, promotions }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.games, app.promotions))
    }
}
