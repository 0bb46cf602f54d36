//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickService, PostbackService, QueryService};
use crate::domain::repositories::{ClickRepository, ConversionRepository};

pub type DynClickService = ClickService<dyn ClickRepository>;
pub type DynPostbackService = PostbackService<dyn ClickRepository, dyn ConversionRepository>;
pub type DynQueryService = QueryService<dyn ClickRepository, dyn ConversionRepository>;

/// Services shared by all requests.
///
/// The store handle lives inside the repositories passed to [`AppState::new`];
/// there is no global connection. Cloning the state only clones `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub click_service: Arc<DynClickService>,
    pub postback_service: Arc<DynPostbackService>,
    pub query_service: Arc<DynQueryService>,
}

impl AppState {
    /// Wires all services on top of the given repositories.
    pub fn new(
        click_repository: Arc<dyn ClickRepository>,
        conversion_repository: Arc<dyn ConversionRepository>,
    ) -> Self {
        Self {
            click_service: Arc::new(ClickService::new(click_repository.clone())),
            postback_service: Arc::new(PostbackService::new(
                click_repository.clone(),
                conversion_repository.clone(),
            )),
            query_service: Arc::new(QueryService::new(
                click_repository,
                conversion_repository,
            )),
        }
    }
}
