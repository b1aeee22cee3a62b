use crate::catalog::{view, CatalogStore, Item};
use crate::config::Config;
use crate::gateway::{
    AutoConfirm, ConfirmPolicy, GatewayError, MutationGateway, MutationOutcome, StockClient,
    StockDirection,
};
use crate::mvi::Reducer;
use crate::session::intent::SessionIntent;
use crate::session::reducer::SessionReducer;
use crate::session::state::SessionState;

/// Owns the catalog, the session state, and the gateway, and sequences the
/// network effects between them.
///
/// Single control flow by construction: every operation takes `&mut self`,
/// so at most one request is in flight. The busy flag is still maintained
/// for callers that gate their UI on it, and it is cleared on every path,
/// including errors. There is no timeout and no cancellation; a hung
/// request holds the flag.
pub struct SessionEngine {
    catalog: CatalogStore,
    state: SessionState,
    gateway: MutationGateway,
    track_origin_order: bool,
}

impl SessionEngine {
    pub fn new(config: &Config, confirm: Box<dyn ConfirmPolicy>) -> Result<Self, GatewayError> {
        let client = StockClient::new(&config.endpoint)?;
        let gateway = MutationGateway::new(client, config.features.clone(), confirm);
        Ok(Self {
            catalog: CatalogStore::new(),
            state: SessionState::default(),
            gateway,
            track_origin_order: config.features.track_origin_order,
        })
    }

    /// Engine for variants without confirmation dialogs.
    pub fn with_auto_confirm(config: &Config) -> Result<Self, GatewayError> {
        Self::new(config, Box::new(AutoConfirm))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Advance the session state through the pure reducer.
    pub fn apply(&mut self, intent: SessionIntent) {
        self.state = SessionReducer::reduce(self.state.clone(), intent);
    }

    /// The derived list: filtered by the current query, ordered by the
    /// current sort mode.
    pub fn view(&self) -> Vec<Item> {
        view(
            self.catalog.items(),
            &self.state.query,
            self.state.sort,
            self.track_origin_order,
        )
    }

    /// Fetch the full collection and replace the catalog.
    ///
    /// On any failure the previous catalog is left untouched.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        self.apply(SessionIntent::RequestStarted);
        let result = self.gateway.fetch_catalog().await;
        self.apply(SessionIntent::RequestSettled);

        let records = result?;
        self.catalog.apply_snapshot(records);
        Ok(())
    }

    /// Stock-in or stock-out of the selected item by the pending quantity.
    pub async fn stock_update(
        &mut self,
        direction: StockDirection,
    ) -> Result<MutationOutcome, GatewayError> {
        let item = self
            .state
            .selected
            .clone()
            .ok_or(GatewayError::NothingSelected)?;
        let qty = self.state.qty;

        self.apply(SessionIntent::RequestStarted);
        let result = self.gateway.stock_update(&item, qty, direction).await;
        self.apply(SessionIntent::RequestSettled);

        self.settle(result?).await
    }

    /// Delete the selected item.
    pub async fn delete_selected(&mut self) -> Result<MutationOutcome, GatewayError> {
        let item = self
            .state
            .selected
            .clone()
            .ok_or(GatewayError::NothingSelected)?;

        self.apply(SessionIntent::RequestStarted);
        let result = self.gateway.delete(&item).await;
        self.apply(SessionIntent::RequestSettled);

        self.settle(result?).await
    }

    /// Submit the new-item draft.
    pub async fn submit_draft(&mut self) -> Result<MutationOutcome, GatewayError> {
        let draft = self.state.draft.clone();

        self.apply(SessionIntent::RequestStarted);
        let result = self.gateway.add(&draft).await;
        self.apply(SessionIntent::RequestSettled);

        self.settle(result?).await
    }

    /// Apply the reported resets and do the unconditional post-mutation
    /// reload. The gateway never merges a mutation's effect locally; the
    /// sheet's answer to the next fetch is the only truth.
    async fn settle(
        &mut self,
        outcome: MutationOutcome,
    ) -> Result<MutationOutcome, GatewayError> {
        if let MutationOutcome::Applied(effects) = outcome {
            self.apply(SessionIntent::MutationApplied(effects));
            self.refresh().await?;
        }
        Ok(outcome)
    }
}
