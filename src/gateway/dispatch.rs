use crate::catalog::Item;
use crate::config::FeatureFlags;
use crate::gateway::client::StockClient;
use crate::gateway::confirm::ConfirmPolicy;
use crate::gateway::protocol::{MutationRequest, StockDirection};
use crate::gateway::GatewayError;
use crate::session::Draft;

/// Which session fields reset after a successful mutation.
///
/// The gateway never touches session state itself; it reports what should
/// reset and the reducer applies it. Every applied mutation is additionally
/// followed by a full catalog reload, driven by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationEffects {
    pub clear_selection: bool,
    pub reset_qty: bool,
    pub reset_draft: bool,
    pub switch_to_list: bool,
}

/// Outcome of a dispatch attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The endpoint accepted the mutation.
    Applied(MutationEffects),
    /// The confirmation policy declined; nothing was sent and nothing
    /// changes.
    Declined,
}

/// Translates user intents into single request/response round trips.
pub struct MutationGateway {
    client: StockClient,
    flags: FeatureFlags,
    confirm: Box<dyn ConfirmPolicy>,
}

impl MutationGateway {
    pub fn new(client: StockClient, flags: FeatureFlags, confirm: Box<dyn ConfirmPolicy>) -> Self {
        Self {
            client,
            flags,
            confirm,
        }
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    /// Fetch the full collection. Exposed here so the engine reaches the
    /// wire through exactly one component.
    pub async fn fetch_catalog(&self) -> Result<Vec<crate::catalog::RawItem>, GatewayError> {
        self.client.fetch_items().await
    }

    /// Stock-in or stock-out of the selected item.
    pub async fn stock_update(
        &self,
        item: &Item,
        qty: Option<u32>,
        direction: StockDirection,
    ) -> Result<MutationOutcome, GatewayError> {
        let qty = match qty {
            Some(q) if q > 0 => q,
            _ => return Err(GatewayError::InvalidQuantity),
        };

        let prompt = format!("{} を {}冊 {}しますか？", item.name, qty, direction.label());
        if !self.confirmed(&prompt) {
            return Ok(MutationOutcome::Declined);
        }

        tracing::info!(id = item.id, qty, direction = direction.label(), "Stock update");
        self.client
            .submit(&MutationRequest::Update {
                id: item.id,
                direction,
                qty,
            })
            .await?;

        Ok(MutationOutcome::Applied(MutationEffects {
            clear_selection: true,
            reset_qty: true,
            ..MutationEffects::default()
        }))
    }

    /// Delete the selected item. Only exists in variants that enable it.
    pub async fn delete(&self, item: &Item) -> Result<MutationOutcome, GatewayError> {
        if !self.flags.allow_delete {
            return Err(GatewayError::DeleteDisabled);
        }

        let prompt = format!("「{}」を削除しますか？", item.name);
        if !self.confirmed(&prompt) {
            return Ok(MutationOutcome::Declined);
        }

        tracing::info!(id = item.id, "Delete item");
        self.client
            .submit(&MutationRequest::Delete { id: item.id })
            .await?;

        Ok(MutationOutcome::Applied(MutationEffects {
            clear_selection: true,
            ..MutationEffects::default()
        }))
    }

    /// Register a new item from the draft.
    pub async fn add(&self, draft: &Draft) -> Result<MutationOutcome, GatewayError> {
        let request = build_add_request(draft, &self.flags)?;

        let prompt = format!("「{}」を登録しますか？", draft.name.trim());
        if !self.confirmed(&prompt) {
            return Ok(MutationOutcome::Declined);
        }

        tracing::info!(name = %draft.name.trim(), "Add item");
        self.client.submit(&request).await?;

        Ok(MutationOutcome::Applied(MutationEffects {
            reset_draft: true,
            switch_to_list: true,
            ..MutationEffects::default()
        }))
    }

    fn confirmed(&self, prompt: &str) -> bool {
        !self.flags.confirm_on_mutate || self.confirm.confirm(prompt)
    }
}

/// Validate the draft and build the outgoing `add` payload.
///
/// - The display name is always required.
/// - A blank cost is a local rejection under strict validation; otherwise
///   the column is simply omitted. Blank-to-zero is applied only to the
///   non-required counters (stock, alert).
/// - When the fixed-choice subject/grade is the manual escape option, the
///   free-text companion is substituted; the escape value itself is never
///   sent.
pub(crate) fn build_add_request(
    draft: &Draft,
    flags: &FeatureFlags,
) -> Result<MutationRequest, GatewayError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(GatewayError::MissingField { field: "name" });
    }

    let cost = match draft.cost.trim() {
        "" if flags.strict_blank_validation => {
            return Err(GatewayError::MissingField { field: "cost" })
        }
        "" => None,
        raw => Some(parse_number(raw, "cost")?),
    };

    let stock = parse_count(&draft.stock, "stock")?;
    let alert = parse_count(&draft.alert, "alert")?;

    Ok(MutationRequest::Add {
        name: name.to_string(),
        publisher: non_blank(&draft.publisher),
        isbn: non_blank(&draft.isbn),
        location: non_blank(&draft.location),
        subject: non_blank(draft.resolved_subject()),
        grade: non_blank(draft.resolved_grade()),
        stock,
        alert,
        cost,
    })
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Blank-to-zero counter field.
fn parse_count(raw: &str, field: &'static str) -> Result<i64, GatewayError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    parse_number(trimmed, field)
}

fn parse_number(raw: &str, field: &'static str) -> Result<i64, GatewayError> {
    raw.parse::<i64>()
        .map_err(|_| GatewayError::InvalidNumber { field })
}
