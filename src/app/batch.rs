use crate::config::request::QuoteRequestFile;
use crate::core::session::Session;
use crate::core::storefront::Storefront;
use crate::domain::model::QuoteRequest;
use crate::domain::ports::{ContentProvider, QuoteSink};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::Validate;

#[derive(Debug, Clone)]
pub enum BatchOutcome {
    DryRun(QuoteRequest),
    Submitted(String),
}

/// 從請求檔建立購物車，然後走完 cart -> checkout -> submit。
pub async fn run_quote<P, K>(
    storefront: &Storefront<P>,
    sink: &K,
    request: QuoteRequestFile,
    dry_run: bool,
) -> Result<BatchOutcome>
where
    P: ContentProvider,
    K: QuoteSink + ?Sized,
{
    request.validate()?;
    let catalog = storefront.load_catalog().await;

    let mut session = Session::new();
    for wanted in &request.items {
        let Some(service) = catalog.find(&wanted.service_id) else {
            tracing::warn!("Service '{}' is not in the catalog, skipping", wanted.service_id);
            continue;
        };

        if !session.add_to_cart(service.clone()) {
            tracing::warn!("Service '{}' listed twice, keeping the first entry", wanted.service_id);
            continue;
        }

        if let Some(notes) = &wanted.notes {
            if let Some(item_id) = session.cart().items().last().map(|item| item.id) {
                session.update_cart_item_notes(item_id, notes.clone());
            }
        }
    }

    if session.cart().is_empty() {
        return Err(QuoteError::CheckoutError {
            message: "none of the requested services are available".to_string(),
        });
    }

    session.open_cart();
    if session.initiate_checkout().is_none() {
        return Err(QuoteError::CheckoutError {
            message: "could not start checkout".to_string(),
        });
    }

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - quote will not be submitted");
        return Ok(BatchOutcome::DryRun(session.prepare_quote(request.contact)?));
    }

    let reference = session.submit(request.contact, sink).await?;
    Ok(BatchOutcome::Submitted(reference))
}
