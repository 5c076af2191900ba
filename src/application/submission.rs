//! Order submission.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::{OrderDraft, Price};
use crate::error::SubmissionError;
use crate::port::outbound::{FoodBackend, OrderPayload};

/// Result of a successful submission. The caller is expected to leave the
/// configuration view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Completed {
        /// Total that was sent with the order.
        total: Price,
    },
}

/// Builds an [`OrderPayload`] from a draft and posts it once.
#[derive(Clone)]
pub struct OrderSubmission {
    backend: Arc<dyn FoodBackend>,
}

impl OrderSubmission {
    #[must_use]
    pub fn new(backend: Arc<dyn FoodBackend>) -> Self {
        Self { backend }
    }

    /// Submit `draft` as an order. No retry; on failure the draft is
    /// unchanged and may be submitted again.
    #[instrument(skip_all, fields(food_id = %draft.item().id()))]
    pub async fn submit(&self, draft: &OrderDraft) -> Result<SubmissionOutcome, SubmissionError> {
        let payload = OrderPayload::from_draft(draft);
        let total = payload.price;

        match self.backend.create_order(&payload).await {
            Ok(()) => {
                info!(%total, quantity = draft.base_quantity(), "Order submitted");
                Ok(SubmissionOutcome::Completed { total })
            }
            Err(error) => {
                warn!(error = %error, "Order submission failed");
                Err(SubmissionError::new(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExtraId;
    use crate::testkit::backend::RecordingBackend;
    use crate::testkit::domain::{extra_record, food_record};
    use rust_decimal_macros::dec;

    fn draft() -> OrderDraft {
        let mut record = food_record(2, dec!(8.00));
        record.extras = vec![
            extra_record(1, "Egg", dec!(1.25)),
            extra_record(2, "Onion", dec!(0.75)),
        ];
        OrderDraft::new(record.into_menu_item().unwrap())
    }

    #[tokio::test]
    async fn payload_carries_raw_total_and_every_extra() {
        let backend = Arc::new(RecordingBackend::new());
        let mut draft = draft();
        draft.increment_extra(ExtraId::new(1));
        draft.increment_extra(ExtraId::new(1));

        let outcome = OrderSubmission::new(backend.clone())
            .submit(&draft)
            .await
            .unwrap();

        assert_eq!(outcome, SubmissionOutcome::Completed { total: dec!(10.50) });
        let orders = backend.orders();
        assert_eq!(orders.len(), 1);
        let order = &orders[0];
        assert_eq!(order.product_id, draft.item().id());
        assert_eq!(order.price, dec!(10.50));
        assert_eq!(order.thumbnail_url, draft.item().image_url());
        let quantities: Vec<u32> = order.extras.iter().map(|e| e.quantity).collect();
        assert_eq!(quantities, vec![2, 0]);
    }

    #[tokio::test]
    async fn failure_is_reported_and_draft_is_untouched() {
        let backend = Arc::new(RecordingBackend::new());
        backend.fail_orders(true);
        let draft = draft();
        let before = draft.clone();

        let err = OrderSubmission::new(backend.clone())
            .submit(&draft)
            .await
            .unwrap_err();

        assert_eq!(err.backend().path(), "orders");
        assert_eq!(draft, before);
        assert!(backend.orders().is_empty());
    }
}
