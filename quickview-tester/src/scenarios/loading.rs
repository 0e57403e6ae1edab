use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use quickview_core::{
    LoadState, Product, ProductError, ProductProvider, RequestLedger, StaticProductProvider,
    fetch_product,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::time::Duration;

use super::Scenario;
use crate::fixtures::random_product;

/// Serves a fixed catalog with a per-handle response delay.
struct DelayedProvider {
    inner: StaticProductProvider,
    delays: HashMap<String, Duration>,
}

#[async_trait(?Send)]
impl ProductProvider for DelayedProvider {
    async fn load_product(&self, handle: &str) -> Result<Option<Product>, ProductError> {
        if let Some(delay) = self.delays.get(handle) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.load_product(handle).await
    }
}

pub struct StaleResponse;

#[async_trait(?Send)]
impl Scenario for StaleResponse {
    fn key(&self) -> &'static str {
        "stale-response"
    }
    fn name(&self) -> &'static str {
        "Stale response"
    }
    fn description(&self) -> &'static str {
        "Switching items while a slow fetch is in flight keeps only the latest result"
    }

    async fn run(&self, seed: u64) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let first = random_product(&mut rng, "first-item");
        let second = random_product(&mut rng, "second-item");
        let slow = Duration::from_millis(rng.gen_range(15..30));
        let fast = Duration::from_millis(rng.gen_range(0..5));
        let provider = DelayedProvider {
            inner: StaticProductProvider::new([first, second]),
            delays: HashMap::from([
                ("first-item".to_string(), slow),
                ("second-item".to_string(), fast),
            ]),
        };
        // a -> b, or a -> b -> a where the first `a` is still stale.
        let return_to_first = rng.gen_bool(0.5);
        let ledger = RequestLedger::new();

        let stale = ledger.begin("first-item").context("first request")?;
        let mut latest = ledger.begin("second-item").context("second request")?;
        if return_to_first {
            latest = ledger.begin("first-item").context("third request")?;
        }

        let (stale_state, latest_state) = tokio::join!(
            async { ledger.settle(&stale, fetch_product(&provider, &stale).await) },
            async { ledger.settle(&latest, fetch_product(&provider, &latest).await) },
        );
        ensure!(stale_state.is_none(), "superseded response was applied");
        let state = latest_state.context("latest response was discarded")?;
        let expected = if return_to_first { "first-item" } else { "second-item" };
        ensure!(
            matches!(&state, LoadState::Ready { handle, product } if handle == expected && product.handle == expected),
            "settled on {state:?}, expected {expected}"
        );

        let ticket = ledger.begin("missing-item").context("missing request")?;
        let missing = ledger
            .settle(&ticket, fetch_product(&provider, &ticket).await)
            .context("missing response was discarded")?;
        ensure!(
            matches!(missing, LoadState::Unavailable { .. }),
            "unknown handle settled as {missing:?}"
        );
        Ok(())
    }
}
