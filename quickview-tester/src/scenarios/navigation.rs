use anyhow::{Result, ensure};
use async_trait::async_trait;
use quickview_core::{
    HistoryStore, MemoryHistory, NavigationSynchronizer, OverlayState, OverlayTransition,
    QUERY_PARAM, RequestLedger, TrapSlot,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::Scenario;
use crate::fixtures::{random_handle, random_query};

pub struct NavigationRoundTrip;

#[async_trait(?Send)]
impl Scenario for NavigationRoundTrip {
    fn key(&self) -> &'static str {
        "navigation-roundtrip"
    }
    fn name(&self) -> &'static str {
        "Navigation round trip"
    }
    fn description(&self) -> &'static str {
        "Open then close restores the query byte-for-byte; back/forward follow"
    }

    async fn run(&self, seed: u64) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let original = random_query(&mut rng);
        let handle = random_handle(&mut rng);
        let history = MemoryHistory::new(&original);
        let nav = NavigationSynchronizer::new(&history);

        ensure!(nav.state() == OverlayState::Closed, "{original:?} opened the overlay");
        ensure!(nav.close() == OverlayTransition::Unchanged, "closing a closed overlay pushed");

        nav.open(&handle);
        let opened = history.current_query();
        ensure!(
            opened.contains(&format!("{QUERY_PARAM}={handle}")),
            "{opened:?} does not carry the handle"
        );
        ensure!(nav.state() == OverlayState::Open(handle.clone()), "state did not open");

        nav.close();
        ensure!(
            history.current_query() == original,
            "close produced {:?}, expected {original:?}",
            history.current_query()
        );

        ensure!(history.back(), "no entry to go back to");
        ensure!(nav.state() == OverlayState::Open(handle.clone()), "back did not reopen");
        ensure!(history.back(), "no entry before the open");
        ensure!(nav.state() == OverlayState::Closed, "back did not close");
        ensure!(history.forward(), "no entry to go forward to");
        ensure!(nav.state() == OverlayState::Open(handle), "forward did not reopen");
        Ok(())
    }
}

pub struct IdempotentOpen;

#[async_trait(?Send)]
impl Scenario for IdempotentOpen {
    fn key(&self) -> &'static str {
        "idempotent-open"
    }
    fn name(&self) -> &'static str {
        "Idempotent open"
    }
    fn description(&self) -> &'static str {
        "Opening the open item again pushes, fetches and traps nothing"
    }

    async fn run(&self, seed: u64) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let history = MemoryHistory::new(&random_query(&mut rng));
        let nav = NavigationSynchronizer::new(&history);
        let ledger = RequestLedger::new();
        let mut trap = TrapSlot::new();
        let handle = random_handle(&mut rng);

        for attempt in 0..3 {
            let transition = nav.open(&handle);
            if let Some(target) = transition.fetch_target()
                && ledger.begin(target).is_some()
            {
                trap.install();
            }
            if attempt == 0 {
                ensure!(transition.fetch_target().is_some(), "first open fetched nothing");
            } else {
                ensure!(
                    transition == OverlayTransition::Unchanged,
                    "repeat open produced {transition:?}"
                );
            }
        }
        ensure!(history.len() == 2, "history has {} entries", history.len());
        ensure!(ledger.issued() == 1, "{} fetches issued", ledger.issued());
        ensure!(trap.installations() == 1, "{} traps installed", trap.installations());
        Ok(())
    }
}
