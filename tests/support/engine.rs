use std::sync::Arc;

use tripwire::application::engine::Engine;
use tripwire::domain::id::OrderId;
use tripwire::domain::order::{OrderStatus, TargetOrder};
use tripwire::port::outbound::store::OrderStore;
use tripwire::testkit::fakes::{FlakyStore, RecordingNotifier, RecordingPlacer, ScriptedQuotes};

/// An engine wired to recording fakes.
pub struct Rig {
    pub store: Arc<FlakyStore>,
    pub quotes: ScriptedQuotes,
    pub placer: RecordingPlacer,
    pub notifier: RecordingNotifier,
    pub engine: Arc<Engine>,
}

impl Rig {
    pub fn new(orders: Vec<TargetOrder>, quotes: ScriptedQuotes) -> Self {
        Self::with_placer(orders, quotes, RecordingPlacer::new())
    }

    pub fn with_placer(
        orders: Vec<TargetOrder>,
        quotes: ScriptedQuotes,
        placer: RecordingPlacer,
    ) -> Self {
        let store = Arc::new(FlakyStore::with_orders(orders));
        let notifier = RecordingNotifier::new();
        let engine = Engine::builder()
            .store(store.clone())
            .quotes(Arc::new(quotes.clone()))
            .placer(Arc::new(placer.clone()))
            .notifier(Arc::new(notifier.clone()))
            .build()
            .expect("all collaborators set");

        Self {
            store,
            quotes,
            placer,
            notifier,
            engine: Arc::new(engine),
        }
    }

    pub async fn status(&self, id: &OrderId) -> OrderStatus {
        self.store
            .get_order(id)
            .await
            .expect("store readable")
            .expect("order exists")
            .status()
    }
}
