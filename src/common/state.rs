use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::readings::ReadingsSnapshot;
use crate::sheets::SheetsClient;

/// Shared handle to the latest poll result.
///
/// The poll task is the single writer and replaces the snapshot wholesale;
/// request handlers take read locks and see last-writer-wins state.
pub type SharedSnapshot = Arc<RwLock<ReadingsSnapshot>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sheets: Arc<SheetsClient>,
    pub snapshot: SharedSnapshot,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, sheets: SheetsClient) -> Self {
        Self {
            config: Arc::new(config),
            sheets: Arc::new(sheets),
            snapshot: Arc::new(RwLock::new(ReadingsSnapshot::default())),
        }
    }
}
