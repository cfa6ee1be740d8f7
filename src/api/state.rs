use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::league::League;

/// Shared session. Result entry holds the write lock across the whole
/// check-and-set, so one fixture can only be recorded once.
#[derive(Clone)]
pub struct AppState {
    pub league: Arc<RwLock<League>>,

    /// Results log that accepted submissions are appended to, if any
    pub results_log: Option<Arc<PathBuf>>,
}

impl AppState {
    pub fn new(league: League) -> Self {
        Self {
            league: Arc::new(RwLock::new(league)),
            results_log: None,
        }
    }

    pub fn with_results_log(mut self, path: PathBuf) -> Self {
        self.results_log = Some(Arc::new(path));
        self
    }
}
