use std::sync::Arc;

use crate::services::SubmissionService;
use crate::store::SubmissionStore;
use crate::utils::flash::FlashStore;

#[derive(Clone)]
pub struct AppState {
    pub submissions: SubmissionService,
    pub flash: Arc<FlashStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            submissions: SubmissionService::new(store),
            flash: Arc::new(FlashStore::default()),
        }
    }

    pub fn with_flash(mut self, flash: FlashStore) -> Self {
        self.flash = Arc::new(flash);
        self
    }
}
