use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::JobStore;
use crate::application::services::{JobQueries, ProcessingMessage};

#[derive(Clone)]
pub struct AppState {
    pub job_store: Arc<dyn JobStore>,
    pub queries: Arc<JobQueries>,
    pub sender: mpsc::Sender<ProcessingMessage>,
}

impl AppState {
    pub fn new(job_store: Arc<dyn JobStore>, sender: mpsc::Sender<ProcessingMessage>) -> Self {
        let queries = Arc::new(JobQueries::new(Arc::clone(&job_store)));
        Self {
            job_store,
            queries,
            sender,
        }
    }
}
