pub mod config;
pub mod guest;
pub mod rest;
pub mod rsvp;
pub mod treats;

use std::sync::Arc;

use config::PartyConfig;
use rsvp::RsvpStore;

/// Shared application state passed to every HTTP handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<PartyConfig>,
    /// In-memory list of accepted RSVPs.
    pub rsvps: Arc<RsvpStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    pub fn new(config: PartyConfig) -> Self {
        Self {
            config: Arc::new(config),
            rsvps: Arc::new(RsvpStore::new()),
            started_at: std::time::Instant::now(),
        }
    }
}
