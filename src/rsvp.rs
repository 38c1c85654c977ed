// rsvp.rs — In-memory store of accepted RSVPs.
//
// No persistence: the guest list lives for the process lifetime. Callers
// check `is_mel` before recording; the store itself accepts anything.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::guest::Guest;

/// One accepted RSVP.
#[derive(Debug, Clone, Serialize)]
pub struct RsvpRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub rsvped_at: DateTime<Utc>,
}

/// Shared in-process guest list.
#[derive(Debug, Default)]
pub struct RsvpStore {
    guests: RwLock<Vec<RsvpRecord>>,
}

impl RsvpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted RSVP and return the stored row.
    pub async fn record(&self, guest: &Guest) -> RsvpRecord {
        let record = RsvpRecord {
            id: Uuid::new_v4().to_string(),
            name: guest.name.clone(),
            email: guest.email.clone(),
            rsvped_at: Utc::now(),
        };
        self.guests.write().await.push(record.clone());
        record
    }

    pub async fn list(&self) -> Vec<RsvpRecord> {
        self.guests.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.guests.read().await.len()
    }
}
