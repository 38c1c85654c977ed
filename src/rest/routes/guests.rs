// rest/routes/guests.rs — Accepted RSVPs as JSON.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppContext;

pub async fn list_guests(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let guests = ctx.rsvps.list().await;
    let list: Vec<Value> = guests
        .iter()
        .map(|g| {
            json!({
                "id": g.id,
                "name": g.name,
                "email": g.email,
                "rsvped_at": g.rsvped_at.to_rfc3339(),
            })
        })
        .collect();
    Json(json!({ "guests": list }))
}
