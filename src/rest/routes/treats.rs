// rest/routes/treats.rs — The menu plus its category summary.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::treats;
use crate::AppContext;

pub async fn get_treats(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let menu = &ctx.config.treats;
    let summary = treats::summarize(menu);
    Json(json!({
        "treats": menu,
        "most_common_type": summary.most_common_type,
        "least_common_type": summary.least_common_type,
    }))
}
