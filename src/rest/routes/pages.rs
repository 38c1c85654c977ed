// rest/routes/pages.rs — HTML pages for the party site.
//
// No template engine; the views are small enough to render inline. The
// confirmation is the POST response body itself, so no cookie session is
// needed to gate the party details.

use axum::{extract::State, response::Html, Form};
use std::sync::Arc;
use tracing::{info, warn};

use crate::guest::{is_mel, Guest};
use crate::treats;
use crate::AppContext;

pub async fn homepage(State(ctx): State<Arc<AppContext>>) -> Html<String> {
    let title = &ctx.config.party.title;
    let body = format!(
        "<h1>{}</h1>\n<p>We're having a party and you're invited!</p>\n{}",
        escape(title),
        rsvp_form()
    );
    Html(page(title, &body))
}

pub async fn rsvp(State(ctx): State<Arc<AppContext>>, Form(guest): Form<Guest>) -> Html<String> {
    if is_mel(&guest.name, &guest.email) {
        warn!(name = %guest.name, "blocked RSVP attempt");
        let body = format!(
            "<p>Sorry, Mel. This party is not for you.</p>\n{}",
            rsvp_form()
        );
        return Html(page(&ctx.config.party.title, &body));
    }

    let record = ctx.rsvps.record(&guest).await;
    info!(name = %record.name, "RSVP accepted");

    let details = &ctx.config.party;
    let attending = ctx.rsvps.count().await;
    let summary = treats::summarize(&ctx.config.treats);

    let mut menu = String::new();
    for treat in &ctx.config.treats {
        menu.push_str(&format!(
            "<li>{} ({})</li>\n",
            escape(&treat.name),
            escape(&treat.kind)
        ));
    }

    let summary_line = match (&summary.most_common_type, &summary.least_common_type) {
        (Some(most), Some(least)) => format!(
            "<p>Mostly {} on offer; {} is in shortest supply.</p>",
            escape(most),
            escape(least)
        ),
        _ => String::new(),
    };

    let body = format!(
        "<h1>Thanks, {name}!</h1>\n\
         <h2>Party Details</h2>\n\
         <p>When: {when}</p>\n\
         <p>Where: {place}</p>\n\
         <p>{attending} guest(s) attending so far.</p>\n\
         <ul>\n{menu}</ul>\n\
         {summary_line}",
        name = escape(&record.name),
        when = escape(&details.when),
        place = escape(&details.r#where),
    );
    Html(page(&details.title, &body))
}

fn rsvp_form() -> String {
    "<h2>Please RSVP</h2>\n\
     <form method=\"POST\" action=\"/rsvp\">\n\
       <label>Name <input type=\"text\" name=\"name\" required></label>\n\
       <label>Email <input type=\"email\" name=\"email\" required></label>\n\
       <button type=\"submit\">RSVP</button>\n\
     </form>"
        .to_string()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Minimal HTML escaping for user-supplied strings.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>"a" & b</script>"#),
            "&lt;script&gt;&quot;a&quot; &amp; b&lt;/script&gt;"
        );
    }

    #[test]
    fn form_asks_for_rsvp() {
        let form = rsvp_form();
        assert!(form.contains("Please RSVP"));
        assert!(form.contains("action=\"/rsvp\""));
    }
}
