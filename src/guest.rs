// guest.rs — Guest model + blocked-identity check.
//
// One person is not welcome at this party. `is_mel` decides whether an
// RSVP belongs to her, by exact name or by email address.

use serde::{Deserialize, Serialize};

/// Exact display name of the blocked guest. Compared case-sensitively.
pub const BLOCKED_NAME: &str = "Mel Melitpolski";

/// Email address of the blocked guest. Compared ignoring ASCII case,
/// since mail routing does not care about case either.
pub const BLOCKED_EMAIL: &str = "mel@ubermelon.com";

/// A guest as submitted through the RSVP form. Ephemeral — constructed per
/// request and only persisted (in memory) once the RSVP is accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Guest {
    pub name: String,
    pub email: String,
}

/// Return true if this name/email pair belongs to Mel.
///
/// Either condition alone is enough: the exact full name, or her email in
/// any letter case. Total over all inputs, including empty strings.
pub fn is_mel(name: &str, email: &str) -> bool {
    name == BLOCKED_NAME || email.eq_ignore_ascii_case(BLOCKED_EMAIL)
}
