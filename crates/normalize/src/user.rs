//! User normalization (randomuser shape).
//!
//! The raw record nests its fields (`name`, `login`, `location`, `dob`); the
//! normalized payload flattens them and derives `name` and `location`
//! strings. The raw `login.password` is deliberately never read: secrets do
//! not belong in a derived envelope.

use serde::Deserialize;
use serde_json::Value;

use storelens_core::{EntityKind, Envelope, UserData};

use crate::error::NormalizeError;
use crate::raw::{string_or_unknown, unknown};

const SOURCE: &str = "randomuserapi";

#[derive(Debug, Deserialize)]
struct RawUser {
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    gender: String,
    name: RawName,
    location: RawLocation,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    email: String,
    login: RawLogin,
    dob: RawDob,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    phone: String,
}

#[derive(Debug, Deserialize)]
struct RawName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    state: String,
    #[serde(default = "unknown", deserialize_with = "string_or_unknown")]
    country: String,
}

#[derive(Debug, Deserialize)]
struct RawLogin {
    uuid: String,
    username: String,
}

#[derive(Debug, Deserialize)]
struct RawDob {
    date: String,
}

/// Normalize one raw user record.
///
/// `login.uuid`, `login.username`, `name.first`, `name.last`, `dob.date`,
/// and the `location` object are required; a blank first or last name fails
/// the record rather than deriving a half-empty full name. `gender`,
/// `email`, `phone`, `location.state`, and `location.country` fall back to
/// `"Unknown"`.
pub fn normalize_user(raw: &Value) -> Result<Envelope<UserData>, NormalizeError> {
    let raw = RawUser::deserialize(raw).map_err(|e| NormalizeError::shape(EntityKind::User, e))?;

    if raw.name.first.trim().is_empty() {
        return Err(NormalizeError::BlankField("name.first"));
    }
    if raw.name.last.trim().is_empty() {
        return Err(NormalizeError::BlankField("name.last"));
    }

    Ok(Envelope::new(
        EntityKind::User,
        SOURCE,
        UserData {
            id: raw.login.uuid,
            name: format!("{} {}", raw.name.first, raw.name.last),
            gender: raw.gender,
            email: raw.email,
            // Legacy spacing, kept verbatim: "<state> , <country>".
            location: format!("{} , {}", raw.location.state, raw.location.country),
            user_name: raw.login.username,
            dob: raw.dob.date,
            phone: raw.phone,
        },
    ))
}
