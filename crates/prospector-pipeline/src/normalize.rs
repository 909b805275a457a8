//! Typing the untrusted candidate records returned by the search service.
//!
//! Candidates are all-optional at the boundary; [`normalize`] fills in the
//! defaults, derives the slug and attaches the outreach templates in one pass.

use prospector_core::{slugify, NormalizedLead, EMAIL_NOT_AVAILABLE, UNNAMED_BUSINESS};
use serde::Deserialize;
use serde_json::Value;

use crate::templates::OutreachMessages;

/// One candidate record as the search service sent it.
///
/// Every field is kept as raw JSON so a wrongly typed value degrades to a
/// default instead of failing the whole search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLeadCandidate {
    #[serde(default)]
    pub nombre: Option<Value>,
    #[serde(default)]
    pub direccion: Option<Value>,
    #[serde(default)]
    pub telefono: Option<Value>,
    #[serde(default, rename = "enlaceMaps")]
    pub enlace_maps: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub estrellas: Option<Value>,
}

impl RawLeadCandidate {
    /// Reads a candidate from one element of the extracted array.
    /// Non-object elements become an empty candidate.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Normalizes one candidate. Never fails.
#[must_use]
pub fn normalize(candidate: RawLeadCandidate) -> NormalizedLead {
    let name = text(candidate.nombre.as_ref()).unwrap_or_else(|| UNNAMED_BUSINESS.to_string());

    let mut slug = slugify(&name);
    if slug.is_empty() {
        slug = slugify(UNNAMED_BUSINESS);
    }

    let messages = OutreachMessages::render(&name, &slug);

    NormalizedLead {
        address: text(candidate.direccion.as_ref()),
        phone: text(candidate.telefono.as_ref()),
        maps_link: text(candidate.enlace_maps.as_ref()),
        email: text(candidate.email.as_ref()).unwrap_or_else(|| EMAIL_NOT_AVAILABLE.to_string()),
        stars: stars(candidate.estrellas.as_ref()),
        name,
        slug,
        email_subject: messages.email_subject,
        email_body: messages.email_body,
        chat_message: messages.chat_message,
    }
}

/// Normalizes every extracted element, preserving order.
#[must_use]
pub fn normalize_all(values: Vec<Value>) -> Vec<NormalizedLead> {
    values
        .into_iter()
        .map(|value| normalize(RawLeadCandidate::from_value(value)))
        .collect()
}

/// Strings are trimmed and blank ones dropped; numbers become their text.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn stars(value: Option<&Value>) -> u8 {
    let rating = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    rating.map_or(0, clamp_rating)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_rating(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    // Clamped to 0..=5 before the cast.
    rating.round().clamp(0.0, 5.0) as u8
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
