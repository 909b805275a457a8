use serde::{Deserialize, Serialize};

/// Name used when the search service returns a business without one.
pub const UNNAMED_BUSINESS: &str = "Negocio sin nombre";

/// Email value used when the search service did not find a contact address.
pub const EMAIL_NOT_AVAILABLE: &str = "No disponible";

/// A prospected business, normalized and enriched with outreach text.
///
/// Built once per extracted candidate during a search; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedLead {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Google Maps link for the business listing.
    pub maps_link: Option<String>,
    /// Contact email, or [`EMAIL_NOT_AVAILABLE`].
    pub email: String,
    /// Star rating, always within `0..=5`.
    pub stars: u8,
    /// URL-safe identifier derived from `name`, e.g. `"bar-pepe"`.
    pub slug: String,
    pub email_subject: String,
    pub email_body: String,
    pub chat_message: String,
}

impl NormalizedLead {
    /// Returns `true` when the search service supplied a real contact email.
    #[must_use]
    pub fn has_email(&self) -> bool {
        self.email != EMAIL_NOT_AVAILABLE
    }
}

/// The ordered result of one search.
///
/// Ordering is a presentation property imposed by the sorter (ascending by
/// stars); it carries no identity meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadCollection {
    leads: Vec<NormalizedLead>,
}

impl LeadCollection {
    /// Wraps leads that are already in presentation order.
    #[must_use]
    pub fn new(leads: Vec<NormalizedLead>) -> Self {
        Self { leads }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[NormalizedLead] {
        &self.leads
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedLead> {
        self.leads.iter()
    }
}

impl<'a> IntoIterator for &'a LeadCollection {
    type Item = &'a NormalizedLead;
    type IntoIter = std::slice::Iter<'a, NormalizedLead>;

    fn into_iter(self) -> Self::IntoIter {
        self.leads.iter()
    }
}

impl IntoIterator for LeadCollection {
    type Item = NormalizedLead;
    type IntoIter = std::vec::IntoIter<NormalizedLead>;

    fn into_iter(self) -> Self::IntoIter {
        self.leads.into_iter()
    }
}
