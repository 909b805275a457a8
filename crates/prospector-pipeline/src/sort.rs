use prospector_core::NormalizedLead;

/// Stable ascending sort by star rating. Ties keep extraction order.
#[must_use]
pub fn sort_by_stars(mut leads: Vec<NormalizedLead>) -> Vec<NormalizedLead> {
    leads.sort_by_key(|lead| lead.stars);
    leads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, RawLeadCandidate};
    use serde_json::json;

    fn lead(name: &str, stars: u8) -> NormalizedLead {
        normalize(RawLeadCandidate::from_value(
            json!({ "nombre": name, "estrellas": stars }),
        ))
    }

    fn names(leads: &[NormalizedLead]) -> Vec<&str> {
        leads.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn sorts_ascending_by_stars() {
        let sorted = sort_by_stars(vec![lead("a", 5), lead("b", 1), lead("c", 3)]);
        assert_eq!(names(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_original_order() {
        let sorted = sort_by_stars(vec![
            lead("first", 4),
            lead("low", 2),
            lead("second", 4),
            lead("third", 4),
        ]);
        assert_eq!(names(&sorted), vec!["low", "first", "second", "third"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let once = sort_by_stars(vec![lead("x", 3), lead("y", 0), lead("z", 3)]);
        let twice = sort_by_stars(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(sort_by_stars(Vec::new()).is_empty());
    }
}
