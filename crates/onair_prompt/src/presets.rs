//! Curated option lists surfaced by the front end.
//!
//! These mirror the editorial taxonomy the title generator was tuned on.
//! They are plain labels, not closed enums: the category field of a
//! [`onair_core::TitleGeneratorInput`] accepts any string, and these are
//! the suggested starting points.

/// Topic categories offered for title generation.
pub const TOPIC_PRESETS: [&str; 16] = [
    "family (marriage, parents, children)",
    "work (bosses, coworkers, retirement)",
    "health and aging",
    "money",
    "life after divorce or loss",
    "extended-family conflict (in-laws, siblings)",
    "relationships at large",
    "identity and self-worth",
    "dreams and second lives",
    "caregiving",
    "values and generational clashes",
    "secrets and guilt",
    "dating and remarriage",
    "parenting and birth",
    "inner life (burnout, emptiness, self-esteem)",
    "poetic justice (comeuppance, cutting ties)",
];

/// Emotional arcs a story can follow.
pub const EMOTION_CURVES: [&str; 6] = [
    "loss and regret",
    "conflict to reconciliation",
    "isolation to recovery",
    "need for recognition",
    "nostalgia",
    "cathartic punishment",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn presets_are_distinct_and_non_empty() {
        let topics: HashSet<_> = TOPIC_PRESETS.iter().collect();
        assert_eq!(topics.len(), TOPIC_PRESETS.len());
        assert!(TOPIC_PRESETS.iter().all(|t| !t.is_empty()));

        let curves: HashSet<_> = EMOTION_CURVES.iter().collect();
        assert_eq!(curves.len(), EMOTION_CURVES.len());
    }
}
