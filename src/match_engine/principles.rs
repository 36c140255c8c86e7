//! The fixed principle catalogue and lookups over it.
//!
//! Declaration order is the order principles are rendered in; it never changes.

use crate::match_engine::models::{Icon, Principle};

pub const TITLE: &str =
    "Erich Morisse's moderately accurate, and completely AI Generated Resume Game\u{2122}";

pub const PROMPT: &str = "Match Erich's principles with the corresponding outcome.";

pub const COMPLETION_BANNER: &str = "Congratulations! You've matched all principles!";

pub static PRINCIPLES: [Principle; 6] = [
    Principle {
        name: "Headline",
        icon: Icon::ArrowUpRight,
        outcome: "Transforms complex AI into business-driving solutions",
    },
    Principle {
        name: "Unexpected",
        icon: Icon::Brain,
        outcome: "Turned AI experiment into 12+ internal tools",
    },
    Principle {
        name: "Concrete",
        icon: Icon::FileText,
        outcome: "Launched Red Hat's first AI product for infrastructure code",
    },
    Principle {
        name: "Credible",
        icon: Icon::TrendingUp,
        outcome: "20+ years turning cutting-edge tech into market leaders",
    },
    Principle {
        name: "Passionate",
        icon: Icon::Heart,
        outcome: "Making AI accessible and valuable",
    },
    Principle {
        name: "Results",
        icon: Icon::BookOpen,
        outcome: "42% increase in 'cloud tco' search on Google following report",
    },
];

pub fn principle_by_name(name: &str) -> Option<&'static Principle> {
    PRINCIPLES.iter().find(|p| p.name == name)
}

pub fn principle_by_outcome(text: &str) -> Option<&'static Principle> {
    PRINCIPLES.iter().find(|p| p.outcome == text)
}

/// Outcome texts in declaration order (the unshuffled multiset).
pub fn outcome_texts() -> Vec<&'static str> {
    PRINCIPLES.iter().map(|p| p.outcome).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_outcomes_are_unique() {
        let names: HashSet<_> = PRINCIPLES.iter().map(|p| p.name).collect();
        let outcomes: HashSet<_> = PRINCIPLES.iter().map(|p| p.outcome).collect();
        assert_eq!(names.len(), PRINCIPLES.len());
        assert_eq!(outcomes.len(), PRINCIPLES.len());
    }

    #[test]
    fn lookups_resolve_both_ways() {
        for p in &PRINCIPLES {
            assert_eq!(principle_by_name(p.name).map(|x| x.outcome), Some(p.outcome));
            assert_eq!(principle_by_outcome(p.outcome).map(|x| x.name), Some(p.name));
        }
        assert!(principle_by_name("headline").is_none(), "lookup is case-sensitive");
        assert!(principle_by_outcome("").is_none());
    }
}
