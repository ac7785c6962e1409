//! Literal content tables driving the page sections.
//!
//! Everything on the page renders from these constants. They are defined
//! once at module scope, never mutated, and kept in authorial order (the
//! captain leads the roster); the list sections render them as-is, with no
//! sorting, filtering, or validation.

use serde::Serialize;

/// One tile in the "Who We Are" core-values grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CoreValue {
    /// Display name, unique within [`CORE_VALUES`]
    pub name: &'static str,
}

/// One roster entry in the "Our Team" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    /// Member name, including their role suffix where they have one
    pub name: &'static str,
    /// Personal tagline, rendered wrapped in quotation marks
    pub quote: &'static str,
}

/// One card in the "What We Do" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectHighlight {
    /// Campaign title
    pub title: &'static str,
    /// Short pitch shown under the title
    pub description: &'static str,
}

/// The single client quote in "What People Say".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Quote body, rendered wrapped in quotation marks
    pub quote: &'static str,
    /// Who said it
    pub attribution: &'static str,
}

/// Core values shown in the about section, in display order.
pub const CORE_VALUES: &[CoreValue] = &[
    CoreValue { name: "Innovation" },
    CoreValue { name: "Collaboration" },
    CoreValue { name: "Creativity" },
    CoreValue { name: "Impact" },
];

/// Team roster, captain first.
pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Alen Jofi (Captain)",
        quote: "Leading with vision and passion.",
    },
    TeamMember {
        name: "Aleena (Vice Captain)",
        quote: "Turning ideas into impact.",
    },
    TeamMember {
        name: "Subin",
        quote: "Building logic with purpose.",
    },
    TeamMember {
        name: "Joyal",
        quote: "Strategizing success, one step at a time.",
    },
    TeamMember {
        name: "Riya",
        quote: "Designing experiences that speak.",
    },
    TeamMember {
        name: "Shreya",
        quote: "Crafting words that connect hearts.",
    },
    TeamMember {
        name: "Liza",
        quote: "Animating ideas into motion.",
    },
    TeamMember {
        name: "Aksa",
        quote: "Researching insights that drive innovation.",
    },
];

/// Project highlights shown in the work section.
pub const PROJECT_HIGHLIGHTS: &[ProjectHighlight] = &[ProjectHighlight {
    title: "GymX Advertisement Campaign",
    description: "A high-impact digital and social media campaign designed to energize and \
                  empower the GymX brand. From visuals to voice, Go Getters made GymX a \
                  lifestyle statement.",
}];

/// The one testimonial this version of the page carries.
pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "Working with Go Getters was a game-changer. Their creative energy is unmatched.",
    attribution: "– Client Partner",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn core_values_nonempty_and_unique() {
        assert!(CORE_VALUES.iter().all(|v| !v.name.is_empty()));
        let names: HashSet<_> = CORE_VALUES.iter().map(|v| v.name).collect();
        assert_eq!(names.len(), CORE_VALUES.len());
    }

    #[test]
    fn team_members_nonempty() {
        assert!(!TEAM_MEMBERS.is_empty());
        for member in TEAM_MEMBERS {
            assert!(!member.name.is_empty());
            assert!(!member.quote.is_empty());
        }
    }

    #[test]
    fn captain_leads_the_roster() {
        assert_eq!(TEAM_MEMBERS[0].name, "Alen Jofi (Captain)");
        assert_eq!(TEAM_MEMBERS[0].quote, "Leading with vision and passion.");
    }

    #[test]
    fn project_highlights_nonempty() {
        for project in PROJECT_HIGHLIGHTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
        }
    }

    #[test]
    fn testimonial_nonempty() {
        assert!(!TESTIMONIAL.quote.is_empty());
        assert!(!TESTIMONIAL.attribution.is_empty());
    }
}
