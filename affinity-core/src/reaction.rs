//! Static reaction dialogue keyed by tier and sub-range.

use crate::tier::RelationshipTier;

/// Line spoken by a character the store has never heard of.
pub const UNKNOWN_CHARACTER_REACTION: &str = "I don't know you well enough to say...";

/// Everyday reaction line for a character at `points` within `tier`.
///
/// Each band below Soulmate splits at its midpoint into an "early" and a
/// "late" line.
#[must_use]
pub fn reaction_line(tier: RelationshipTier, points: u32) -> &'static str {
    match tier {
        RelationshipTier::Stranger if points < 10 => "We've just met, but you seem nice!",
        RelationshipTier::Stranger => "I'm starting to feel comfortable around you.",
        RelationshipTier::Acquaintance if points < 30 => "I enjoy talking with you!",
        RelationshipTier::Acquaintance => "You're someone I can rely on.",
        RelationshipTier::Friend if points < 50 => "I'm so glad we're friends!",
        RelationshipTier::Friend => "You're one of my closest friends now!",
        RelationshipTier::CloseFriend if points < 70 => "I trust you completely!",
        RelationshipTier::CloseFriend => "You mean so much to me!",
        RelationshipTier::Soulmate => "I can't imagine my life without you!",
    }
}

/// One-shot line played when a character has just moved into `to`.
///
/// Stranger is only reachable by losing points; it gets the generic line.
#[must_use]
pub fn tier_up_line(to: RelationshipTier) -> &'static str {
    match to {
        RelationshipTier::Acquaintance => {
            "*smiles warmly* I feel like we're getting to know each other better!"
        }
        RelationshipTier::Friend => {
            "*lights up with joy* We're really friends now, aren't we? This makes me so happy!"
        }
        RelationshipTier::CloseFriend => "*blushes* You've become someone really special to me...",
        RelationshipTier::Soulmate => {
            "*tears of joy* You're... you're everything to me! I'm so grateful we found each other!"
        }
        RelationshipTier::Stranger => "*happy expression* Our relationship feels stronger now!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_range_splits() {
        assert_eq!(
            reaction_line(RelationshipTier::Stranger, 9),
            "We've just met, but you seem nice!"
        );
        assert_eq!(
            reaction_line(RelationshipTier::Stranger, 10),
            "I'm starting to feel comfortable around you."
        );
        assert_eq!(reaction_line(RelationshipTier::Acquaintance, 29), "I enjoy talking with you!");
        assert_eq!(
            reaction_line(RelationshipTier::Acquaintance, 30),
            "You're someone I can rely on."
        );
        assert_eq!(reaction_line(RelationshipTier::Friend, 49), "I'm so glad we're friends!");
        assert_eq!(
            reaction_line(RelationshipTier::Friend, 50),
            "You're one of my closest friends now!"
        );
        assert_eq!(reaction_line(RelationshipTier::CloseFriend, 69), "I trust you completely!");
        assert_eq!(reaction_line(RelationshipTier::CloseFriend, 70), "You mean so much to me!");
    }

    #[test]
    fn soulmate_has_a_single_line() {
        assert_eq!(
            reaction_line(RelationshipTier::Soulmate, 80),
            reaction_line(RelationshipTier::Soulmate, 200)
        );
    }

    #[test]
    fn every_tier_has_a_tier_up_line() {
        for tier in RelationshipTier::ALL {
            assert!(!tier_up_line(tier).is_empty());
        }
    }
}
