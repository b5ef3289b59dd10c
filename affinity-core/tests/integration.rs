//! Integration Tests — End-to-End Relationship Flows
//!
//! These tests drive the store the way a play session does: roster setup,
//! scripted point changes, dialogue polling tier-change lines, stat dumps.

use affinity_core::reaction::{UNKNOWN_CHARACTER_REACTION, tier_up_line};
use affinity_core::{
    AffinityConfig, DEFAULT_ROSTER, RelationshipStore, RelationshipTier, SharedRelationshipStore,
    TierUpEvent,
};

fn session() -> RelationshipStore {
    RelationshipStore::from_config(&AffinityConfig::default().roster)
}

// ---------------------------------------------------------------------------
// Brownsugar's route: 25 points, then a large gift that clamps at the ceiling
// ---------------------------------------------------------------------------

#[test]
fn brownsugar_route_end_to_end() {
    let mut store = RelationshipStore::new();
    assert!(store.register("brownsugar", 100));

    // 1. First gift crosses into Acquaintance.
    store.add_points("brownsugar", 25);
    assert_eq!(store.points("brownsugar"), 25);
    assert_eq!(store.tier("brownsugar"), RelationshipTier::Acquaintance);
    assert_eq!(
        store.pending_tier_up(),
        Some(&TierUpEvent {
            character: "brownsugar".to_string(),
            from: RelationshipTier::Stranger,
            to: RelationshipTier::Acquaintance,
        })
    );

    // 2. Large gift clamps at 100; Friend and Close Friend are skipped over
    //    without events of their own, and the unread event is overwritten.
    let change = store.add_points("brownsugar", 100).expect("known character");
    assert_eq!(change.after, 100);
    assert_eq!(store.points("brownsugar"), 100);
    assert_eq!(store.tier("brownsugar"), RelationshipTier::Soulmate);
    assert_eq!(
        store.pending_tier_up(),
        Some(&TierUpEvent {
            character: "brownsugar".to_string(),
            from: RelationshipTier::Acquaintance,
            to: RelationshipTier::Soulmate,
        })
    );
    assert!((store.percentage("brownsugar") - 1.0).abs() < f32::EPSILON);

    // 3. Dialogue reacts once.
    assert_eq!(
        store.consume_tier_up_reaction("brownsugar"),
        tier_up_line(RelationshipTier::Soulmate)
    );
    assert_eq!(store.consume_tier_up_reaction("brownsugar"), "");
    assert_eq!(store.reaction_text("brownsugar"), "I can't imagine my life without you!");
}

#[test]
fn nineteen_to_twenty_fires_acquaintance_line_once() {
    let mut store = session();
    store.add_points("brownsugar", 19);
    assert!(store.pending_tier_up().is_none());

    store.add_points("brownsugar", 1);
    assert_eq!(
        store.consume_tier_up_reaction("brownsugar"),
        "*smiles warmly* I feel like we're getting to know each other better!"
    );
    assert_eq!(store.consume_tier_up_reaction("brownsugar"), "");
}

// ---------------------------------------------------------------------------
// Documented quirk: one shared pending event, last write wins
// ---------------------------------------------------------------------------

#[test]
fn pending_event_is_shared_across_characters() {
    let mut store = session();
    store.add_points("brownsugar", 20);
    store.add_points("character2", 40);

    // Brownsugar's unread event was replaced by character2's.
    assert_eq!(store.consume_tier_up_reaction("brownsugar"), "");
    assert_eq!(
        store.consume_tier_up_reaction("character2"),
        tier_up_line(RelationshipTier::Friend)
    );
}

// ---------------------------------------------------------------------------
// Forgiving lookups and resets
// ---------------------------------------------------------------------------

#[test]
fn unknown_character_never_fails() {
    let mut store = session();
    assert_eq!(store.points("nobody"), 0);
    assert_eq!(store.tier("nobody"), RelationshipTier::Stranger);
    assert_eq!(store.reaction_text("nobody"), UNKNOWN_CHARACTER_REACTION);
    assert!(store.add_points("nobody", 50).is_none());
    assert!(!store.reset(Some("nobody")));
    assert_eq!(store.consume_tier_up_reaction("nobody"), "");
}

#[test]
fn reset_all_returns_everyone_to_stranger() {
    let mut store = session();
    for (i, name) in DEFAULT_ROSTER.iter().enumerate() {
        let delta = i32::try_from(i).expect("small index") * 25;
        store.add_points(name, delta);
    }
    store.consume_tier_up_reaction("character5");
    store.reset(None);

    for name in DEFAULT_ROSTER {
        assert_eq!(store.points(name), 0);
        assert_eq!(store.tier(name), RelationshipTier::Stranger);
    }
    assert!(store.pending_tier_up().is_none());
}

#[test]
fn stats_dump_lists_roster_in_order() {
    let mut store = session();
    store.add_points("character3", 61);
    let report = store.dump_stats();
    let lines = report.lines();
    assert_eq!(lines.len(), DEFAULT_ROSTER.len() + 2);
    assert_eq!(lines[1], "brownsugar: 0/100 (Stranger)");
    assert_eq!(lines[3], "character3: 61/100 (Close Friend)");
}

#[test]
fn configured_roster_and_ceiling() {
    let config = AffinityConfig::from_toml(
        r#"
        [roster]
        characters = ["Mira", "Jun"]
        default_max_points = 200
        "#,
    )
    .expect("valid config");
    let mut store = RelationshipStore::from_config(&config.roster);

    store.add_points("mira", 250);
    assert_eq!(store.points("Mira"), 200);
    assert_eq!(store.tier("MIRA"), RelationshipTier::Soulmate);
    store.add_points("jun", 100);
    assert!((store.percentage("jun") - 0.5).abs() < 1e-6);
}

#[test]
fn shared_store_serves_ui_while_script_writes() {
    let shared = SharedRelationshipStore::new(session());
    let ui = shared.clone();

    shared.add_points("brownsugar", 45);
    assert_eq!(ui.tier("brownsugar"), RelationshipTier::Friend);
    assert!((ui.percentage("brownsugar") - 0.45).abs() < 1e-6);
    assert_eq!(ui.consume_tier_up_reaction("brownsugar"), tier_up_line(RelationshipTier::Friend));
}
