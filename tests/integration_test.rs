use pvp_rank_engine::{source::lua, Ladder, LookupOutcome, RankEngine};

const REGION_FIXTURE: &str = r#"
-- File: region_eu.lua
local achievements={
    { character="thrall-ragnaros", alts={"altchar-ragnaros"}, guid=101, id1=401, name1="Duelist: Season 1", id2=402, name2="Gladiator: Season 3" },
    { character="jaina-twilightshammer", alts={}, guid=102, id1=403, name1="Hero of the Alliance" },
    { character="peaceful-ragnaros", alts={}, guid=103, id1=404, name1="the Patient" },
    { character="broken-ragnaros", alts={"thrall-ragnaros"}, guid=104, id1=405, name1="Rival II: Season 4" },
}

ACHIEVEMENTS_EU = achievements
"#;

fn engine() -> RankEngine {
    let records = lua::parse_str(REGION_FIXTURE);
    RankEngine::new(records, Ladder::standard()).unwrap()
}

#[test]
fn test_end_to_end_lookup() {
    let engine = engine();
    assert_eq!(engine.index_len(), 4);

    let response = engine.lookup("Thrall-Ragnaros");
    assert!(!response.from_cache);
    let result = response.outcome.classification().unwrap();
    assert_eq!(result.counts["duelist"], 1);
    assert_eq!(result.counts["gladiator"], 1);

    let highest = result.highest.as_ref().unwrap();
    assert_eq!(highest.tier_key, "gladiator");
    assert_eq!(highest.match_text, "Gladiator: Season 3");
    assert_eq!(response.announcement(), "thrall-ragnaros: Gladiator");
}

#[test]
fn test_cache_round_trip() {
    let engine = engine();

    let first = engine.lookup("Jaina-TwilightsHammer");
    let second = engine.lookup("jaina-twilightshammer");

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.outcome, second.outcome);

    let stats = engine.cache_stats();
    assert_eq!(stats.total_entries, 1);
    assert_eq!(stats.total_hits, 1);
    assert_eq!(stats.classified_entries, 1);
}

#[test]
fn test_alias_resolves_to_primary_record() {
    let engine = engine();

    let main = engine.lookup("thrall-ragnaros");
    let alias = engine.lookup("ALTCHAR-Ragnaros");

    assert_eq!(alias.canonical_identity.as_deref(), Some("thrall-ragnaros"));
    assert_eq!(main.outcome, alias.outcome);
}

#[test]
fn test_alias_collision_keeps_first_registration() {
    // "thrall-ragnaros" is both a primary identity and another row's
    // alias; the primary registration wins
    let engine = engine();

    let response = engine.lookup("thrall-ragnaros");
    let result = response.outcome.classification().unwrap();
    assert_eq!(result.highest.as_ref().unwrap().tier_key, "gladiator");
}

#[test]
fn test_regional_pair_tier() {
    let engine = engine();

    let response = engine.lookup("jaina-twilightshammer");
    let result = response.outcome.classification().unwrap();
    assert_eq!(result.counts["hero"], 1);
    assert_eq!(result.highest.as_ref().unwrap().label, "Hero");
}

#[test]
fn test_not_seen_vs_empty_history() {
    let engine = engine();

    let unknown = engine.lookup("Nobody-Nowhere");
    assert_eq!(unknown.outcome, LookupOutcome::NotSeen);
    assert_eq!(unknown.announcement(), "nobody-nowhere: no rated history");

    let peaceful = engine.lookup("Peaceful-Ragnaros");
    let result = peaceful.outcome.classification().unwrap();
    assert!(result.is_empty_history());
    assert_ne!(peaceful.outcome, LookupOutcome::NotSeen);
}

#[test]
fn test_custom_ladder_from_json() {
    let ladder = Ladder::from_json(
        r#"{
            "tiers": [
                { "key": "duelist", "kind": "prefix", "prefix": "Duelist",
                  "meta": { "label": "Duelist" } },
                { "key": "gladiator", "kind": "prefix", "prefix": "Gladiator:",
                  "meta": { "label": "Gladiator" } }
            ]
        }"#,
    )
    .unwrap();
    let engine = RankEngine::new(lua::parse_str(REGION_FIXTURE), ladder).unwrap();

    let response = engine.lookup("thrall-ragnaros");
    let result = response.outcome.classification().unwrap();
    assert_eq!(result.counts.len(), 2);
    assert_eq!(result.counts["duelist"], 1);
    assert_eq!(result.counts["gladiator"], 1);
}
