//! Store and resolver properties over the fixture catalog.

use std::fs;
use std::path::PathBuf;

use unit_directory::catalog::UnitCatalog;
use unit_directory::domain::Echelon;
use unit_directory::fingerprint::catalog_fingerprint;
use unit_directory::resolver::{descendants, full_name, has_children, path_to};

fn load_fixture_catalog() -> UnitCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalog.json");
    let data = fs::read_to_string(&path).expect("Failed to read fixture catalog.json");
    UnitCatalog::from_json_str(&data).expect("Failed to parse fixture catalog.json")
}

// ─────────────────────────────────────────────────────────────
// Path properties

#[test]
fn every_path_ends_at_the_unit_and_follows_parent_edges() {
    let catalog = load_fixture_catalog();
    for unit in catalog.iter() {
        let path = path_to(&catalog, &unit.id);
        assert!(!path.is_empty(), "path for {} must not be empty", unit.id);
        assert_eq!(path.last().unwrap().id, unit.id);
        assert!(path.first().unwrap().is_root());
        for pair in path.windows(2) {
            assert_eq!(
                pair[1].parent_id.as_deref(),
                Some(pair[0].id.as_str()),
                "consecutive path entries must be parent/child"
            );
        }
    }
}

#[test]
fn path_for_unknown_id_is_empty() {
    let catalog = load_fixture_catalog();
    assert!(path_to(&catalog, "no-such-unit").is_empty());
    assert_eq!(full_name(&catalog, "no-such-unit"), "");
}

#[test]
fn full_name_joins_path_names() {
    let catalog = load_fixture_catalog();
    assert_eq!(
        full_name(&catalog, "div-1"),
        "Ground Operations Command > I Corps > 1st Infantry Division"
    );
    assert_eq!(
        full_name(&catalog, "bn-111"),
        "Ground Operations Command > I Corps > 1st Infantry Division > 11th Brigade > 111th Battalion"
    );
    assert_eq!(full_name(&catalog, "hq-aviation"), "Aviation Operations Command");
}

// ─────────────────────────────────────────────────────────────
// Children and roots

#[test]
fn roots_are_exactly_the_parentless_units() {
    let catalog = load_fixture_catalog();
    let root_ids: Vec<&str> = catalog.roots().iter().map(|u| u.id.as_str()).collect();
    assert_eq!(root_ids, vec!["hq-ground", "hq-aviation"]);
    for unit in catalog.iter() {
        assert_eq!(unit.is_root(), root_ids.contains(&unit.id.as_str()));
    }
}

#[test]
fn children_preserve_data_order_not_name_order() {
    let catalog = load_fixture_catalog();
    let kids: Vec<&str> = catalog
        .children(Some("hq-ground"))
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    assert_eq!(kids, vec!["corps-1", "corps-2", "medcmd-direct"]);
}

#[test]
fn has_children_matches_child_listing() {
    let catalog = load_fixture_catalog();
    assert!(has_children(&catalog, "div-1"));
    assert!(!has_children(&catalog, "bn-111"));
    assert!(!has_children(&catalog, "medcmd-direct"));
}

// ─────────────────────────────────────────────────────────────
// Descendants and acyclicity

#[test]
fn descendants_exclude_self_and_forest_is_acyclic() {
    let catalog = load_fixture_catalog();
    for unit in catalog.iter() {
        let descendant_ids: Vec<&str> = descendants(&catalog, &unit.id)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert!(
            !descendant_ids.contains(&unit.id.as_str()),
            "{} must not be its own descendant",
            unit.id
        );
        // No unit appears twice in its own ancestry.
        let path = path_to(&catalog, &unit.id);
        let mut seen = std::collections::BTreeSet::new();
        for entry in &path {
            assert!(seen.insert(entry.id.as_str()), "cycle through {}", entry.id);
        }
    }
}

#[test]
fn descendants_of_a_subtree_are_set_equal_to_expectation() {
    let catalog = load_fixture_catalog();
    let mut ids: Vec<&str> = descendants(&catalog, "div-1")
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["bde-11", "bde-12", "bn-111", "bn-112", "bn-121"]);

    assert!(descendants(&catalog, "bn-111").is_empty());
    assert!(descendants(&catalog, "no-such-unit").is_empty());
}

#[test]
fn resolver_calls_are_idempotent() {
    let catalog = load_fixture_catalog();
    for id in ["bn-111", "corps-2", "hq-ground", "avn-bn-101"] {
        let p1: Vec<String> = path_to(&catalog, id).iter().map(|u| u.id.clone()).collect();
        let p2: Vec<String> = path_to(&catalog, id).iter().map(|u| u.id.clone()).collect();
        assert_eq!(p1, p2);

        let d1: Vec<String> = descendants(&catalog, id).iter().map(|u| u.id.clone()).collect();
        let d2: Vec<String> = descendants(&catalog, id).iter().map(|u| u.id.clone()).collect();
        assert_eq!(d1, d2);
    }
}

// ─────────────────────────────────────────────────────────────
// Fail-soft tolerance for malformed data

#[test]
fn dangling_parent_yields_a_shorter_path() {
    let data = r#"[
        {"id": "orphan", "name": "Orphan Brigade", "parent_id": "ghost", "level": "brigade"},
        {"id": "child", "name": "Orphan Child", "parent_id": "orphan", "level": "battalion"}
    ]"#;
    let catalog = UnitCatalog::from_json_str(data).unwrap();
    let path: Vec<&str> = path_to(&catalog, "child").iter().map(|u| u.id.as_str()).collect();
    assert_eq!(path, vec!["orphan", "child"]);
    assert_eq!(full_name(&catalog, "child"), "Orphan Brigade > Orphan Child");
}

#[test]
fn parent_cycle_terminates_path_resolution() {
    let data = r#"[
        {"id": "a", "name": "A", "parent_id": "b", "level": "division"},
        {"id": "b", "name": "B", "parent_id": "a", "level": "division"}
    ]"#;
    let catalog = UnitCatalog::from_json_str(data).unwrap();
    let path = path_to(&catalog, "a");
    assert_eq!(path.len(), 2);
    assert_eq!(path.last().unwrap().id, "a");
}

// ─────────────────────────────────────────────────────────────
// Fingerprint

#[test]
fn fingerprint_is_deterministic_across_loads() {
    let f1 = catalog_fingerprint(&load_fixture_catalog());
    let f2 = catalog_fingerprint(&load_fixture_catalog());
    assert_eq!(f1, f2);
    assert_eq!(f1.len(), 64);
    assert!(f1.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn fingerprint_changes_when_a_unit_changes() {
    let catalog = load_fixture_catalog();
    let baseline = catalog_fingerprint(&catalog);

    let mut units: Vec<_> = catalog.iter().cloned().collect();
    units[0].name.push_str(" (renamed)");
    let edited = UnitCatalog::from_units(units);
    assert_ne!(baseline, catalog_fingerprint(&edited));

    let mut units: Vec<_> = catalog.iter().cloned().collect();
    units.retain(|u| u.level != Echelon::DirectUnit);
    let trimmed = UnitCatalog::from_units(units);
    assert_ne!(baseline, catalog_fingerprint(&trimmed));
}
