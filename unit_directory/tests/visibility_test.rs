//! Role visibility policies over the fixture catalog.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use unit_directory::catalog::UnitCatalog;
use unit_directory::domain::Role;
use unit_directory::resolver::descendants;
use unit_directory::visibility::{accessible_unit_ids, selectable_units};

fn load_fixture_catalog() -> UnitCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalog.json");
    let data = fs::read_to_string(&path).expect("Failed to read fixture catalog.json");
    UnitCatalog::from_json_str(&data).expect("Failed to parse fixture catalog.json")
}

#[test]
fn full_access_sees_every_unit_regardless_of_home() {
    let catalog = load_fixture_catalog();
    let all_ids: BTreeSet<String> = catalog.iter().map(|u| u.id.clone()).collect();

    for home in ["bn-111", "hq-ground", "not-a-unit"] {
        assert_eq!(accessible_unit_ids(&catalog, Role::Headquarters, home), all_ids);
    }

    let selectable = selectable_units(&catalog, Role::Headquarters, "bn-111");
    let roots: Vec<&str> = selectable.roots_to_show.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(roots, vec!["hq-ground", "hq-aviation"]);
    assert!(!selectable.is_fixed_selection);
}

#[test]
fn subtree_access_is_home_plus_descendants() {
    let catalog = load_fixture_catalog();
    let accessible = accessible_unit_ids(&catalog, Role::Division, "div-1");

    let mut expected: BTreeSet<String> = descendants(&catalog, "div-1")
        .iter()
        .map(|u| u.id.clone())
        .collect();
    expected.insert("div-1".to_string());
    assert_eq!(accessible, expected);

    // Nothing above or beside the home unit leaks in.
    assert!(!accessible.contains("corps-1"));
    assert!(!accessible.contains("div-2"));
    assert!(!accessible.contains("hq-aviation"));

    let selectable = selectable_units(&catalog, Role::Division, "div-1");
    let roots: Vec<&str> = selectable.roots_to_show.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(roots, vec!["div-1"]);
    assert!(!selectable.is_fixed_selection);
}

#[test]
fn fixed_access_is_exactly_the_home_unit() {
    let catalog = load_fixture_catalog();
    let accessible = accessible_unit_ids(&catalog, Role::Battalion, "bn-112");
    assert_eq!(accessible, BTreeSet::from(["bn-112".to_string()]));

    let selectable = selectable_units(&catalog, Role::Battalion, "bn-112");
    assert!(selectable.is_fixed_selection);
    let roots: Vec<&str> = selectable.roots_to_show.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(roots, vec!["bn-112"]);
}

#[test]
fn missing_home_unit_fails_closed_not_open() {
    let catalog = load_fixture_catalog();

    for role in [Role::Division, Role::Battalion] {
        let accessible = accessible_unit_ids(&catalog, role, "retired-unit");
        assert!(accessible.is_empty(), "{:?} must fail closed", role);

        let selectable = selectable_units(&catalog, role, "retired-unit");
        assert!(selectable.roots_to_show.is_empty());
    }
}

#[test]
fn subtree_scenario_from_a_three_level_chain() {
    // A (root) → B → C plus an unrelated root D.
    let data = r#"[
        {"id": "a", "name": "A", "parent_id": null, "level": "command"},
        {"id": "b", "name": "B", "parent_id": "a", "level": "division"},
        {"id": "c", "name": "C", "parent_id": "b", "level": "brigade"},
        {"id": "d", "name": "D", "parent_id": null, "level": "command"}
    ]"#;
    let catalog = UnitCatalog::from_json_str(data).unwrap();

    let accessible = accessible_unit_ids(&catalog, Role::Division, "b");
    assert_eq!(
        accessible,
        BTreeSet::from(["b".to_string(), "c".to_string()])
    );
    assert!(!accessible.contains("a"));
    assert!(!accessible.contains("d"));
}
