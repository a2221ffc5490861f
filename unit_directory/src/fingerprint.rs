//! Canonical catalog fingerprinting.
//!
//! Deterministic canonical serialization + SHA-256 over the loaded
//! catalog, so two processes (or two test runs) can assert they are
//! serving the same directory data.
//!
//! Rules:
//!   - Units sorted by id (UTF-8 byte order)
//!   - Fixed field order per unit; absent decorations omitted
//!   - UTF-8 JSON, no whitespace, no float
//!   - schema_version is the first field for identity binding

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::catalog::UnitCatalog;
use crate::domain::Unit;
use crate::CATALOG_SCHEMA_VERSION;

/// Canonical serialization of the catalog to UTF-8 JSON bytes.
pub fn canonical_serialize(catalog: &UnitCatalog) -> Vec<u8> {
    let obj = build_canonical_value(catalog);
    serde_json::to_string(&obj)
        .expect("canonical_serialize: JSON serialization failed")
        .into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn catalog_fingerprint(catalog: &UnitCatalog) -> String {
    let bytes = canonical_serialize(catalog);
    let digest = Sha256::digest(&bytes);
    digest
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

/// Build the canonical serde_json::Value in strict field order.
/// serde_json::Map preserves insertion order (preserve_order).
fn build_canonical_value(catalog: &UnitCatalog) -> Value {
    let mut units: Vec<&Unit> = catalog.iter().collect();
    units.sort_by(|a, b| a.id.cmp(&b.id));

    let units_list: Vec<Value> = units.iter().map(|u| canonical_unit(u)).collect();

    let mut root = Map::new();
    root.insert(
        "schema_version".to_string(),
        Value::from(CATALOG_SCHEMA_VERSION),
    );
    root.insert("units".to_string(), Value::Array(units_list));
    Value::Object(root)
}

fn canonical_unit(unit: &Unit) -> Value {
    let mut map = Map::new();
    map.insert("id".to_string(), Value::String(unit.id.clone()));
    map.insert("name".to_string(), Value::String(unit.name.clone()));
    map.insert(
        "parent_id".to_string(),
        match &unit.parent_id {
            Some(pid) => Value::String(pid.clone()),
            None => Value::Null,
        },
    );
    map.insert(
        "level".to_string(),
        serde_json::to_value(unit.level).expect("echelon serialization failed"),
    );

    if let Some(pos) = unit.position {
        let mut geo = Map::new();
        geo.insert("lat_e4".to_string(), Value::from(pos.lat_e4));
        geo.insert("lon_e4".to_string(), Value::from(pos.lon_e4));
        map.insert("position".to_string(), Value::Object(geo));
    }
    if let Some(score) = unit.risk_score {
        map.insert("risk_score".to_string(), Value::from(score));
    }
    if let Some(unit_type) = &unit.unit_type {
        map.insert("unit_type".to_string(), Value::String(unit_type.clone()));
    }
    if let Some(region) = &unit.region {
        map.insert("region".to_string(), Value::String(region.clone()));
    }

    Value::Object(map)
}
