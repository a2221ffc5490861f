//! Core domain types for the unit directory.
//!
//! Pure data. No lookup or traversal logic lives here.
//! Coordinates are i64 fixed-point (real degrees * COORD_SCALE). No float.

use serde::{Deserialize, Serialize};

/// Fixed-point scale factor for geographic coordinates.
/// A latitude of 37.5665 is stored as 375_665.
pub const COORD_SCALE: i64 = 10_000;

/// Separator used when composing a unit's full hierarchical name.
pub const FULL_NAME_SEPARATOR: &str = " > ";

// ── Echelon ────────────────────────────────────────────────────────

/// Rank tag of a unit. Used for sorting and labeling only — it does
/// not constrain the parent/child relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Echelon {
    Headquarters,
    Command,
    Corps,
    Division,
    Brigade,
    Regiment,
    Battalion,
    Company,
    DirectUnit,
}

impl Echelon {
    /// Sort key: lower rank number means higher in the org chart.
    pub fn rank(&self) -> u8 {
        match self {
            Echelon::Headquarters => 0,
            Echelon::Command => 1,
            Echelon::Corps => 2,
            Echelon::Division => 3,
            Echelon::Brigade => 4,
            Echelon::Regiment => 5,
            Echelon::Battalion => 6,
            Echelon::Company => 7,
            Echelon::DirectUnit => 8,
        }
    }

    /// Human-readable label for list headers and chips.
    pub fn label(&self) -> &'static str {
        match self {
            Echelon::Headquarters => "Headquarters",
            Echelon::Command => "Command",
            Echelon::Corps => "Corps",
            Echelon::Division => "Division",
            Echelon::Brigade => "Brigade",
            Echelon::Regiment => "Regiment",
            Echelon::Battalion => "Battalion",
            Echelon::Company => "Company",
            Echelon::DirectUnit => "Direct Unit",
        }
    }
}

// ── Role & visibility policy ───────────────────────────────────────

/// Principal role. Wire strings match the legacy session payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_HQ")]
    Headquarters,
    #[serde(rename = "ROLE_DIV")]
    Division,
    #[serde(rename = "ROLE_BN")]
    Battalion,
}

/// How far a principal may browse from their home unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// The entire forest, home unit irrelevant.
    Full,
    /// The home unit and all of its descendants.
    Subtree,
    /// Exactly the home unit, rendered as a locked display.
    Fixed,
}

impl Role {
    /// Exhaustive role → policy mapping. Adding a role is a
    /// compile-time-checked change everywhere policy is decided.
    pub fn policy(&self) -> VisibilityPolicy {
        match self {
            Role::Headquarters => VisibilityPolicy::Full,
            Role::Division => VisibilityPolicy::Subtree,
            Role::Battalion => VisibilityPolicy::Fixed,
        }
    }
}

// ── Unit ───────────────────────────────────────────────────────────

/// Geographic position, fixed-point degrees (`real * COORD_SCALE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoPoint {
    pub lat_e4: i64,
    pub lon_e4: i64,
}

/// A node in the organizational forest.
///
/// `id` is the only reliable join key; `name` is display-only and
/// must never be used for equality across units. `parent_id = None`
/// marks a forest root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub level: Echelon,

    // Presentation decorations. No structural role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Unit {
    /// True when this unit is a forest root.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echelon_rank_is_strictly_ordered() {
        let order = [
            Echelon::Headquarters,
            Echelon::Command,
            Echelon::Corps,
            Echelon::Division,
            Echelon::Brigade,
            Echelon::Regiment,
            Echelon::Battalion,
            Echelon::Company,
            Echelon::DirectUnit,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn role_wire_strings_round_trip() {
        for (role, wire) in [
            (Role::Headquarters, "\"ROLE_HQ\""),
            (Role::Division, "\"ROLE_DIV\""),
            (Role::Battalion, "\"ROLE_BN\""),
        ] {
            assert_eq!(serde_json::to_string(&role).unwrap(), wire);
            let parsed: Role = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unit_serializes_without_absent_decorations() {
        let unit = Unit {
            id: "div-7".to_string(),
            name: "7th Division".to_string(),
            parent_id: Some("corps-2".to_string()),
            level: Echelon::Division,
            position: None,
            risk_score: None,
            unit_type: None,
            region: None,
        };
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["id"], "div-7");
        assert_eq!(json["level"], "division");
        assert!(json.get("risk_score").is_none());
        assert!(json.get("position").is_none());
    }
}
