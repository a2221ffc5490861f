//! Startup-time data-integrity validation.
//!
//! Reporting, not throwing: the resolver and visibility filter stay
//! fail-soft at runtime, and this module makes the inconsistencies
//! they tolerate visible when the catalog is loaded. Nothing here
//! panics or aborts the process.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::catalog::UnitCatalog;
use crate::domain::Unit;

// ── Findings ───────────────────────────────────────────────────────

/// What kind of inconsistency a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingCode {
    DuplicateId,
    InvalidIdFormat,
    DanglingParent,
    SelfParent,
    ParentCycle,
    RiskScoreOutOfRange,
}

impl FindingCode {
    fn tag(&self) -> &'static str {
        match self {
            FindingCode::DuplicateId => "duplicate_id",
            FindingCode::InvalidIdFormat => "invalid_id_format",
            FindingCode::DanglingParent => "dangling_parent",
            FindingCode::SelfParent => "self_parent",
            FindingCode::ParentCycle => "parent_cycle",
            FindingCode::RiskScoreOutOfRange => "risk_score_out_of_range",
        }
    }
}

/// One inconsistency in the unit data.
#[derive(Debug, Clone)]
pub struct IntegrityFinding {
    pub code: FindingCode,
    pub unit_id: String,
    pub detail: String,
}

impl fmt::Display for IntegrityFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[integrity:{}] unit {:?}: {}",
            self.code.tag(),
            self.unit_id,
            self.detail
        )
    }
}

/// All findings from one validation pass over the catalog.
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub findings: Vec<IntegrityFinding>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Emit one warning per finding.
    pub fn log(&self) {
        for finding in &self.findings {
            tracing::warn!("{}", finding);
        }
    }
}

impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "catalog integrity: clean");
        }
        writeln!(f, "catalog integrity: {} finding(s)", self.findings.len())?;
        for finding in &self.findings {
            writeln!(f, "  {}", finding)?;
        }
        Ok(())
    }
}

// ── Validation ─────────────────────────────────────────────────────

/// Validate a raw unit list before the catalog index collapses
/// duplicates. This is the complete entry point.
pub fn validate_units(units: &[Unit]) -> IntegrityReport {
    let mut findings = Vec::new();

    check_duplicate_ids(units, &mut findings);
    check_id_format(units, &mut findings);
    check_parent_refs(units, &mut findings);
    check_parent_cycles(units, &mut findings);
    check_risk_scores(units, &mut findings);

    IntegrityReport { findings }
}

/// Validate an already-built catalog. Duplicate ids are invisible at
/// this point (first occurrence wins in the index), so prefer
/// `validate_units` when the raw list is still at hand.
pub fn validate_catalog(catalog: &UnitCatalog) -> IntegrityReport {
    let units: Vec<Unit> = catalog.iter().cloned().collect();
    validate_units(&units)
}

// ── Individual checks (private) ────────────────────────────────────

fn check_duplicate_ids(units: &[Unit], findings: &mut Vec<IntegrityFinding>) {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for unit in units {
        if !seen.insert(unit.id.as_str()) {
            findings.push(IntegrityFinding {
                code: FindingCode::DuplicateId,
                unit_id: unit.id.clone(),
                detail: "id occurs more than once; only the first record is served".to_string(),
            });
        }
    }
}

/// Unit ids must match `[a-zA-Z0-9_-]+`.
fn check_id_format(units: &[Unit], findings: &mut Vec<IntegrityFinding>) {
    for unit in units {
        let valid = !unit.id.is_empty()
            && unit
                .id
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            findings.push(IntegrityFinding {
                code: FindingCode::InvalidIdFormat,
                unit_id: unit.id.clone(),
                detail: "id must match [a-zA-Z0-9_-]+".to_string(),
            });
        }
    }
}

fn check_parent_refs(units: &[Unit], findings: &mut Vec<IntegrityFinding>) {
    let ids: BTreeSet<&str> = units.iter().map(|u| u.id.as_str()).collect();
    for unit in units {
        let Some(parent_id) = unit.parent_id.as_deref() else {
            continue;
        };
        if parent_id == unit.id {
            findings.push(IntegrityFinding {
                code: FindingCode::SelfParent,
                unit_id: unit.id.clone(),
                detail: "unit lists itself as its parent".to_string(),
            });
        } else if !ids.contains(parent_id) {
            findings.push(IntegrityFinding {
                code: FindingCode::DanglingParent,
                unit_id: unit.id.clone(),
                detail: format!("parent_id {:?} does not resolve to any unit", parent_id),
            });
        }
    }
}

/// Iterative colour DFS over the parent edges. White = unvisited,
/// grey = on the current ascent, black = known cycle-free.
fn check_parent_cycles(units: &[Unit], findings: &mut Vec<IntegrityFinding>) {
    let parent_of: BTreeMap<&str, Option<&str>> = units
        .iter()
        .map(|u| (u.id.as_str(), u.parent_id.as_deref()))
        .collect();

    let mut black: BTreeSet<&str> = BTreeSet::new();
    let mut flagged: BTreeSet<&str> = BTreeSet::new();

    for unit in units {
        if black.contains(unit.id.as_str()) {
            continue;
        }
        let mut grey: Vec<&str> = Vec::new();
        let mut grey_set: BTreeSet<&str> = BTreeSet::new();
        let mut current: Option<&str> = Some(unit.id.as_str());

        while let Some(id) = current {
            if black.contains(id) {
                break;
            }
            if !grey_set.insert(id) {
                let cycle: Vec<&str> = grey.iter().skip_while(|m| **m != id).copied().collect();
                if cycle.len() < 2 {
                    // Length-1 cycles are already reported as SelfParent.
                    break;
                }
                // Every member of the cycle gets one finding.
                for member in cycle {
                    if flagged.insert(member) {
                        findings.push(IntegrityFinding {
                            code: FindingCode::ParentCycle,
                            unit_id: member.to_string(),
                            detail: "unit is its own ancestor through the parent chain"
                                .to_string(),
                        });
                    }
                }
                break;
            }
            grey.push(id);
            current = parent_of.get(id).copied().flatten();
        }

        for id in grey {
            black.insert(id);
        }
    }
}

fn check_risk_scores(units: &[Unit], findings: &mut Vec<IntegrityFinding>) {
    for unit in units {
        if let Some(score) = unit.risk_score {
            if score > 100 {
                findings.push(IntegrityFinding {
                    code: FindingCode::RiskScoreOutOfRange,
                    unit_id: unit.id.clone(),
                    detail: format!("risk score {} exceeds 100", score),
                });
            }
        }
    }
}
