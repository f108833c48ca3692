//! OSPF fast-reroute parser ("show ip ospf fast-reroute" family).
//!
//! The per-area table becomes a map keyed `area<id>` so playbooks can
//! address one area directly; a repeated area ID overwrites the
//! earlier row.

use std::collections::BTreeMap;

use tracing::debug;

use super::patterns::FRR_ROW;
use super::Result;
use crate::models::ospf::FrrArea;
use crate::pattern::{int_field, line_matches};

/// Parse Cisco IOS "show ip ospf fast-reroute" output.
pub fn ios(text: &str) -> Result<BTreeMap<String, FrrArea>> {
    let rows = line_matches(&FRR_ROW, text, |caps| {
        Ok(FrrArea {
            id: int_field(caps, "id")?,
            topology: caps["topology"].to_lowercase(),
            pref_pri: caps["pref_pri"].to_lowercase(),
            rlfa: caps["rlfa"].eq_ignore_ascii_case("yes"),
            tilfa: caps["tilfa"].eq_ignore_ascii_case("yes"),
        })
    })?;

    let mut areas = BTreeMap::new();
    for row in rows {
        areas.insert(format!("area{}", row.id), row);
    }
    debug!("parsed {} frr areas", areas.len());
    Ok(areas)
}
