//! LSA database-summary parsers
//! ("show ip ospf database database-summary" family).
//!
//! The per-area rollups precede the process rollup in the output;
//! both are parsed independently, so a truncated capture missing the
//! process section still yields its areas. The shared row builder
//! works for both dialects because the capture names match; only the
//! patterns differ.

use regex::Captures;
use tracing::debug;

use super::patterns::{
    IOS_DBSUM_AREA, IOS_DBSUM_PROCESS, NXOS_DBSUM_AREA, NXOS_DBSUM_PROCESS,
};
use super::Result;
use crate::models::ospf::{AreaDbSummary, DbSummary, ProcessDbSummary};
use crate::pattern::{block_matches, int_field, scalar_field, single_match};

fn process_counts(caps: &Captures) -> Result<ProcessDbSummary> {
    Ok(ProcessDbSummary {
        process_id: int_field(caps, "process_id")?,
        router_lsas: int_field(caps, "router")?,
        network_lsas: int_field(caps, "network")?,
        summary_net_lsas: int_field(caps, "summary_net")?,
        summary_asbr_lsas: int_field(caps, "summary_asbr")?,
        type7_lsas: int_field(caps, "type7")?,
        type5_lsas: int_field(caps, "type5")?,
    })
}

fn area_counts(caps: &Captures) -> Result<AreaDbSummary> {
    Ok(AreaDbSummary {
        id: scalar_field(caps, "id"),
        router_lsas: int_field(caps, "router")?,
        network_lsas: int_field(caps, "network")?,
        summary_net_lsas: int_field(caps, "summary_net")?,
        summary_asbr_lsas: int_field(caps, "summary_asbr")?,
        type7_lsas: int_field(caps, "type7")?,
    })
}

/// Parse Cisco IOS "show ip ospf database database-summary" output.
/// The row labels are shared with IOS-XR, so this covers both.
pub fn ios(text: &str) -> Result<DbSummary> {
    let process = single_match(&IOS_DBSUM_PROCESS, text, process_counts)?;
    let areas = block_matches(&IOS_DBSUM_AREA, text, area_counts)?;
    debug!("parsed ios database summary: {} areas", areas.len());
    Ok(DbSummary { process, areas })
}

/// Parse Cisco NX-OS "show ip ospf database database-summary" output.
pub fn nxos(text: &str) -> Result<DbSummary> {
    let process = single_match(&NXOS_DBSUM_PROCESS, text, process_counts)?;
    let areas = block_matches(&NXOS_DBSUM_AREA, text, area_counts)?;
    debug!("parsed nx-os database summary: {} areas", areas.len());
    Ok(DbSummary { process, areas })
}
