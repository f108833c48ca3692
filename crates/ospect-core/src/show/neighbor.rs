//! OSPF neighbor table parsers ("show ip ospf neighbor" family).
//!
//! Each dialect prints the same table with a different set of timer
//! columns: IOS has the dead timer, NX-OS the adjacency uptime, and
//! IOS-XR both. One row builder covers all three; a timer group that
//! is absent from the dialect's pattern simply stays `None`.

use regex::Regex;
use tracing::debug;

use super::patterns::{IOS_NEIGHBOR_ROW, NXOS_NEIGHBOR_ROW, XR_NEIGHBOR_ROW};
use super::Result;
use crate::coerce::duration_secs;
use crate::models::ospf::OspfNeighbor;
use crate::pattern::{int_field, line_matches, opt_text_field};

fn neighbor_rows(re: &Regex, text: &str) -> Result<Vec<OspfNeighbor>> {
    let rows = line_matches(re, text, |caps| {
        let deadtime = opt_text_field(caps, "deadtime");
        let deadtime_sec = deadtime.as_deref().map(duration_secs).transpose()?;
        let uptime = opt_text_field(caps, "uptime");
        let uptime_sec = uptime.as_deref().map(duration_secs).transpose()?;

        Ok(OspfNeighbor {
            rid: caps["rid"].to_string(),
            priority: int_field(caps, "priority")?,
            state: caps["state"].to_lowercase(),
            role: caps["role"].to_lowercase(),
            deadtime,
            deadtime_sec,
            uptime,
            uptime_sec,
            peer: caps["peer"].to_string(),
            intf: caps["intf"].to_lowercase(),
        })
    })?;
    debug!("parsed {} ospf neighbor rows", rows.len());
    Ok(rows)
}

/// Parse Cisco IOS "show ip ospf neighbor" output.
pub fn ios(text: &str) -> Result<Vec<OspfNeighbor>> {
    neighbor_rows(&IOS_NEIGHBOR_ROW, text)
}

/// Parse Cisco IOS-XR "show ospf neighbor" output.
pub fn iosxr(text: &str) -> Result<Vec<OspfNeighbor>> {
    neighbor_rows(&XR_NEIGHBOR_ROW, text)
}

/// Parse Cisco NX-OS "show ip ospf neighbor" output.
pub fn nxos(text: &str) -> Result<Vec<OspfNeighbor>> {
    neighbor_rows(&NXOS_NEIGHBOR_ROW, text)
}
