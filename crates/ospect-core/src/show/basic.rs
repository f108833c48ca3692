//! OSPF basic-config parsers ("show ospf" family).
//!
//! The process header is a single multi-line match; router-role flags
//! come from substring probes over the whole text because the phrases
//! float between versions; areas are repeating blocks. A missing
//! header never suppresses the area scan.

use regex::Captures;
use tracing::debug;

use super::patterns::{IOS_AREA, IOS_PROCESS, NXOS_AREA, NXOS_PROCESS, XR_AREA, XR_PROCESS};
use super::Result;
use crate::coerce::dotted_decimal_value;
use crate::models::ospf::{OspfArea, OspfBasic, OspfProcess};
use crate::pattern::{block_matches, int_field, opt_int_field, single_match};

/// Area type defaults to standard when the CLI prints no type line.
fn area_type(caps: &Captures) -> String {
    match caps.name("type") {
        Some(token) => token.as_str().to_lowercase(),
        None => "standard".to_string(),
    }
}

/// Area block with a numeric ID (IOS and IOS-XR). The LFA interface
/// count only exists in the IOS-XR pattern.
fn area_record(caps: &Captures) -> Result<OspfArea> {
    Ok(OspfArea {
        id: int_field(caps, "id")?,
        id_dd: None,
        num_intfs: int_field(caps, "num_intfs")?,
        area_type: area_type(caps),
        frr_intfs: opt_int_field(caps, "frr_intfs")?,
    })
}

/// Area block with a dotted-decimal ID (NX-OS); the numeric form is
/// derived so areas compare across dialects.
fn nxos_area_record(caps: &Captures) -> Result<OspfArea> {
    let id_dd = caps["id_dd"].to_string();
    Ok(OspfArea {
        id: dotted_decimal_value(&id_dd)?,
        id_dd: Some(id_dd),
        num_intfs: int_field(caps, "num_intfs")?,
        area_type: area_type(caps),
        frr_intfs: None,
    })
}

/// Process header fields shared by every dialect. The stub-router
/// probe differs per dialect ("router-LSAs" vs "router LSA").
fn process_record(caps: &Captures, text: &str, stub_probe: &str) -> Result<OspfProcess> {
    Ok(OspfProcess {
        id: int_field(caps, "id")?,
        rid: caps["rid"].to_string(),
        init_spf: int_field(caps, "init_spf")?,
        min_spf: int_field(caps, "min_spf")?,
        max_spf: int_field(caps, "max_spf")?,
        ref_bw: opt_int_field(caps, "ref_bw")?,
        is_abr: text.contains("area border"),
        is_asbr: text.contains("autonomous system boundary"),
        is_stub_rtr: text.contains(stub_probe),
        has_ispf: None,
        has_bfd: None,
        has_ttlsec: None,
    })
}

/// Parse Cisco IOS "show ip ospf" output.
pub fn ios(text: &str) -> Result<OspfBasic> {
    let process = single_match(&IOS_PROCESS, text, |caps| {
        let mut process = process_record(caps, text, "Originating router-LSAs with max")?;
        // Feature lines only IOS prints.
        process.has_ispf = Some(text.contains("Incremental-SPF enabled"));
        process.has_bfd = Some(text.contains("BFD is enabled"));
        process.has_ttlsec = Some(text.contains("Strict TTL checking enabled"));
        Ok(process)
    })?;
    let areas = block_matches(&IOS_AREA, text, area_record)?;
    debug!("parsed ios ospf config: {} areas", areas.len());
    Ok(OspfBasic { process, areas })
}

/// Parse Cisco IOS-XR "show ospf" output.
pub fn iosxr(text: &str) -> Result<OspfBasic> {
    let process = single_match(&XR_PROCESS, text, |caps| {
        process_record(caps, text, "Originating router-LSAs with max")
    })?;
    let areas = block_matches(&XR_AREA, text, area_record)?;
    debug!("parsed ios-xr ospf config: {} areas", areas.len());
    Ok(OspfBasic { process, areas })
}

/// Parse Cisco NX-OS "show ip ospf" output.
pub fn nxos(text: &str) -> Result<OspfBasic> {
    let process = single_match(&NXOS_PROCESS, text, |caps| {
        process_record(caps, text, "Originating router LSA with max")
    })?;
    let areas = block_matches(&NXOS_AREA, text, nxos_area_record)?;
    debug!("parsed nx-os ospf config: {} areas", areas.len());
    Ok(OspfBasic { process, areas })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const IOS_CONFIG: &str = "\
 Routing Process \"ospf 1\" with ID 10.0.0.1
 Start time: 00:00:11.132, Time elapsed: 1d02h
 Supports only single TOS(TOS0) routes
 Supports opaque LSA
 It is an area border and autonomous system boundary router
 Originating router-LSAs with maximum metric
    Condition: on startup for 300 seconds, State: inactive
 Initial SPF schedule delay 50 msecs
 Minimum hold time between two consecutive SPFs 200 msecs
 Maximum wait time between two consecutive SPFs 5000 msecs
 Incremental-SPF disabled
 BFD is enabled in strict mode
 Strict TTL checking enabled, up to 2 hops allowed
 Reference bandwidth unit is 100 mbps
    Area BACKBONE(0)
        Number of interfaces in this area is 3
        Area has no authentication
        SPF algorithm last executed 00:01:25.028 ago
    Area 51
        Number of interfaces in this area is 1
        It is a NSSA area
        Area has no authentication
";

    #[test]
    fn test_ios_process_header() {
        let config = ios(IOS_CONFIG).unwrap();
        let process = config.process.unwrap();
        assert_eq!(process.id, 1);
        assert_eq!(process.rid, "10.0.0.1");
        assert_eq!(process.init_spf, 50);
        assert_eq!(process.min_spf, 200);
        assert_eq!(process.max_spf, 5000);
        assert_eq!(process.ref_bw, Some(100));
    }

    #[test]
    fn test_ios_flags_follow_marker_phrases() {
        let config = ios(IOS_CONFIG).unwrap();
        let process = config.process.unwrap();
        assert!(process.is_abr);
        assert!(process.is_asbr);
        assert!(process.is_stub_rtr);
        // "Incremental-SPF disabled" is not the enabled phrase.
        assert_eq!(process.has_ispf, Some(false));
        assert_eq!(process.has_bfd, Some(true));
        assert_eq!(process.has_ttlsec, Some(true));
    }

    #[test]
    fn test_ios_areas_in_text_order() {
        let config = ios(IOS_CONFIG).unwrap();
        assert_eq!(config.areas.len(), 2);

        let backbone = &config.areas[0];
        assert_eq!(backbone.id, 0);
        assert_eq!(backbone.num_intfs, 3);
        assert_eq!(backbone.area_type, "standard");

        let nssa = &config.areas[1];
        assert_eq!(nssa.id, 51);
        assert_eq!(nssa.num_intfs, 1);
        assert_eq!(nssa.area_type, "nssa");
    }

    #[test]
    fn test_missing_header_still_scans_areas() {
        let tail = "\
    Area 51
        Number of interfaces in this area is 1
        It is a stub area
";
        let config = ios(tail).unwrap();
        assert_eq!(config.process, None);
        assert_eq!(config.areas.len(), 1);
        assert_eq!(config.areas[0].area_type, "stub");
    }

    #[test]
    fn test_iosxr_areas_carry_lfa_interface_count() {
        let text = "\
 Routing Process \"ospf 1\" with ID 10.0.0.2
 Supports only single TOS(TOS0) routes
 Initial SPF schedule delay 50 msecs
 Minimum hold time between two consecutive SPFs 200 msecs
 Maximum wait time between two consecutive SPFs 5000 msecs
    Area BACKBONE(0)
        Number of interfaces in this area is 2
        SPF algorithm executed 12 times
        Number of LFA enabled interfaces 2, LFA revision 2
    Area 10
        Number of interfaces in this area is 1
        It is a stub area
        SPF algorithm executed 4 times
        Number of LFA enabled interfaces 0, LFA revision 2
";
        let config = iosxr(text).unwrap();

        let process = config.process.unwrap();
        // The IOS-XR header has no reference-bandwidth line and none
        // of the IOS feature lines.
        assert_eq!(process.ref_bw, None);
        assert_eq!(process.has_ispf, None);
        assert_eq!(process.has_bfd, None);
        assert_eq!(process.has_ttlsec, None);
        assert!(!process.is_abr);

        assert_eq!(config.areas.len(), 2);
        assert_eq!(config.areas[0].frr_intfs, Some(2));
        assert_eq!(config.areas[1].frr_intfs, Some(0));
        assert_eq!(config.areas[1].area_type, "stub");
    }

    #[test]
    fn test_nxos_dotted_area_ids_gain_numeric_form() {
        let text = "\
 Routing Process 1 with ID 10.0.0.3 VRF default
 Stateful High Availability enabled
 Reference Bandwidth is 40000 Mbps
 SPF throttling delay time of 200.000 msecs,
   SPF throttling hold time of 1000.000 msecs,
   SPF throttling maximum wait time of 5000.000 msecs
 This router is an area border router
   Area BACKBONE(0.0.0.0)
        Area has existed for 1w5d
        Interfaces in this area: 2 Active interfaces: 2
        Passive interfaces: 0  Loopback interfaces: 1
        No authentication available
   Area (0.0.0.51)
        Area has existed for 2d03h
        Interfaces in this area: 1 Active interfaces: 1
        Passive interfaces: 0  Loopback interfaces: 0
        This area is a NSSA area
";
        let config = nxos(text).unwrap();

        let process = config.process.unwrap();
        assert_eq!(process.id, 1);
        assert_eq!(process.ref_bw, Some(40000));
        assert_eq!(process.init_spf, 200);
        assert_eq!(process.min_spf, 1000);
        assert_eq!(process.max_spf, 5000);
        assert!(process.is_abr);
        assert!(!process.is_asbr);

        assert_eq!(config.areas.len(), 2);
        assert_eq!(config.areas[0].id, 0);
        assert_eq!(config.areas[0].id_dd.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.areas[0].area_type, "standard");
        assert_eq!(config.areas[1].id, 51);
        assert_eq!(config.areas[1].id_dd.as_deref(), Some("0.0.0.51"));
        assert_eq!(config.areas[1].area_type, "nssa");
    }
}
