//! OSPF record types.
//!
//! Field names follow the CLI columns they come from. Fields that only
//! some dialects print are `Option` and serialize as explicit `null`,
//! so consumers can rely on key presence regardless of dialect.

use serde::{Deserialize, Serialize};

use crate::coerce::Scalar;

/// One row of an OSPF neighbor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfNeighbor {
    /// Neighbor router ID, dotted-decimal, kept as text.
    pub rid: String,

    /// DR election priority.
    pub priority: u32,

    /// Adjacency state (`full`, `2way`, ...), lower-cased.
    pub state: String,

    /// Neighbor role from the `STATE/ROLE` column (`dr`, `bdr`,
    /// `drother`, or `-` on point-to-point links), lower-cased.
    pub role: String,

    /// Dead timer as printed (`hh:mm:ss`); IOS and IOS-XR tables.
    #[serde(default)]
    pub deadtime: Option<String>,

    /// Dead timer converted to seconds.
    #[serde(default)]
    pub deadtime_sec: Option<u64>,

    /// Adjacency uptime as printed (`hh:mm:ss`); NX-OS and IOS-XR tables.
    #[serde(default)]
    pub uptime: Option<String>,

    /// Adjacency uptime converted to seconds.
    #[serde(default)]
    pub uptime_sec: Option<u64>,

    /// Neighbor interface address (not the router ID).
    pub peer: String,

    /// Local interface towards the neighbor, lower-cased.
    pub intf: String,
}

/// Process-level facts from the "show ospf" header block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfProcess {
    /// Process ID.
    pub id: u32,

    /// Router ID, dotted-decimal.
    pub rid: String,

    /// Initial SPF schedule delay, msecs.
    pub init_spf: u32,

    /// Minimum hold between consecutive SPF runs, msecs.
    pub min_spf: u32,

    /// Maximum wait between consecutive SPF runs, msecs.
    pub max_spf: u32,

    /// Reference bandwidth in Mbps; the IOS-XR header omits it.
    #[serde(default)]
    pub ref_bw: Option<u32>,

    /// Router is an area border router.
    pub is_abr: bool,

    /// Router is an autonomous system boundary router.
    pub is_asbr: bool,

    /// Router-LSAs currently originated with max metric (stub router).
    pub is_stub_rtr: bool,

    /// Incremental SPF enabled; only IOS reports it.
    #[serde(default)]
    pub has_ispf: Option<bool>,

    /// BFD enabled for the process; only IOS reports it.
    #[serde(default)]
    pub has_bfd: Option<bool>,

    /// Strict TTL checking (GTSM) enabled; only IOS reports it.
    #[serde(default)]
    pub has_ttlsec: Option<bool>,
}

/// Per-area facts from the "show ospf" area blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfArea {
    /// Area ID as a 32-bit value (dotted-decimal IDs are converted).
    pub id: u32,

    /// Dotted-decimal area ID where the dialect prints one (NX-OS).
    #[serde(default)]
    pub id_dd: Option<String>,

    /// Number of interfaces in the area.
    pub num_intfs: u32,

    /// Area type token lower-cased; `standard` when none is printed.
    #[serde(rename = "type")]
    pub area_type: String,

    /// Number of LFA-enabled interfaces; only IOS-XR reports it.
    #[serde(default)]
    pub frr_intfs: Option<u32>,
}

/// Result of a basic-config parse: the process header plus the area
/// list. A missing header never suppresses the area scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfBasic {
    pub process: Option<OspfProcess>,
    pub areas: Vec<OspfArea>,
}

/// Process-wide LSA counts from "show ip ospf database database-summary".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDbSummary {
    pub process_id: u32,
    pub router_lsas: u64,
    pub network_lsas: u64,
    pub summary_net_lsas: u64,
    pub summary_asbr_lsas: u64,
    pub type7_lsas: u64,
    pub type5_lsas: u64,
}

/// Per-area LSA counts. The area rollup has no type-5 row: external
/// LSAs are not scoped to an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaDbSummary {
    /// Area ID: numeric on IOS, dotted-decimal text on NX-OS.
    pub id: Scalar,
    pub router_lsas: u64,
    pub network_lsas: u64,
    pub summary_net_lsas: u64,
    pub summary_asbr_lsas: u64,
    pub type7_lsas: u64,
}

/// Result of a database-summary parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbSummary {
    pub process: Option<ProcessDbSummary>,
    pub areas: Vec<AreaDbSummary>,
}

/// Per-interface counters from IOS "show ip ospf traffic".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IosInterfaceTraffic {
    pub intf: String,

    // OSPF header errors
    pub length: u64,
    pub instance_id: u64,
    pub checksum: u64,
    pub auth_type: u64,
    pub version: u64,
    pub bad_src: u64,
    pub no_vl: u64,
    pub area_mismatch: u64,
    pub no_sl: u64,
    pub self_orig: u64,
    pub dup_rid: u64,
    pub hello_pkt: u64,
    pub mtu_mismatch: u64,
    pub nbr_ignored: u64,
    pub lls: u64,
    pub unk_nbr: u64,
    pub auth: u64,
    pub ttlsec_fail: u64,
    pub adj_throttle: u64,
    pub bfd: u64,
    pub test_discard: u64,

    // OSPF LSA errors
    pub lsa_type: u64,
    pub lsa_length: u64,
    pub lsa_data: u64,
    pub lsa_checksum: u64,
}

/// Per-interface counters from IOS-XR "show ospf traffic".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XrInterfaceTraffic {
    pub intf: String,
    pub pid: u64,
    pub area_id: u64,

    // OSPF header errors
    pub version: u64,
    pub lls: u64,
    pub pkt_type: u64,
    pub auth_rx: u64,
    pub length: u64,
    pub auth_tx: u64,
    pub checksum: u64,

    // OSPF LSA errors
    pub lsa_type: u64,
    pub lsa_checksum: u64,
    pub lsa_length: u64,
    pub lsa_data: u64,

    // OSPF errors
    pub bad_src: u64,
    pub area_mismatch: u64,
    pub no_vl: u64,
    pub self_orig: u64,
    pub no_sl: u64,
    pub dup_rid: u64,
    pub nbr_ignored: u64,
    pub gshut: u64,
    pub unk_nbr: u64,
    pub passive_intf: u64,
    pub no_dr_bdr: u64,
    pub disable_intf: u64,
    pub enq_hello: u64,
    pub enq_rtr: u64,
    pub unspec_rx: u64,
    pub unspec_tx: u64,
    pub socket: u64,
}

/// Per-process counters from NX-OS "show ip ospf traffic".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NxosProcessTraffic {
    pub pid: u64,
    pub ignore_lsa: u64,
    pub lsa_drop_spf: u64,
    pub lsa_drop_gr: u64,

    // Errors
    pub drops_in: u64,
    pub drops_out: u64,
    pub errors_in: u64,
    pub errors_out: u64,
    pub hellos_in: u64,
    pub dbds_in: u64,
    pub lsreq_in: u64,
    pub lsu_in: u64,
    pub lsacks_in: u64,
    pub unk_in: u64,
    pub unk_out: u64,
    pub no_ospf: u64,
    pub bad_ver: u64,
    pub bad_crc: u64,
    pub dup_rid: u64,
    pub dup_src: u64,
    pub inv_src: u64,
    pub inv_dst: u64,
    pub no_nbr: u64,
    pub passive: u64,
    pub wrong_area: u64,
    pub pkt_len: u64,
    pub nbr_change: u64,
    pub bad_auth: u64,
    pub no_vrf: u64,
}

/// One row of the "show ip ospf fast-reroute" per-area table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrrArea {
    pub id: u32,

    /// Topology name, lower-cased.
    pub topology: String,

    /// Prefix protection priority (`high`/`low`), lower-cased.
    pub pref_pri: String,

    /// Remote LFA backup paths enabled.
    pub rlfa: bool,

    /// Topology-independent LFA backup paths enabled.
    pub tilfa: bool,
}
