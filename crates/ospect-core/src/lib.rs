//! Core library for OSPF/BFD show-output parsing.
//!
//! This crate provides:
//! - A catalog of pattern-based parsers for router "show" output
//!   (OSPF neighbors, basic config, database summary, traffic
//!   counters, fast reroute) across the IOS, IOS-XR and NX-OS dialects
//! - BFD neighbor parsing and a BFD/OSPF liveness cross-check
//! - A name-to-function registry for automation frameworks
//!
//! Everything is a pure function over captured command output: no
//! I/O, no retries, no shared state.

pub mod check;
pub mod coerce;
pub mod error;
pub mod models;
pub mod pattern;
pub mod registry;
pub mod show;

pub use check::{bfd_session_up, check_bfd_up};
pub use coerce::{duration_secs, Scalar};
pub use error::{ExtractionError, FilterError, OspectError, Result};
pub use models::bfd::BfdNeighbor;
pub use models::ospf::{
    AreaDbSummary, DbSummary, FrrArea, IosInterfaceTraffic, NxosProcessTraffic, OspfArea,
    OspfBasic, OspfNeighbor, OspfProcess, ProcessDbSummary, XrInterfaceTraffic,
};
pub use registry::FilterFn;
