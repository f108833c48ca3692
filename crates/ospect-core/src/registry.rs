//! Name-to-function table exposed to the calling automation framework.
//!
//! Every operation is registered under a stable string name with one
//! uniform signature over JSON values: text parsers take a single
//! string argument, the liveness check takes the BFD list and one
//! OSPF neighbor record. The table is built once and carries no
//! state of its own.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::Value;

use crate::check;
use crate::error::{FilterError, OspectError, Result};
use crate::models::bfd::BfdNeighbor;
use crate::show;

/// A registered filter: JSON arguments in, JSON value out.
pub type FilterFn = fn(&[Value]) -> Result<Value>;

lazy_static! {
    static ref FILTERS: HashMap<&'static str, FilterFn> = {
        let mut table: HashMap<&'static str, FilterFn> = HashMap::new();
        table.insert("ios_ospf_neighbor", ios_ospf_neighbor);
        table.insert("ios_ospf_basic", ios_ospf_basic);
        table.insert("ios_ospf_dbsum", ios_ospf_dbsum);
        table.insert("ios_ospf_traffic", ios_ospf_traffic);
        table.insert("ios_ospf_frr", ios_ospf_frr);
        table.insert("ios_bfd_neighbor", ios_bfd_neighbor);
        table.insert("check_bfd_up", check_bfd_up);
        table.insert("iosxr_ospf_neighbor", iosxr_ospf_neighbor);
        table.insert("iosxr_ospf_basic", iosxr_ospf_basic);
        table.insert("iosxr_ospf_traffic", iosxr_ospf_traffic);
        table.insert("nxos_ospf_neighbor", nxos_ospf_neighbor);
        table.insert("nxos_ospf_basic", nxos_ospf_basic);
        table.insert("nxos_ospf_dbsum", nxos_ospf_dbsum);
        table.insert("nxos_ospf_traffic", nxos_ospf_traffic);
        table
    };
}

/// Look up a filter by its registered name.
pub fn lookup(name: &str) -> Option<FilterFn> {
    FILTERS.get(name).copied()
}

/// All registered filter names, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FILTERS.keys().copied().collect();
    names.sort_unstable();
    names
}

fn text_arg<'a>(filter: &str, args: &'a [Value]) -> Result<&'a str> {
    match args {
        [Value::String(text)] => Ok(text),
        _ => Err(FilterError::Argument {
            filter: filter.to_string(),
            expected: "one string argument".to_string(),
        }
        .into()),
    }
}

fn run_parser<T, P>(filter: &str, args: &[Value], parse: P) -> Result<Value>
where
    T: Serialize,
    P: Fn(&str) -> show::Result<T>,
{
    let records = parse(text_arg(filter, args)?)?;
    Ok(serde_json::to_value(records)?)
}

fn ios_ospf_neighbor(args: &[Value]) -> Result<Value> {
    run_parser("ios_ospf_neighbor", args, show::neighbor::ios)
}

fn ios_ospf_basic(args: &[Value]) -> Result<Value> {
    run_parser("ios_ospf_basic", args, show::basic::ios)
}

fn ios_ospf_dbsum(args: &[Value]) -> Result<Value> {
    run_parser("ios_ospf_dbsum", args, show::dbsum::ios)
}

fn ios_ospf_traffic(args: &[Value]) -> Result<Value> {
    run_parser("ios_ospf_traffic", args, show::traffic::ios)
}

fn ios_ospf_frr(args: &[Value]) -> Result<Value> {
    run_parser("ios_ospf_frr", args, show::frr::ios)
}

fn ios_bfd_neighbor(args: &[Value]) -> Result<Value> {
    run_parser("ios_bfd_neighbor", args, show::bfd::ios)
}

fn iosxr_ospf_neighbor(args: &[Value]) -> Result<Value> {
    run_parser("iosxr_ospf_neighbor", args, show::neighbor::iosxr)
}

fn iosxr_ospf_basic(args: &[Value]) -> Result<Value> {
    run_parser("iosxr_ospf_basic", args, show::basic::iosxr)
}

fn iosxr_ospf_traffic(args: &[Value]) -> Result<Value> {
    run_parser("iosxr_ospf_traffic", args, show::traffic::iosxr)
}

fn nxos_ospf_neighbor(args: &[Value]) -> Result<Value> {
    run_parser("nxos_ospf_neighbor", args, show::neighbor::nxos)
}

fn nxos_ospf_basic(args: &[Value]) -> Result<Value> {
    run_parser("nxos_ospf_basic", args, show::basic::nxos)
}

fn nxos_ospf_dbsum(args: &[Value]) -> Result<Value> {
    run_parser("nxos_ospf_dbsum", args, show::dbsum::nxos)
}

fn nxos_ospf_traffic(args: &[Value]) -> Result<Value> {
    run_parser("nxos_ospf_traffic", args, show::traffic::nxos)
}

/// The liveness check reads only the peer address from the neighbor
/// record, so any JSON object with a `peer` string is accepted.
fn check_bfd_up(args: &[Value]) -> Result<Value> {
    let argument_error = || -> OspectError {
        FilterError::Argument {
            filter: "check_bfd_up".to_string(),
            expected: "a bfd neighbor list and an ospf neighbor record".to_string(),
        }
        .into()
    };

    let [bfd_nbrs, ospf_nbr] = args else {
        return Err(argument_error());
    };
    let bfd_nbrs: Vec<BfdNeighbor> = serde_json::from_value(bfd_nbrs.clone())?;
    let peer = ospf_nbr
        .get("peer")
        .and_then(Value::as_str)
        .ok_or_else(argument_error)?;

    Ok(Value::Bool(check::bfd_session_up(&bfd_nbrs, peer)?))
}
