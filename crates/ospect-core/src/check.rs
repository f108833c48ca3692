//! Cross-reference check between BFD sessions and OSPF neighbors.

use crate::error::ExtractionError;
use crate::models::bfd::BfdNeighbor;
use crate::models::ospf::OspfNeighbor;

/// True when the BFD session towards `peer` is fully up: both the
/// local state and the remote-heard summary column read `up`.
///
/// A linear scan is deliberate: a device carries at most a few
/// hundred BFD sessions. An address with no BFD session at all is an
/// error so callers can tell "down" from "not configured".
pub fn bfd_session_up(bfd_nbrs: &[BfdNeighbor], peer: &str) -> Result<bool, ExtractionError> {
    for bfd_nbr in bfd_nbrs {
        if bfd_nbr.peer == peer {
            return Ok(bfd_nbr.state == "up" && bfd_nbr.rhrs == "up");
        }
    }
    Err(ExtractionError::PeerNotFound {
        peer: peer.to_string(),
    })
}

/// [`bfd_session_up`] against an OSPF neighbor record. The comparison
/// uses the neighbor's interface address, not its router ID.
pub fn check_bfd_up(
    bfd_nbrs: &[BfdNeighbor],
    ospf_nbr: &OspfNeighbor,
) -> Result<bool, ExtractionError> {
    bfd_session_up(bfd_nbrs, &ospf_nbr.peer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bfd(peer: &str, state: &str, rhrs: &str) -> BfdNeighbor {
        BfdNeighbor {
            peer: peer.to_string(),
            ld: 1,
            rd: 6,
            rhrs: rhrs.to_string(),
            state: state.to_string(),
            intf: "gi0/0".to_string(),
        }
    }

    fn ospf(peer: &str) -> OspfNeighbor {
        OspfNeighbor {
            rid: "10.0.0.2".to_string(),
            priority: 1,
            state: "full".to_string(),
            role: "dr".to_string(),
            deadtime: Some("00:00:35".to_string()),
            deadtime_sec: Some(35),
            uptime: None,
            uptime_sec: None,
            peer: peer.to_string(),
            intf: "gi0/0".to_string(),
        }
    }

    #[test]
    fn test_session_up() {
        let nbrs = vec![bfd("10.0.0.1", "up", "up")];
        assert!(check_bfd_up(&nbrs, &ospf("10.0.0.1")).unwrap());
    }

    #[test]
    fn test_session_down() {
        let nbrs = vec![bfd("10.0.0.1", "down", "up")];
        assert!(!check_bfd_up(&nbrs, &ospf("10.0.0.1")).unwrap());
    }

    #[test]
    fn test_remote_summary_down() {
        let nbrs = vec![bfd("10.0.0.1", "up", "down")];
        assert!(!check_bfd_up(&nbrs, &ospf("10.0.0.1")).unwrap());
    }

    #[test]
    fn test_first_matching_peer_wins() {
        let nbrs = vec![
            bfd("10.0.0.1", "down", "down"),
            bfd("10.0.0.1", "up", "up"),
        ];
        assert!(!check_bfd_up(&nbrs, &ospf("10.0.0.1")).unwrap());
    }

    #[test]
    fn test_absent_peer_is_named_in_the_error() {
        let nbrs = vec![bfd("10.0.0.1", "up", "up")];
        let err = check_bfd_up(&nbrs, &ospf("10.9.9.9")).unwrap_err();
        match err {
            ExtractionError::PeerNotFound { peer } => assert_eq!(peer, "10.9.9.9"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
