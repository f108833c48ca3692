//! BFD neighbor table parser ("show bfd neighbors" family).

use tracing::debug;

use super::patterns::BFD_NEIGHBOR_ROW;
use super::Result;
use crate::models::bfd::BfdNeighbor;
use crate::pattern::{int_field, line_matches};

/// Parse Cisco IOS "show bfd neighbors" output.
pub fn ios(text: &str) -> Result<Vec<BfdNeighbor>> {
    let rows = line_matches(&BFD_NEIGHBOR_ROW, text, |caps| {
        Ok(BfdNeighbor {
            peer: caps["peer"].to_string(),
            ld: int_field(caps, "ld")?,
            rd: int_field(caps, "rd")?,
            rhrs: caps["rhrs"].to_lowercase(),
            state: caps["state"].to_lowercase(),
            intf: caps["intf"].to_lowercase(),
        })
    })?;
    debug!("parsed {} bfd neighbor rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BFD_TABLE: &str = "\
NeighAddr                         LD/RD         RH/RS     State     Int
192.168.1.2                       1/6           Up        Up        Gi0/0
192.168.1.6                       2/7           Down      Down      Gi0/1
";

    #[test]
    fn test_bfd_neighbor_rows() {
        let rows = ios(BFD_TABLE).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.peer, "192.168.1.2");
        assert_eq!(first.ld, 1);
        assert_eq!(first.rd, 6);
        assert_eq!(first.rhrs, "up");
        assert_eq!(first.state, "up");
        assert_eq!(first.intf, "gi0/0");

        assert_eq!(rows[1].state, "down");
    }

    #[test]
    fn test_header_line_is_skipped() {
        let rows = ios(BFD_TABLE).unwrap();
        assert!(rows.iter().all(|r| r.intf.starts_with("gi0/")));
    }
}
