//! BFD record types.

use serde::{Deserialize, Serialize};

/// One row of the "show bfd neighbors" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BfdNeighbor {
    /// Peer interface address.
    pub peer: String,

    /// Local discriminator.
    pub ld: u64,

    /// Remote discriminator.
    pub rd: u64,

    /// Remote heard / remote state summary column, lower-cased.
    pub rhrs: String,

    /// Local session state, lower-cased.
    pub state: String,

    /// Local interface, lower-cased.
    pub intf: String,
}
