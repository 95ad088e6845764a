use std::fmt;

pub const MAINNET: u64 = 1;
pub const HOLESKY: u64 = 17000;

/// Identity of the network a node is connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    pub chain_id: u64,
}

impl Network {
    pub fn from_chain_id(chain_id: u64) -> Self {
        Self { chain_id }
    }

    /// Human readable name of the network. Chains we don't know about are
    /// called `unknown`.
    pub fn name(&self) -> &'static str {
        // You can find a list of available networks by network and chain id here:
        // https://chainid.network/chains.json
        match self.chain_id {
            MAINNET => "mainnet",
            HOLESKY => "holesky",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.chain_id)
    }
}
