//! Trait definitions for external system boundaries.
//!
//! These traits abstract the node connection, the signer registry and the
//! deployment itself so that the invoker can be unit tested with mocks.

use {
    crate::{fees::FeeParameters, network::Network},
    alloy::primitives::{Address, B256},
    anyhow::Result,
};

/// Everything needed to deploy one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Name of the compiled contract artifact.
    pub contract: String,
    /// The single constructor argument.
    pub constructor_arg: Address,
    pub sender: Address,
    pub fees: FeeParameters,
}

/// Handle to a confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub tx_hash: B256,
    pub block_number: Option<u64>,
    pub contract_address: Option<Address>,
}

/// Abstracts reading the identity of the connected network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NetworkRead: Send + Sync {
    async fn network(&self) -> Result<Network>;
}

/// Abstracts the ordered collection of accounts that can sign transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AccountRegistry: Send + Sync {
    async fn accounts(&self) -> Result<Vec<Address>>;
}

/// Abstracts submitting a deployment and waiting for it to be mined.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContractDeploy: Send + Sync {
    async fn deploy(&self, request: DeployRequest) -> Result<Deployment>;
}
