//! Node backed implementations of the network and deployment traits.

use {
    crate::{
        artifact::Artifact,
        network::Network,
        traits::{ContractDeploy, DeployRequest, Deployment, NetworkRead},
    },
    alloy::{
        network::{EthereumWallet, TransactionBuilder},
        primitives::B256,
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::{
            client::ClientBuilder,
            types::{TransactionReceipt, TransactionRequest},
        },
    },
    anyhow::{Context, Result, ensure},
    std::path::PathBuf,
    url::Url,
};

/// Connects to the node. With a wallet, transactions are signed locally;
/// without one they are handed to the node via `eth_sendTransaction`.
pub fn provider(url: &Url, wallet: Option<EthereumWallet>) -> DynProvider {
    let rpc = ClientBuilder::default().http(url.clone());
    match wallet {
        Some(wallet) => ProviderBuilder::new()
            .wallet(wallet)
            .connect_client(rpc)
            .erased(),
        None => ProviderBuilder::new().connect_client(rpc).erased(),
    }
}

pub struct Node {
    provider: DynProvider,
}

impl Node {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl NetworkRead for Node {
    async fn network(&self) -> Result<Network> {
        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .context("could not fetch current chain id")?;
        Ok(Network::from_chain_id(chain_id))
    }
}

/// Deploys artifacts from a directory with EIP-1559 transactions.
pub struct Deployer {
    provider: DynProvider,
    artifacts_dir: PathBuf,
}

impl Deployer {
    pub fn new(provider: DynProvider, artifacts_dir: PathBuf) -> Self {
        Self {
            provider,
            artifacts_dir,
        }
    }
}

#[async_trait::async_trait]
impl ContractDeploy for Deployer {
    async fn deploy(&self, request: DeployRequest) -> Result<Deployment> {
        let artifact = Artifact::load(&self.artifacts_dir, &request.contract)?;
        let tx = TransactionRequest::default()
            .with_from(request.sender)
            .with_deploy_code(artifact.init_code(request.constructor_arg))
            .with_max_fee_per_gas(request.fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(request.fees.max_priority_fee_per_gas);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to submit deployment transaction")?;
        let tx_hash = *pending.tx_hash();
        tracing::info!(?tx_hash, contract = %artifact.name, "deployment transaction submitted");

        let receipt = pending
            .get_receipt()
            .await
            .with_context(|| format!("failed to confirm deployment transaction {tx_hash}"))?;
        let deployment = confirmed(tx_hash, &receipt)?;
        tracing::debug!(?deployment, "deployment confirmed");
        Ok(deployment)
    }
}

/// A mined deployment. Reverted transactions are errors.
fn confirmed(tx_hash: B256, receipt: &TransactionReceipt) -> Result<Deployment> {
    ensure!(receipt.status(), "deployment transaction {tx_hash} reverted");
    Ok(Deployment {
        tx_hash,
        block_number: receipt.block_number,
        contract_address: receipt.contract_address,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::network::HOLESKY,
        alloy::{
            primitives::{Address, U64, address},
            providers::mock::Asserter,
        },
        serde_json::json,
    };

    fn mocked(asserter: Asserter) -> DynProvider {
        ProviderBuilder::new()
            .connect_mocked_client(asserter)
            .erased()
    }

    fn receipt(status: &str) -> TransactionReceipt {
        serde_json::from_value(json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x1d4c0",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": format!("0x{}", "11".repeat(32)),
            "transactionIndex": "0x0",
            "blockHash": format!("0x{}", "22".repeat(32)),
            "blockNumber": "0x7",
            "gasUsed": "0x1d4c0",
            "effectiveGasPrice": "0x3b9aca00",
            "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "to": null,
            "contractAddress": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
        }))
        .unwrap()
    }

    #[test]
    fn successful_receipt_becomes_deployment() {
        let tx_hash = B256::repeat_byte(0x11);
        let deployment = confirmed(tx_hash, &receipt("0x1")).unwrap();
        assert_eq!(
            deployment,
            Deployment {
                tx_hash,
                block_number: Some(7),
                contract_address: Some(address!("0x5FbDB2315678afecb367f032d93F642f64180aa3")),
            }
        );
    }

    #[test]
    fn reverted_receipt_is_an_error() {
        let tx_hash = B256::repeat_byte(0x11);
        let err = confirmed(tx_hash, &receipt("0x0")).unwrap_err();
        assert_eq!(err.to_string(), format!("deployment transaction {tx_hash} reverted"));
    }

    #[tokio::test]
    async fn node_reports_network_from_chain_id() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(HOLESKY));

        let network = Node::new(mocked(asserter)).network().await.unwrap();
        assert_eq!(network, Network::from_chain_id(HOLESKY));
    }

    #[tokio::test]
    async fn chain_id_failures_carry_context() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("connection refused");

        let err = Node::new(mocked(asserter)).network().await.unwrap_err();
        assert_eq!(err.to_string(), "could not fetch current chain id");
    }

    #[tokio::test]
    async fn missing_artifact_fails_before_submitting() {
        let dir = tempfile::tempdir().unwrap();
        // No responses are queued, so any RPC call would fail differently.
        let deployer = Deployer::new(mocked(Asserter::new()), dir.path().to_path_buf());

        let err = deployer
            .deploy(DeployRequest {
                contract: "main".to_string(),
                constructor_arg: Address::repeat_byte(1),
                sender: Address::repeat_byte(2),
                fees: crate::fees::FeeParameters::fixed().unwrap(),
            })
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("main.json"));
    }
}
