use {
    crate::{
        fees::FeeParameters,
        network::{HOLESKY, Network},
        traits::{AccountRegistry, ContractDeploy, DeployRequest, Deployment, NetworkRead},
    },
    alloy::primitives::{Address, address},
    anyhow::Result,
    std::io::Write,
};

/// The only chain deployments are allowed on.
pub const EXPECTED_CHAIN_ID: u64 = HOLESKY;
/// Name of the deployed contract artifact.
pub const CONTRACT: &str = "main";
/// WETH on Holesky, passed as the constructor argument.
pub const WETH: Address = address!("0x94373a4919B3240D86eA41593D5eBa789FEF3848");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("only for deploy on {expected}, not {actual}")]
    WrongNetwork { expected: Network, actual: Network },
    #[error("no accounts available to deploy from")]
    NoAccounts,
}

/// Checks that the node is connected to the expected network and deploys the
/// contract from the first available account.
pub struct Invoker {
    network: Box<dyn NetworkRead>,
    accounts: Box<dyn AccountRegistry>,
    deployer: Box<dyn ContractDeploy>,
}

impl Invoker {
    pub fn new(
        network: Box<dyn NetworkRead>,
        accounts: Box<dyn AccountRegistry>,
        deployer: Box<dyn ContractDeploy>,
    ) -> Self {
        Self {
            network,
            accounts,
            deployer,
        }
    }

    /// Runs the deployment. The line naming the deploying account is written
    /// to `out`, and only once the network has been verified.
    pub async fn run(&self, out: &mut (dyn Write + Send)) -> Result<Deployment> {
        let actual = self.network.network().await?;
        let expected = Network::from_chain_id(EXPECTED_CHAIN_ID);
        if actual != expected {
            return Err(Error::WrongNetwork { expected, actual }.into());
        }

        let sender = self
            .accounts
            .accounts()
            .await?
            .first()
            .copied()
            .ok_or(Error::NoAccounts)?;
        writeln!(out, "deployer: {sender}")?;

        let fees = FeeParameters::fixed()?;
        tracing::debug!(network = %actual, %fees, "submitting deployment");
        self.deployer
            .deploy(DeployRequest {
                contract: CONTRACT.to_string(),
                constructor_arg: WETH,
                sender,
                fees,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            network::MAINNET,
            traits::{MockAccountRegistry, MockContractDeploy, MockNetworkRead},
        },
        alloy::primitives::B256,
        anyhow::anyhow,
    };

    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn connected_to(chain_id: u64) -> MockNetworkRead {
        let mut network = MockNetworkRead::new();
        network
            .expect_network()
            .returning(move || Ok(Network::from_chain_id(chain_id)));
        network
    }

    fn accounts(accounts: Vec<Address>) -> MockAccountRegistry {
        let mut registry = MockAccountRegistry::new();
        registry
            .expect_accounts()
            .times(1)
            .returning(move || Ok(accounts.clone()));
        registry
    }

    fn deployment() -> Deployment {
        Deployment {
            tx_hash: B256::repeat_byte(1),
            block_number: Some(7),
            contract_address: Some(Address::repeat_byte(2)),
        }
    }

    #[tokio::test]
    async fn deploys_once_on_holesky() {
        let mut deployer = MockContractDeploy::new();
        deployer
            .expect_deploy()
            .times(1)
            .withf(|request| {
                *request
                    == DeployRequest {
                        contract: "main".to_string(),
                        constructor_arg: address!("0x94373a4919B3240D86eA41593D5eBa789FEF3848"),
                        sender: DEPLOYER,
                        fees: FeeParameters {
                            max_fee_per_gas: 1_000_000_000,
                            max_priority_fee_per_gas: 10_000_000,
                        },
                    }
            })
            .returning(|_| Ok(deployment()));
        let invoker = Invoker::new(
            Box::new(connected_to(HOLESKY)),
            Box::new(accounts(vec![DEPLOYER])),
            Box::new(deployer),
        );

        let mut out = Vec::<u8>::new();
        let result = invoker.run(&mut out).await.unwrap();

        assert_eq!(result, deployment());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "deployer: 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266\n"
        );
    }

    #[tokio::test]
    async fn uses_first_of_many_accounts() {
        let mut deployer = MockContractDeploy::new();
        deployer
            .expect_deploy()
            .times(1)
            .withf(|request| request.sender == DEPLOYER)
            .returning(|_| Ok(deployment()));
        let invoker = Invoker::new(
            Box::new(connected_to(HOLESKY)),
            Box::new(accounts(vec![
                DEPLOYER,
                Address::repeat_byte(3),
                Address::repeat_byte(4),
            ])),
            Box::new(deployer),
        );

        invoker.run(&mut std::io::sink()).await.unwrap();
    }

    #[tokio::test]
    async fn refuses_other_networks() {
        for chain_id in [MAINNET, 0, 5, 100, 11155111, HOLESKY + 1] {
            let mut registry = MockAccountRegistry::new();
            registry.expect_accounts().never();
            let mut deployer = MockContractDeploy::new();
            deployer.expect_deploy().never();
            let invoker = Invoker::new(
                Box::new(connected_to(chain_id)),
                Box::new(registry),
                Box::new(deployer),
            );

            let mut out = Vec::<u8>::new();
            let err = invoker.run(&mut out).await.unwrap_err();

            assert_eq!(
                err.downcast_ref::<Error>(),
                Some(&Error::WrongNetwork {
                    expected: Network::from_chain_id(HOLESKY),
                    actual: Network::from_chain_id(chain_id),
                })
            );
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn wrong_network_message() {
        let mut deployer = MockContractDeploy::new();
        deployer.expect_deploy().never();
        let invoker = Invoker::new(
            Box::new(connected_to(MAINNET)),
            Box::new(MockAccountRegistry::new()),
            Box::new(deployer),
        );

        let err = invoker.run(&mut std::io::sink()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "only for deploy on holesky(17000), not mainnet(1)"
        );
    }

    #[tokio::test]
    async fn no_accounts() {
        let mut deployer = MockContractDeploy::new();
        deployer.expect_deploy().never();
        let invoker = Invoker::new(
            Box::new(connected_to(HOLESKY)),
            Box::new(accounts(Vec::new())),
            Box::new(deployer),
        );

        let mut out = Vec::<u8>::new();
        let err = invoker.run(&mut out).await.unwrap_err();

        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::NoAccounts));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn failures_propagate_unchanged() {
        let mut network = MockNetworkRead::new();
        network
            .expect_network()
            .returning(|| Err(anyhow!("connection refused")));
        let mut deployer = MockContractDeploy::new();
        deployer.expect_deploy().never();
        let invoker = Invoker::new(
            Box::new(network),
            Box::new(MockAccountRegistry::new()),
            Box::new(deployer),
        );
        let err = invoker.run(&mut std::io::sink()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");

        let mut registry = MockAccountRegistry::new();
        registry
            .expect_accounts()
            .returning(|| Err(anyhow!("accounts unavailable")));
        let mut deployer = MockContractDeploy::new();
        deployer.expect_deploy().never();
        let invoker = Invoker::new(
            Box::new(connected_to(HOLESKY)),
            Box::new(registry),
            Box::new(deployer),
        );
        let err = invoker.run(&mut std::io::sink()).await.unwrap_err();
        assert_eq!(err.to_string(), "accounts unavailable");

        let mut deployer = MockContractDeploy::new();
        deployer
            .expect_deploy()
            .times(1)
            .returning(|_| Err(anyhow!("execution reverted")));
        let invoker = Invoker::new(
            Box::new(connected_to(HOLESKY)),
            Box::new(accounts(vec![DEPLOYER])),
            Box::new(deployer),
        );
        let mut out = Vec::<u8>::new();
        let err = invoker.run(&mut out).await.unwrap_err();
        assert_eq!(err.to_string(), "execution reverted");
        assert!(!out.is_empty());
    }
}
