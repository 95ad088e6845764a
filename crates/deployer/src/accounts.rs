use {
    crate::{arguments::SignerArguments, traits::AccountRegistry},
    alloy::{
        network::EthereumWallet,
        primitives::Address,
        providers::{DynProvider, Provider},
        signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    },
    anyhow::{Context, Result},
};

/// Signers held by this process, in registration order.
#[derive(Debug, Default)]
pub struct LocalSigners(Vec<PrivateKeySigner>);

impl LocalSigners {
    pub fn load(args: &SignerArguments) -> Result<Self> {
        let mut signers = Vec::new();

        for path in &args.keystore {
            let password = args
                .keystore_password
                .as_deref()
                .context("keystores require a keystore password")?;
            let signer = PrivateKeySigner::decrypt_keystore(path, password)
                .with_context(|| format!("failed to decrypt keystore {}", path.display()))?;
            signers.push(signer);
        }

        for (i, key) in args.private_keys.iter().enumerate() {
            let signer = key
                .parse::<PrivateKeySigner>()
                .with_context(|| format!("invalid private key at position {i}"))?;
            signers.push(signer);
        }

        if let Some(phrase) = &args.mnemonic {
            for index in 0..args.mnemonic_accounts {
                let signer = MnemonicBuilder::<English>::default()
                    .phrase(phrase.as_str())
                    .index(index)?
                    .build()
                    .with_context(|| format!("failed to derive mnemonic account {index}"))?;
                signers.push(signer);
            }
        }

        Ok(Self(signers))
    }

    pub fn addresses(&self) -> Vec<Address> {
        self.0.iter().map(PrivateKeySigner::address).collect()
    }

    /// Wallet that signs for every local signer, the first one being the
    /// default. `None` when there are no local signers.
    pub fn into_wallet(self) -> Option<EthereumWallet> {
        let mut signers = self.0.into_iter();
        let mut wallet = EthereumWallet::new(signers.next()?);
        for signer in signers {
            wallet.register_signer(signer);
        }
        Some(wallet)
    }
}

/// Accounts available for deploying. Local signers take precedence, the
/// node's unlocked accounts are only consulted when there are none.
pub struct Accounts {
    local: Vec<Address>,
    provider: DynProvider,
}

impl Accounts {
    pub fn new(local: Vec<Address>, provider: DynProvider) -> Self {
        Self { local, provider }
    }
}

#[async_trait::async_trait]
impl AccountRegistry for Accounts {
    async fn accounts(&self) -> Result<Vec<Address>> {
        if !self.local.is_empty() {
            return Ok(self.local.clone());
        }
        tracing::debug!("no local signers configured, using node accounts");
        self.provider
            .get_accounts()
            .await
            .context("failed to fetch node accounts")
    }
}
