pub mod accounts;
pub mod arguments;
pub mod artifact;
pub mod fees;
pub mod invoker;
pub mod network;
pub mod onchain;
pub mod traits;

use {
    accounts::{Accounts, LocalSigners},
    anyhow::Result,
    invoker::Invoker,
    traits::Deployment,
};

pub async fn run(args: arguments::Arguments) -> Result<Deployment> {
    let signers = LocalSigners::load(&args.signers)?;
    let local = signers.addresses();
    let provider = onchain::provider(&args.node_url, signers.into_wallet());

    let invoker = Invoker::new(
        Box::new(onchain::Node::new(provider.clone())),
        Box::new(Accounts::new(local, provider.clone())),
        Box::new(onchain::Deployer::new(provider, args.artifacts_dir)),
    );
    invoker.run(&mut std::io::stdout()).await
}
