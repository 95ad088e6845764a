use {
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    tracing::level_filters::LevelFilter,
    url::Url,
};

#[derive(clap::Parser)]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    #[clap(flatten)]
    pub signers: SignerArguments,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Directory containing the compiled contract artifacts (`<name>.json`).
    #[clap(long, env, default_value = ".build")]
    pub artifacts_dir: PathBuf,
}

#[derive(clap::Parser)]
#[group(skip)]
pub struct LoggingArguments {
    #[clap(long, env, default_value = "warn,deployer=debug")]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// Output log events as JSON.
    #[clap(long, env, action = clap::ArgAction::Set, default_value = "false")]
    pub use_json_logs: bool,
}

impl LoggingArguments {
    pub fn to_config(&self) -> observe::Config {
        observe::Config::new(
            &self.log_filter,
            self.log_stderr_threshold.into_level(),
            self.use_json_logs,
        )
    }
}

/// Local signers. They are registered in the order keystores, private keys,
/// mnemonic accounts; the first one deploys. Without any of them the node's
/// own unlocked accounts are used.
#[derive(clap::Parser)]
#[group(skip)]
pub struct SignerArguments {
    /// Encrypted JSON keystore files.
    #[clap(long, env, use_value_delimiter = true)]
    pub keystore: Vec<PathBuf>,

    /// Password used to decrypt all configured keystores.
    #[clap(long, env)]
    pub keystore_password: Option<String>,

    /// Hex encoded private keys.
    #[clap(long, env, use_value_delimiter = true)]
    pub private_keys: Vec<String>,

    /// BIP-39 mnemonic phrase to derive accounts from.
    #[clap(long, env)]
    pub mnemonic: Option<String>,

    /// Number of accounts derived from the mnemonic.
    #[clap(long, env, default_value = "1")]
    pub mnemonic_accounts: u32,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            signers,
            node_url,
            artifacts_dir,
        } = self;

        write!(f, "{logging}")?;
        write!(f, "{signers}")?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "artifacts_dir: {}", artifacts_dir.display())?;
        Ok(())
    }
}

impl Display for LoggingArguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            use_json_logs,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        Ok(())
    }
}

impl Display for SignerArguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            keystore,
            keystore_password,
            private_keys,
            mnemonic,
            mnemonic_accounts,
        } = self;

        display_list(f, "keystore", keystore.iter().map(|path| path.display()))?;
        display_secret_option(f, "keystore_password", keystore_password)?;
        writeln!(f, "private_keys: {} SECRET", private_keys.len())?;
        display_secret_option(f, "mnemonic", mnemonic)?;
        writeln!(f, "mnemonic_accounts: {mnemonic_accounts}")?;
        Ok(())
    }
}

pub fn display_secret_option<T>(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<T>,
) -> fmt::Result {
    display_option(f, name, &option.as_ref().map(|_| "SECRET"))
}

pub fn display_option(
    f: &mut Formatter<'_>,
    name: &str,
    option: &Option<impl Display>,
) -> fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}

pub fn display_list<T>(
    f: &mut Formatter<'_>,
    name: &str,
    iter: impl IntoIterator<Item = T>,
) -> fmt::Result
where
    T: Display,
{
    write!(f, "{name}: [")?;
    for (i, t) in iter.into_iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{t}")?;
    }
    writeln!(f, "]")
}
