//! Loading of compiled contract artifacts.
//!
//! Artifacts are JSON files named `<contract>.json`. The creation bytecode is
//! taken from whichever of the common layouts is present:
//! - `deploymentBytecode.bytecode` (ape / ethPM contract types)
//! - `bytecode.object` (foundry)
//! - `bytecode` as a plain hex string (hardhat, truffle)

use {
    alloy::{
        primitives::{Address, Bytes},
        sol_types::SolValue,
    },
    anyhow::{Context, Result, ensure},
    serde::Deserialize,
    std::path::Path,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    deployment_bytecode: Option<DeploymentBytecode>,
    #[serde(default)]
    bytecode: Option<RawBytecode>,
}

#[derive(Deserialize)]
struct DeploymentBytecode {
    bytecode: Option<Bytes>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

impl Artifact {
    /// Reads `<dir>/<name>.json`.
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!("{name}.json"));
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read artifact {}", path.display()))?;
        Self::from_json(name, &json).with_context(|| format!("invalid artifact {}", path.display()))
    }

    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let bytecode = raw
            .deployment_bytecode
            .and_then(|deployment| deployment.bytecode)
            .or(raw.bytecode.map(|bytecode| match bytecode {
                RawBytecode::Hex(bytes) => bytes,
                RawBytecode::Object { object } => object,
            }))
            .context("artifact contains no creation bytecode")?;
        ensure!(!bytecode.is_empty(), "artifact has empty creation bytecode");

        Ok(Self {
            name: name.to_string(),
            bytecode,
        })
    }

    /// Creation bytecode followed by the ABI encoded constructor argument.
    pub fn init_code(&self, constructor_arg: Address) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend(constructor_arg.abi_encode());
        code.into()
    }
}
