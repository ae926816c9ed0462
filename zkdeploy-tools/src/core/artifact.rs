// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts, as written by the hardhat zksolc plugin.
//!
//! Artifacts live at `<root>/<sourceName>/<contractName>.json`. They can be looked up either by
//! bare contract name (`Settlement`) or by fully qualified name
//! (`contracts/Settlement.sol:Settlement`).

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::{Bytes, B256},
};
use serde::Deserialize;

use crate::core::bytecode::{hash_bytecode, BytecodeError};

/// Artifact format written by `@matterlabs/hardhat-zksync-solc`.
pub const ZKSOLC_ARTIFACT_FORMAT: &str = "hh-zksolc-artifact-1";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("no artifact found for contract `{0}`; did you compile it?")]
    NotFound(String),
    #[error("multiple artifacts found for contract `{name}`, use a fully qualified name: {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
}

/// Compiled contract descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(rename = "_format", default)]
    pub format: String,
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
    #[serde(default)]
    pub deployed_bytecode: Bytes,
    /// Bytecode hash to fully qualified name of each contract this one can deploy.
    #[serde(default)]
    pub factory_deps: BTreeMap<String, String>,
    /// Bytecode of every (transitive) factory dependency, resolved by the artifact source.
    #[serde(skip)]
    pub dependencies: Vec<Bytes>,
}

impl Artifact {
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }

    pub fn bytecode_hash(&self) -> Result<B256, BytecodeError> {
        hash_bytecode(&self.bytecode)
    }

    /// The bytecode followed by its dependencies, as sent in a deployment's `factoryDeps`.
    pub fn factory_deps(&self) -> Vec<Bytes> {
        let mut deps = Vec::with_capacity(self.dependencies.len() + 1);
        deps.push(self.bytecode.clone());
        deps.extend(self.dependencies.iter().cloned());
        deps
    }
}

/// Resolves compiled artifacts by contract name.
pub trait ArtifactSource {
    fn load_artifact(&self, name: &str) -> Result<Artifact, ArtifactError>;
}

/// Artifacts stored in a build output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn find(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        if let Some((source, contract)) = name.split_once(':') {
            let path = self.root.join(source).join(format!("{contract}.json"));
            return if path.is_file() {
                Ok(path)
            } else {
                Err(ArtifactError::NotFound(name.to_owned()))
            };
        }

        let pattern = format!(
            "{}/**/{}.json",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            glob::Pattern::escape(name),
        );
        let mut matches: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        match matches.len() {
            0 => Err(ArtifactError::NotFound(name.to_owned())),
            1 => Ok(matches.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_owned(),
                candidates: matches
                    .iter()
                    .filter_map(|path| path.strip_prefix(&self.root).ok())
                    .map(|path| path.display().to_string())
                    .collect(),
            }),
        }
    }

    fn read(&self, path: &Path) -> Result<Artifact, ArtifactError> {
        let contents = fs::read_to_string(path)?;
        let artifact: Artifact =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
                path: path.to_owned(),
                source,
            })?;
        if artifact.format != ZKSOLC_ARTIFACT_FORMAT {
            warn!(@yellow, "artifact {} has format `{}`, expected `{}`", path.display(), artifact.format, ZKSOLC_ARTIFACT_FORMAT);
        }
        Ok(artifact)
    }

    fn collect_dependencies(
        &self,
        artifact: &Artifact,
        visited: &mut BTreeSet<String>,
        out: &mut Vec<Bytes>,
    ) -> Result<(), ArtifactError> {
        for name in artifact.factory_deps.values() {
            if !visited.insert(name.clone()) {
                continue;
            }
            let dependency = self.read(&self.find(name)?)?;
            out.push(dependency.bytecode.clone());
            self.collect_dependencies(&dependency, visited, out)?;
        }
        Ok(())
    }
}

impl ArtifactSource for ArtifactStore {
    fn load_artifact(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.find(name)?;
        debug!(@grey, "loading artifact from {}", path.display());
        let mut artifact = self.read(&path)?;

        let mut visited = BTreeSet::from([artifact.fully_qualified_name()]);
        let mut dependencies = Vec::new();
        self.collect_dependencies(&artifact, &mut visited, &mut dependencies)?;
        artifact.dependencies = dependencies;
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{artifact_json, write_artifact};

    #[test]
    fn loads_by_name_and_qualified_name() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/Settlement.sol", "Settlement", &[]).unwrap();
        let store = ArtifactStore::new(dir.path());

        let artifact = store.load_artifact("Settlement").unwrap();
        assert_eq!(artifact.contract_name, "Settlement");
        assert_eq!(artifact.source_name, "contracts/Settlement.sol");
        assert_eq!(artifact.constructor().unwrap().inputs.len(), 2);
        assert_eq!(artifact.bytecode.len(), 32);
        assert!(artifact.dependencies.is_empty());

        let qualified = store
            .load_artifact("contracts/Settlement.sol:Settlement")
            .unwrap();
        assert_eq!(qualified.bytecode, artifact.bytecode);
    }

    #[test]
    fn ignores_debug_files() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            write_artifact(dir.path(), "contracts/Settlement.sol", "Settlement", &[]).unwrap();
        fs::write(path.with_file_name("Settlement.dbg.json"), "{}").unwrap();

        let store = ArtifactStore::new(dir.path());
        assert!(store.load_artifact("Settlement").is_ok());
    }

    #[test]
    fn reports_missing_and_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/A.sol", "Token", &[]).unwrap();
        write_artifact(dir.path(), "contracts/B.sol", "Token", &[]).unwrap();
        let store = ArtifactStore::new(dir.path());

        assert!(matches!(
            store.load_artifact("Settlement"),
            Err(ArtifactError::NotFound(name)) if name == "Settlement"
        ));
        assert!(matches!(
            store.load_artifact("contracts/C.sol:Token"),
            Err(ArtifactError::NotFound(_))
        ));
        match store.load_artifact("Token") {
            Err(ArtifactError::Ambiguous { candidates, .. }) => assert_eq!(candidates.len(), 2),
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert!(store.load_artifact("contracts/A.sol:Token").is_ok());
    }

    #[test]
    fn reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("contracts/Broken.sol");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("Broken.json"), "{ not json").unwrap();

        let store = ArtifactStore::new(dir.path());
        assert!(matches!(
            store.load_artifact("Broken"),
            Err(ArtifactError::Parse { .. })
        ));
    }

    #[test]
    fn resolves_factory_deps_transitively() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/Leaf.sol", "Leaf", &[]).unwrap();
        write_artifact(
            dir.path(),
            "contracts/Pair.sol",
            "Pair",
            &["contracts/Leaf.sol:Leaf"],
        )
        .unwrap();
        write_artifact(
            dir.path(),
            "contracts/Factory.sol",
            "Factory",
            &["contracts/Pair.sol:Pair", "contracts/Leaf.sol:Leaf"],
        )
        .unwrap();
        let store = ArtifactStore::new(dir.path());

        let artifact = store.load_artifact("Factory").unwrap();
        assert_eq!(artifact.dependencies.len(), 2);
        assert_eq!(artifact.factory_deps().len(), 3);
        assert_eq!(artifact.factory_deps()[0], artifact.bytecode);
    }

    #[test]
    fn parses_hardhat_artifact() {
        let artifact: Artifact =
            serde_json::from_value(artifact_json("contracts/Settlement.sol", "Settlement", &[]))
                .unwrap();
        assert_eq!(artifact.format, ZKSOLC_ARTIFACT_FORMAT);
        assert_eq!(
            artifact.fully_qualified_name(),
            "contracts/Settlement.sol:Settlement"
        );
        assert!(artifact.bytecode_hash().is_ok());
    }
}
