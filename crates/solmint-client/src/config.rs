use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Configuration for one mint run.
///
/// Built from defaults, optionally overlaid with a TOML file and CLI
/// flags. Passed explicitly into the pieces that need it; there are no
/// ambient globals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MintConfig {
    /// Name of the target cluster, embedded in explorer links.
    pub cluster: String,
    /// Base URL of the block explorer.
    pub explorer_url: String,
    /// Directory holding the image files named by records.
    pub assets_dir: PathBuf,
    /// Where the identity's secret key is persisted between runs.
    pub keystore_path: PathBuf,
    /// Lamports requested when funding a fresh identity.
    pub airdrop_lamports: u64,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            cluster: "mocknet".into(),
            explorer_url: "https://explorer.mocknet.dev".into(),
            assets_dir: PathBuf::from("assets"),
            keystore_path: PathBuf::from(".solmint/id.key"),
            airdrop_lamports: 1_000_000_000,
        }
    }
}

impl MintConfig {
    /// Load from a TOML file; missing keys fall back to defaults.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| ClientError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = MintConfig::default();
        assert_eq!(c.cluster, "mocknet");
        assert_eq!(c.assets_dir, PathBuf::from("assets"));
        assert_eq!(c.airdrop_lamports, 1_000_000_000);
    }

    #[test]
    fn load_overrides_some_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cluster = \"devnet\"\nairdrop_lamports = 42").unwrap();
        let c = MintConfig::load(file.path()).unwrap();
        assert_eq!(c.cluster, "devnet");
        assert_eq!(c.airdrop_lamports, 42);
        // untouched keys keep their defaults
        assert_eq!(c.explorer_url, "https://explorer.mocknet.dev");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = MintConfig::load(Path::new("/nonexistent/solmint.toml")).unwrap_err();
        assert!(matches!(err, ClientError::Io { .. }));
    }

    #[test]
    fn load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cluster = [not toml").unwrap();
        let err = MintConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn serde_roundtrip() {
        let c = MintConfig::default();
        let toml = toml::to_string(&c).unwrap();
        let parsed: MintConfig = toml::from_str(&toml).unwrap();
        assert_eq!(c, parsed);
    }
}
