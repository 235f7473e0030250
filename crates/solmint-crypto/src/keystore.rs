use std::fs;
use std::path::Path;

use crate::error::KeyResult;
use crate::keypair::Keypair;

/// Load the keypair stored at `path`, or generate and persist a new one.
///
/// Returns the keypair and whether it was freshly generated; a fresh
/// identity has no funds yet and the caller is expected to request an
/// airdrop before submitting transactions. The secret is stored as one
/// hex line.
pub fn load_or_generate(path: &Path) -> KeyResult<(Keypair, bool)> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let keypair = Keypair::from_hex(&contents)?;
        return Ok((keypair, false));
    }
    let keypair = Keypair::generate();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format!("{}\n", hex::encode(keypair.to_bytes())))?;
    Ok((keypair, true))
}
