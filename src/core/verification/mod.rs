//! Artifact verification
//!
//! Digest calculation for the exported graph artifact, reported in the export
//! summary so downstream consumers can verify the file they received.

use crate::domain::Result;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Size and checksum of a written artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDigest {
    /// Artifact size in bytes
    pub bytes: u64,

    /// Hex-encoded SHA-256 checksum (64 characters)
    pub sha256: String,
}

/// Calculate SHA-256 checksum of raw bytes
///
/// # Returns
///
/// Returns a hex-encoded SHA-256 checksum string (64 characters).
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Read an artifact back and digest it
///
/// # Errors
///
/// Returns an I/O error if the artifact cannot be read.
pub fn artifact_digest(path: impl AsRef<Path>) -> Result<ArtifactDigest> {
    let data = fs::read(path.as_ref())?;
    Ok(ArtifactDigest {
        bytes: data.len() as u64,
        sha256: calculate_checksum_bytes(&data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_checksum_deterministic() {
        let checksum1 = calculate_checksum_bytes(b"Test data");
        let checksum2 = calculate_checksum_bytes(b"Test data");
        assert_eq!(checksum1, checksum2);
        assert_eq!(checksum1.len(), 64);
        assert!(checksum1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_checksum_different_content() {
        assert_ne!(
            calculate_checksum_bytes(b"graph one"),
            calculate_checksum_bytes(b"graph two")
        );
    }

    #[test]
    fn test_artifact_digest() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"exported graph bytes").unwrap();
        f.flush().unwrap();

        let digest = artifact_digest(f.path()).unwrap();
        assert_eq!(digest.bytes, 20);
        assert_eq!(digest.sha256, calculate_checksum_bytes(b"exported graph bytes"));
    }

    #[test]
    fn test_artifact_digest_missing_file() {
        assert!(artifact_digest("no-such-artifact.onnx").is_err());
    }
}
