//! Content hashing with blake3.
//!
//! ```ignore
//! let v = hash::content_version("# Hello"); // 64 hex chars
//! let t = hash::session_token(b"secret");   // fresh per call
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Hex blake3 digest of `data`. Used as a content version and commit id.
pub fn content_version<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    blake3::hash(data.as_ref()).to_hex().to_string()
}

/// Short form of a version for log lines.
pub fn short(version: &str) -> &str {
    version.get(..12).unwrap_or(version)
}

/// Issue an opaque session token.
///
/// Derived from the secret, the clock, the process id and a counter, so two
/// calls never collide within a process.
pub fn session_token(secret: &[u8]) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());

    let mut hasher = blake3::Hasher::new();
    hasher.update(secret);
    hasher.update(&nanos.to_le_bytes());
    hasher.update(&std::process::id().to_le_bytes());
    hasher.update(&COUNTER.fetch_add(1, Ordering::Relaxed).to_le_bytes());
    hex::encode(&hasher.finalize().as_bytes()[..16])
}
