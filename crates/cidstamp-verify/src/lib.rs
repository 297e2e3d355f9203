//! Deterministic content identifiers for byte buffers.
//!
//! Identifiers follow the IPFS "only hash" defaults so that a CID computed
//! here matches the one any IPFS implementation reports for the same bytes:
//! CIDv0, UnixFS file nodes in dag-pb blocks, 256 KiB fixed-size chunks, a
//! balanced DAG of at most 174 links per node, sha2-256 multihash, base58btc.
//!
//! # Example
//!
//! ```
//! use cidstamp_verify::ContentId;
//!
//! let cid = ContentId::of(b"hello world\n");
//! assert_eq!(cid.as_str(), "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o");
//! cidstamp_verify::verify(&cid, b"hello world\n").unwrap();
//! ```

pub use self::cid::{ContentId, compute_identifier, verify};
pub use self::error::{Result, VerificationError};

mod cid;
mod error;
mod multihash;
mod unixfs;
