use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerificationError};
use crate::multihash::{SHA2_256_CODE, SHA2_256_LEN};
use crate::unixfs;

/// A CIDv0 content identifier (`Qm...`).
///
/// A pure function of the bytes it was computed from: names, paths,
/// timestamps, and the container the bytes travelled in play no part.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentId {
    encoded: String,
    digest:  [u8; 32],
}

impl ContentId {
    /// Compute the identifier of `bytes`.
    pub fn of(bytes: &[u8]) -> Self {
        let multihash = unixfs::root_multihash(bytes);
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&multihash[2..]);
        Self {
            encoded: bs58::encode(&multihash).into_string(),
            digest,
        }
    }

    pub fn as_str(&self) -> &str { &self.encoded }

    /// sha2-256 digest of the root block.
    pub fn digest(&self) -> &[u8; 32] { &self.digest }

    pub fn digest_hex(&self) -> String { hex::encode(self.digest) }
}

/// Compute the identifier of `bytes`. Same as [`ContentId::of`].
pub fn compute_identifier(bytes: &[u8]) -> ContentId { ContentId::of(bytes) }

/// Check that `bytes` hash to `expected`, returning the computed identifier.
pub fn verify(expected: &ContentId, bytes: &[u8]) -> Result<ContentId> {
    let actual = ContentId::of(bytes);
    if &actual == expected {
        Ok(actual)
    } else {
        Err(VerificationError::Mismatch {
            expected: expected.to_string(),
            actual:   actual.to_string(),
        })
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.encoded) }
}

impl FromStr for ContentId {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || VerificationError::Malformed(s.to_string());
        let decoded = bs58::decode(s).into_vec().map_err(|_| malformed())?;
        match decoded.as_slice() {
            [SHA2_256_CODE, SHA2_256_LEN, rest @ ..] if rest.len() == SHA2_256_LEN as usize => {
                let mut digest = [0u8; 32];
                digest.copy_from_slice(rest);
                Ok(Self {
                    encoded: s.to_string(),
                    digest,
                })
            }
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<String> for ContentId {
    type Error = VerificationError;

    fn try_from(value: String) -> Result<Self> { value.parse() }
}

impl From<ContentId> for String {
    fn from(id: ContentId) -> Self { id.encoded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(
            ContentId::of(b"").as_str(),
            "QmbFMke1KXqnYyBBWxB74N4c5SBnJMVAiMNRcGu6x1AwQH"
        );
    }

    #[test]
    fn known_vectors() {
        assert_eq!(
            ContentId::of(b"hello world\n").as_str(),
            "QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o"
        );
        assert_eq!(
            ContentId::of(b"hello\n").as_str(),
            "QmZULkCELmmk5XNfCgTnCyFgAVxBRBXyDHGGMVoLFLiXEN"
        );
        assert_eq!(
            compute_identifier(b"hello").as_str(),
            "QmWfVY9y3xjsixTgbd9AorQxH7VtMpzfx2HaWtsoUYecaX"
        );
    }

    #[test]
    fn parse_roundtrips_display() {
        let id = ContentId::of(b"payload");
        let parsed: ContentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.digest_hex().len(), 64);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "not-a-cid".parse::<ContentId>(),
            Err(VerificationError::Malformed(_))
        ));
        // valid base58, wrong multihash prefix
        let other = bs58::encode([0x11u8, 0x14, 0, 0]).into_string();
        assert!(other.parse::<ContentId>().is_err());
    }

    #[test]
    fn verify_detects_mismatch() {
        let expected = ContentId::of(b"original");
        assert!(verify(&expected, b"original").is_ok());
        match verify(&expected, b"tampered") {
            Err(VerificationError::Mismatch { expected: e, actual }) => {
                assert_eq!(e, expected.to_string());
                assert_ne!(actual, e);
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }
}
