//! Signed session cookie codec
//!
//! Cookie values are `<id>.<signature>` where the signature is a blake3
//! keyed hash of the id, base64-url encoded without padding. Tampering with
//! either half makes the value undecodable; callers treat that as "no
//! session" and issue a fresh one.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use meetlink_domain::SessionId;

const KEY_CONTEXT: &str = "meetlink 2025-06-01 session cookie signing";

/// Stateless signer/verifier for session cookie values
#[derive(Clone)]
pub struct SessionCookieCodec {
    key: [u8; 32],
}

impl SessionCookieCodec {
    /// Derive the signing key from the configured session secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self { key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()) }
    }

    /// Encode a session id into a signed cookie value.
    #[must_use]
    pub fn encode(&self, id: &SessionId) -> String {
        format!("{}.{}", id.as_str(), self.signature(id.as_str()))
    }

    /// Decode and verify a cookie value.
    ///
    /// Returns `None` for a missing separator, undecodable or wrong-length
    /// signature bytes, or a signature that does not match. Hash comparison
    /// is constant-time.
    #[must_use]
    pub fn decode(&self, value: &str) -> Option<SessionId> {
        let (id, signature) = value.split_once('.')?;
        if id.is_empty() {
            return None;
        }

        let provided_bytes = URL_SAFE_NO_PAD.decode(signature).ok()?;
        let provided: [u8; 32] = provided_bytes.try_into().ok()?;

        let expected = blake3::keyed_hash(&self.key, id.as_bytes());
        (expected == blake3::Hash::from(provided)).then(|| SessionId::from(id))
    }

    fn signature(&self, id: &str) -> String {
        let hash = blake3::keyed_hash(&self.key, id.as_bytes());
        URL_SAFE_NO_PAD.encode(hash.as_bytes())
    }
}
