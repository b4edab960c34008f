//! This crate provides types and functions to create and parse the key
//! material used by an SSH certificate-signing backend. It can generate
//! fresh RSA signing keys and validate externally supplied keys in the
//! encodings commonly produced by `ssh-keygen` and `openssl`.
//!
//! The two halves of a key pair travel as opaque strings: the public half
//! as a single authorized-keys line, the private half as a PEM block. The
//! backend persists them verbatim; nothing outside this crate needs to
//! understand their inner structure.
use zeroize::Zeroizing;

pub mod parse;
pub mod rsa;

/// An SSH key pair ready to be persisted by the backend.
///
/// The private half is zeroized when the pair is dropped.
pub struct KeyPair {
    public_key: String,
    private_key: Zeroizing<String>,
}

impl KeyPair {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: Zeroizing::new(private_key.into()),
        }
    }

    /// Returns the public half as a single authorized-keys line.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Returns the private half as a PEM block.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}
