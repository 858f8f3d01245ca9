//! Key material and signature algorithms for compact assertions.
//!
//! This crate provides the cryptographic floor the token layer stands on:
//! a closed registry of signature algorithms and their permitted key sizes,
//! immutable key pair values, asynchronous key generation, and raw
//! sign/verify over byte strings.
//!
//! Key pairs are created once via [`generate_keypair`] and reused for any
//! number of sign/verify calls; nothing here is mutated after construction,
//! so keys are safe to share across concurrent callers.

pub mod algorithm;
pub mod error;
pub mod generate;
pub mod key;

pub use algorithm::Algorithm;
pub use error::KeyError;
pub use generate::{KeyPairConfig, generate_keypair};
pub use key::{KeyPair, PublicKey, SecretKey};
