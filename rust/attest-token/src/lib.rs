//! Compact signed tokens and time-bounded assertions.
//!
//! A compact token is a three-segment, dot-separated string:
//!
//! ```text
//! base64url(JSON(header)) "." base64url(JSON(payload)) "." base64url(signature)
//! ```
//!
//! The token flow:
//!
//! 1. [`assertion::sign`] merges the standard temporal/identity claims
//!    (`iss`, `aud`, `exp`, `iat`) into the caller's payload
//! 2. [`token::sign`] encodes the header and payload segments and signs
//!    the exact bytes `segment1 "." segment2`
//! 3. [`token::verify`] re-derives those bytes from a received token and
//!    checks the signature against the verifying key
//! 4. [`assertion::verify`] then enforces the validity window with
//!    asymmetric clock-skew tolerances and splits the claims back out of
//!    the payload
//!
//! Every failure is a distinct [`TokenError`] variant; a failed
//! verification never yields a payload.

pub mod assertion;
pub mod codec;
pub mod error;
pub mod token;

pub use assertion::{AssertionParams, VerifiedAssertion};
pub use codec::{Header, Payload};
pub use error::TokenError;
