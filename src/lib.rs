//! # lsag-kit
//! A small signature and key agreement toolkit over the
//! [Ristretto group](https://doc.dalek.rs/curve25519_dalek/ristretto/). It provides:
//!
//!  - Key pair generation from a wide-reduced random scalar
//!  - Linkable Spontaneous Anonymous Group (LSAG) ring signatures
//!  - Single signer Schnorr signatures
//!  - Elliptic curve Diffie-Hellman shared secrets
//!
//! > A ring signature proves that one of a declared set of public keys signed a message without
//! > revealing which one. The key image carried by every signature is a deterministic function of
//! > the signer's secret key, so two signatures by the same key are publicly linkable.
//!
//! The typed API lives in [`keys`], [`lsag`], [`schnorr`] and [`ecdh`]; every operation that needs
//! randomness takes the CSPRNG as an argument. The [`raw`] module exposes the same operations over
//! fixed byte layouts and draws randomness from the operating system.
//!
//! ```
//! use lsag_kit::keys::KeyPair;
//! use lsag_kit::lsag::RingSignature;
//! use rand_core::OsRng;
//!
//! let alice = KeyPair::generate(&mut OsRng);
//! let bob = KeyPair::generate(&mut OsRng);
//! let ring = [alice.public, bob.public];
//!
//! let signature = RingSignature::sign(b"hello", &alice.secret, &ring, &mut OsRng).unwrap();
//! assert!(signature.verify(b"hello", &ring));
//! ```
//!
//!  This library is `#![no_std]` with `alloc`.

#![no_std]

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ecdh;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod keys;
pub mod lsag;
pub mod raw;
pub mod schnorr;
pub mod traits;

pub use crate::ecdh::{ecdh, SharedSecret};
pub use crate::error::{Error, Malformed};
pub use crate::keys::{KeyPair, PublicKey, SecretKey};
pub use crate::lsag::{KeyImage, RingSignature};
pub use crate::schnorr::SchnorrSignature;
