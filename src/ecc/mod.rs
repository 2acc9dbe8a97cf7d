//! Elliptic-curve key exchange and signature engines.

pub mod ed25519;
pub mod ed448;
pub mod nist;
pub mod x25519;
pub mod x448;
