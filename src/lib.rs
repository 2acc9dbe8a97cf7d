//! Freestanding cryptography and data-structure primitives.
//!
//! This crate provides low-level, auditable building blocks: fixed-width
//! big-number arithmetic, elliptic-curve key exchange and signatures
//! (Curve25519/448, NIST P-256/384/521), ML-KEM, an RSA envelope, a
//! DEFLATE/INFLATE codec, and a generic balanced binary tree.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than a large or high-level API surface. All components are explicit
//! in their semantics and suitable for security-critical code.
//!
//! # Module overview
//!
//! - `bignum` — fixed-width big integers (`BigUint<LIMBS>`) and
//!   Montgomery-form constant-time modular exponentiation.
//! - `field` — per-curve field and scalar arithmetic.
//! - `ecc` — X25519/X448, Ed25519/Ed448, and NIST P-256/384/521 ECDH +
//!   ECDSA, built on `field`.
//! - `rsa` — RSA key construction from caller-supplied primes, RSAEP /
//!   RSADP, and constant-time CRT decryption, built on `bignum`.
//! - `mlkem` — ML-KEM (FIPS 203) key encapsulation.
//! - `deflate` — DEFLATE/INFLATE (RFC 1951) compression and streaming
//!   decompression.
//! - `trees` — a generic AVL tree.
//! - `digest` — SHA-2/SHA-3 hash-function collaborators (not part of
//!   this crate's educative core; see `digest`'s module doc).
//! - `rng` — the ChaCha20-DRBG-backed CSPRNG used for key generation,
//!   nonces, and ECDSA per-signature secrets.
//! - `error` — the crate-wide error taxonomy, one enum per subsystem.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs, matching each algorithm's governing RFC
//!   or FIPS standard byte-for-byte.
//! - Clear separation between constant-time code paths (secret-dependent
//!   exponentiation and point arithmetic) and the plain paths reserved
//!   for public-exponent/public-key operations.
//! - No runtime logging in the core algorithms: a cryptography/codec
//!   core that logs intermediate state risks leaking secret-dependent
//!   control flow through log volume or timing.

pub mod bignum;
pub mod deflate;
pub mod digest;
pub mod ecc;
pub mod error;
pub mod field;
pub mod mlkem;
mod os;
mod primitives;
pub mod rsa;
pub mod rng;
pub mod trees;
