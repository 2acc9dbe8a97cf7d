//! Hash-function collaborators used by the ECC and ML-KEM engines.
//!
//! These primitives are explicitly out of scope as an implementation
//! surface (`spec.md` §1 lists MD5/SHA1/SHA2/SHA3/... as external
//! collaborators, not part of this crate's educative core); they're
//! pulled in from the audited RustCrypto crates instead of being
//! hand-rolled, the same way `prospector`'s `math-engine` and
//! `tinyzkp` reach for `sha2`/`sha3`/`blake3` rather than reimplementing
//! hash primitives that aren't the point of their crate.

use sha2::{Digest, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512, Shake128, Shake256};
use sha3::digest::{ExtendableOutput, Update, XofReader};

/// SHA-256, used by ECDSA over P-256.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&out);
    buf
}

/// SHA-384, used by ECDSA over P-384.
pub fn sha384(data: &[u8]) -> [u8; 48] {
    let mut hasher = Sha384::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut buf = [0u8; 48];
    buf.copy_from_slice(&out);
    buf
}

/// SHA-512, used by Ed25519 signing/keygen (RFC 8032) and ECDSA over P-521.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut buf = [0u8; 64];
    buf.copy_from_slice(&out);
    buf
}

/// SHA3-256, used by ML-KEM's `H`.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&out);
    buf
}

/// SHA3-512, used by ML-KEM's `G`.
pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha3_512::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut buf = [0u8; 64];
    buf.copy_from_slice(&out);
    buf
}

/// SHAKE-256, extensible-output, used by Ed448 (114-byte expansion) and
/// ML-KEM's `J`/`PRF`.
pub fn shake256(data: &[u8], out_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    hasher.update(data);
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; out_len];
    reader.read(&mut out);
    out
}

/// A SHAKE-128 squeeze stream, kept open across repeated reads. ML-KEM's
/// matrix sampler rejects some output blocks and asks for more from the
/// same stream rather than restarting it (FIPS 203's `XOF.Squeeze`).
pub struct Shake128Xof {
    reader: <Shake128 as ExtendableOutput>::Reader,
}

impl Shake128Xof {
    pub fn new(data: &[u8]) -> Self {
        let mut hasher = Shake128::default();
        hasher.update(data);
        Self { reader: hasher.finalize_xof() }
    }

    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}
