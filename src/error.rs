//! Crate-wide error types.
//!
//! Each subsystem gets a plain enum: `Debug` + `Clone` + `PartialEq`, no
//! `thiserror`, matching the error style already used for
//! `Argon2ParamError` and `Chacha20Poly1305Error` elsewhere in this crate.

/// Errors from the big-number core (`bignum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigNumError {
    /// Division or modular inverse by zero.
    DivisionByZero,
    /// Modular inverse does not exist (operand not coprime with modulus).
    NotInvertible,
    /// Input byte slice does not fit the target width.
    WidthMismatch,
    /// A digit string contained a non-digit character or was empty.
    InvalidDigit,
    /// Montgomery context requires an odd modulus.
    EvenModulus,
}

/// Errors from the elliptic-curve layer (`ecc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccError {
    /// A compressed point did not decode to a point on the curve.
    InvalidPointEncoding,
    /// A scalar or key was not canonically encoded.
    InvalidEncoding,
    /// Signature verification failed.
    InvalidSignature,
    /// A public key failed the small-subgroup / identity check.
    InvalidPublicKey,
    /// Computed shared secret is the all-zero point (contributory behavior).
    ContributoryBehavior,
}

/// Errors from the RSA envelope (`rsa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaError {
    /// `gcd(e, lambda(n)) != 1`, no private exponent exists.
    InvalidPublicExponent,
    /// Message or ciphertext is not smaller than the modulus.
    InputTooLarge,
}

/// Errors from the DEFLATE encoder (`deflate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeflateError {
    /// Compression level outside `0..=9`.
    InvalidLevel,
}

/// Errors from the INFLATE decoder (`inflate`), mirroring the taxonomy in
/// `spec.md` §7 (`INCOMPLETE`, `STORED_HEAD`, `DYN_HEAD`, `DYN_BL`,
/// `DYN_L`, `DYN_D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflateError {
    /// Stream ended before a final block was reached.
    Incomplete,
    /// Stored-block header `LEN` did not match `~NLEN`.
    StoredHead,
    /// Dynamic block header `HLIT`/`HDIST`/`HCLEN` out of range.
    DynHead,
    /// Bit-length code table failed to form a valid canonical code.
    DynBl,
    /// Literal/length code table failed to form a valid canonical code.
    DynL,
    /// Distance code table failed to form a valid canonical code.
    DynD,
    /// Decoded literal/length symbol outside the valid range.
    LCodes,
    /// Decoded distance symbol outside the valid range, or distance farther
    /// back than any data produced so far.
    DCodes,
}
