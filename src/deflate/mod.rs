//! DEFLATE/INFLATE (RFC 1951) compression codec.
//!
//! `[NEW]`, grounded in `original_source`'s `deflate.c`/`deflate.h`: a
//! ten-level profile table driving greedy or lazy LZ77 match-finding over
//! a 32 KiB sliding window, canonical Huffman coding (static or per-block
//! dynamic, whichever costs fewer bits), and a resumable INFLATE decoder.
//! The original streams through a fixed-size window with an explicit
//! flush/finish state machine; `compress`/`decompress` take and return
//! whole `Vec<u8>` buffers for the common case, while [`Inflater`]
//! exposes the same state machine one transition at a time for streaming
//! use — not a different wire format either way: the output is a
//! byte-for-byte conformant RFC 1951 stream, decodable by any compliant
//! INFLATE implementation, and `decompress` accepts streams from any
//! compliant encoder (stored, fixed, or dynamic blocks).
//!
//! See `DESIGN.md` for the remaining simplifications against the
//! original multi-block streaming implementation.

mod bitio;
mod compress;
mod decompress;
mod huffman;
mod lz77;
mod tables;

pub use decompress::{Inflater, Status};

use crate::error::InflateError;

/// Compresses `data` into a single RFC 1951 DEFLATE stream at the given
/// compression level (0-9, clamped): 0 emits stored blocks only, 1-3 use
/// greedy LZ77 matching, and 4-9 use one-byte-deferred lazy matching,
/// each picking whichever of a static or dynamic Huffman block is
/// smaller.
pub fn compress(data: &[u8], level: u8) -> Vec<u8> {
    compress::compress(data, level)
}

/// Decompresses a complete RFC 1951 DEFLATE stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, InflateError> {
    decompress::decompress(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_empty() {
        let compressed = compress(&[], 6);
        assert_eq!(decompress(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn roundtrip_small_literal_run() {
        let data = b"hello, world!".to_vec();
        let compressed = compress(&data, 6);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn roundtrip_repetitive_data_compresses() {
        let data = "the quick brown fox ".repeat(200).into_bytes();
        let compressed = compress(&data, 6);
        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn roundtrip_single_byte_alphabet() {
        let data = vec![b'a'; 500];
        let compressed = compress(&data, 6);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn roundtrip_binary_data() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let compressed = compress(&data, 6);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn roundtrip_at_every_level() {
        let data = "the quick brown fox jumps over the lazy dog".repeat(50).into_bytes();
        for level in 0..=9u8 {
            let compressed = compress(&data, level);
            assert_eq!(decompress(&compressed).unwrap(), data, "level {level}");
        }
    }

    #[test]
    fn level_zero_is_stored_only_and_handles_large_input() {
        // Exercises the stored-block chunking path (> one 64 KiB block).
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let compressed = compress(&data, 0);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn decompress_rejects_truncated_stream() {
        let data = "some reasonably long text to compress".repeat(10).into_bytes();
        let compressed = compress(&data, 6);
        let truncated = &compressed[..compressed.len() / 2];
        assert!(decompress(truncated).is_err());
    }

    #[test]
    fn decompress_rejects_corrupted_stored_header() {
        // BFINAL=1, BTYPE=00 (stored), then a deliberately inconsistent
        // LEN/~LEN pair.
        let mut bytes = vec![0b0000_0001u8];
        bytes.extend_from_slice(&5u16.to_le_bytes());
        bytes.extend_from_slice(&5u16.to_le_bytes()); // should be !5
        bytes.extend_from_slice(&[0, 0, 0, 0, 0]);
        assert_eq!(decompress(&bytes), Err(InflateError::StoredHead));
    }
}
