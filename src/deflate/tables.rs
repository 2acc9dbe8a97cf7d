//! Static RFC 1951 constant tables, translated from `deflate.h`'s
//! `DEFLATE_BITS_MAX`/`DEFLATE_MATCH_MIN`/`DEFLATE_MATCH_MAX`/
//! `DEFLATE_TOO_FAR`/`DEFLATE_L_CODES`/`DEFLATE_D_CODES` family.

pub const BITS_MAX: u32 = 15;
pub const MATCH_MIN: usize = 3;
pub const MATCH_MAX: usize = 258;
pub const WSIZE: usize = 1 << 15;
pub const TOO_FAR: usize = 4096;

pub const LITERALS: usize = 256;
pub const END_BLOCK: u16 = 256;
pub const LEN_CODES: usize = 29;
pub const L_CODES: usize = LITERALS + 1 + LEN_CODES;
pub const D_CODES: usize = 30;
pub const BL_CODES: usize = 19;

pub const REP_3_6: u16 = 16;
pub const REPZ_3_10: u16 = 17;
pub const REPZ_11_138: u16 = 18;

/// Base match length for each of the 29 length codes (257..=285).
pub const LENGTH_BASE: [u16; LEN_CODES] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115, 131,
    163, 195, 227, 258,
];
/// Extra bits following each length code.
pub const LENGTH_EXTRA: [u8; LEN_CODES] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// Base distance for each of the 30 distance codes.
pub const DIST_BASE: [u16; D_CODES] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537,
    2049, 3073, 4097, 6145, 8193, 12289, 16385, 24577,
];
/// Extra bits following each distance code.
pub const DIST_EXTRA: [u8; D_CODES] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13,
];

/// Order the 19 bit-length codes are transmitted in, in a dynamic
/// block's header (`DEFLATE_BL_CODES`).
pub const BL_ORDER: [usize; BL_CODES] = [
    16, 17, 18, 0, 8, 7, 9, 6, 10, 5, 11, 4, 12, 3, 13, 2, 14, 1, 15,
];

/// Maps a match length (3..=258) to its length code index (0..29).
pub fn length_to_code(len: usize) -> usize {
    match LENGTH_BASE.iter().rposition(|&base| base as usize <= len) {
        Some(idx) => idx,
        None => 0,
    }
}

/// Maps a match distance (1..=32768) to its distance code index (0..30).
pub fn dist_to_code(dist: usize) -> usize {
    match DIST_BASE.iter().rposition(|&base| base as usize <= dist) {
        Some(idx) => idx,
        None => 0,
    }
}

/// Fixed (static) literal/length code lengths, RFC 1951 §3.2.6.
pub fn fixed_litlen_lengths() -> [u8; L_CODES + 2] {
    let mut lens = [0u8; L_CODES + 2];
    for (i, l) in lens.iter_mut().enumerate() {
        *l = match i {
            0..=143 => 8,
            144..=255 => 9,
            256..=279 => 7,
            _ => 8,
        };
    }
    lens
}

/// Fixed (static) distance code lengths: all 5 bits.
pub fn fixed_dist_lengths() -> [u8; D_CODES] {
    [5; D_CODES]
}

/// Per-level match-finding parameters, translated from `deflate.c`'s
/// `configuration_table`. `good_match` throttles the chain search once a
/// match at least that long has already been found; `lazy_max` bounds how
/// long a match has to be before level 4+ stops looking one byte ahead for
/// something better; `nice_match` stops the chain walk early once a match
/// at least that long turns up; `chain_depth` bounds how many hash-chain
/// candidates are examined per position.
#[derive(Clone, Copy, Debug)]
pub struct LevelProfile {
    pub good_match: usize,
    pub lazy_max: usize,
    pub nice_match: usize,
    pub chain_depth: usize,
}

/// Compression strategy implied by a level (RFC 1951 leaves the block
/// type and match effort entirely to the encoder).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Level 0: no matching, every block is stored verbatim.
    Stored,
    /// Levels 1-3: take the first match at least `MATCH_MIN` long.
    Greedy,
    /// Levels 4-9: defer by one byte to check for a longer match.
    Lazy,
}

/// `deflate.c` picks greedy (`deflate_fast`) vs. lazy (`deflate_slow`)
/// per level via a separate function-pointer table; here `lazy_max == 0`
/// plays that role instead, so levels 1-3 carry a zero `lazy_max` even
/// where `deflate.c`'s own table has a nonzero (but, for those levels,
/// unused) value in the same column.
pub const PROFILE_TABLE: [LevelProfile; 10] = [
    LevelProfile { good_match: 0, lazy_max: 0, nice_match: 0, chain_depth: 0 },
    LevelProfile { good_match: 4, lazy_max: 0, nice_match: 8, chain_depth: 4 },
    LevelProfile { good_match: 4, lazy_max: 0, nice_match: 16, chain_depth: 8 },
    LevelProfile { good_match: 4, lazy_max: 0, nice_match: 32, chain_depth: 32 },
    LevelProfile { good_match: 4, lazy_max: 4, nice_match: 16, chain_depth: 16 },
    LevelProfile { good_match: 8, lazy_max: 16, nice_match: 32, chain_depth: 32 },
    LevelProfile { good_match: 8, lazy_max: 16, nice_match: 128, chain_depth: 128 },
    LevelProfile { good_match: 8, lazy_max: 32, nice_match: 128, chain_depth: 256 },
    LevelProfile { good_match: 32, lazy_max: 128, nice_match: 258, chain_depth: 1024 },
    LevelProfile { good_match: 32, lazy_max: 258, nice_match: 258, chain_depth: 4096 },
];

/// Clamps `level` to 0..=9 and returns its profile and strategy.
pub fn profile_for(level: u8) -> (LevelProfile, Strategy) {
    let level = level.min(9) as usize;
    let profile = PROFILE_TABLE[level];
    let strategy = if level == 0 {
        Strategy::Stored
    } else if profile.lazy_max == 0 {
        Strategy::Greedy
    } else {
        Strategy::Lazy
    };
    (profile, strategy)
}
