//! Lane index tables, generated at compile time.
//!
//! Each table is indexed by output lane and names the source lane. Two-source
//! tables index the concatenation `in1 ++ in2`, so values `>= N` pick from the
//! second vector. Tables depend only on the lane count, which the register
//! width fixes per scalar kind.

/// Enough butterfly levels for the narrowest kind (32 half lanes).
pub const MAX_LEVELS: usize = 5;

/// Exchange levels with a named entry point (`exchange0..exchange3`).
pub const EXCHANGE_TABLES: usize = 4;

pub const fn log2(n: usize) -> usize {
    n.trailing_zeros() as usize
}

pub const fn identity<const N: usize>() -> [usize; N] {
    let mut t = [0; N];
    let mut i = 0;
    while i < N {
        t[i] = i;
        i += 1;
    }
    t
}

/// Swaps lane `i` with lane `i ^ (N >> (level + 1))`.
pub const fn butterfly<const N: usize>(level: usize) -> [usize; N] {
    let levels = log2(N);
    if level >= levels {
        return identity::<N>();
    }
    let distance = 1 << (levels - 1 - level);
    let mut t = [0; N];
    let mut i = 0;
    while i < N {
        t[i] = i ^ distance;
        i += 1;
    }
    t
}

pub const fn butterfly_levels<const N: usize>() -> [[usize; N]; MAX_LEVELS] {
    let mut t = [[0; N]; MAX_LEVELS];
    let mut level = 0;
    while level < MAX_LEVELS {
        t[level] = butterfly::<N>(level);
        level += 1;
    }
    t
}

/// Left rotation: lane `i` reads lane `(i + n) % N`.
pub const fn rotation<const N: usize>(n: usize) -> [usize; N] {
    let mut t = [0; N];
    let mut i = 0;
    while i < N {
        t[i] = (i + n) % N;
        i += 1;
    }
    t
}

/// Copies the even (`odd == false`) or odd lane of each pair into both lanes.
pub const fn duplicate<const N: usize>(odd: bool) -> [usize; N] {
    let mut t = [0; N];
    let mut i = 0;
    while i < N {
        t[i] = if odd { i | 1 } else { i & !1 };
        i += 1;
    }
    t
}

pub const fn parity<const N: usize>(odd: bool) -> [bool; N] {
    let mut t = [false; N];
    let mut i = 0;
    while i < N {
        t[i] = (i % 2 == 1) == odd;
        i += 1;
    }
    t
}

/// Two-source tables `(out1, out2)` for one exchange level.
///
/// The level must leave a non-zero mask, i.e. `N >> (level + 1) >= 1`.
pub const fn exchange<const N: usize>(level: usize) -> ([usize; N], [usize; N]) {
    let mask = N >> (level + 1);
    let mut out1 = [0; N];
    let mut out2 = [0; N];
    let mut i = 0;
    while i < N {
        let low = i & !mask;
        let high = i | mask;
        if i & mask == 0 {
            out1[i] = low;
            out2[i] = high;
        } else {
            out1[i] = N + low;
            out2[i] = N + high;
        }
        i += 1;
    }
    (out1, out2)
}

/// Exchange tables for every named level that has a non-zero mask. Levels
/// without one stay as identity placeholders and are rejected before use.
pub const fn exchange_levels<const N: usize>() -> [([usize; N], [usize; N]); EXCHANGE_TABLES] {
    let mut t = [(identity::<N>(), identity::<N>()); EXCHANGE_TABLES];
    let mut level = 0;
    while level < EXCHANGE_TABLES {
        if N >> (level + 1) > 0 {
            t[level] = exchange::<N>(level);
        }
        level += 1;
    }
    t
}
