//! Precomputed attack sets, built once on first use.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// Ray directions: the first four are straight, the last four diagonal.
const DIR_N: usize = 0;
const DIR_S: usize = 1;
const DIR_E: usize = 2;
const DIR_W: usize = 3;
const DIR_NE: usize = 4;
const DIR_NW: usize = 5;
const DIR_SE: usize = 6;
const DIR_SW: usize = 7;

const RAY_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const STRAIGHT_DIRS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
const DIAGONAL_DIRS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];

fn leaper_table(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        *slot = deltas
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .fold(Bitboard::EMPTY, Bitboard::with);
    }
    table
}

static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

static RAYS: Lazy<[[Bitboard; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    for (dir, &(dr, df)) in RAY_DELTAS.iter().enumerate() {
        for idx in 0..64 {
            let mut mask = Bitboard::EMPTY;
            let mut cur = Square::from_index(idx).offset(dr, df);
            while let Some(sq) = cur {
                mask = mask.with(sq);
                cur = sq.offset(dr, df);
            }
            rays[dir][idx] = mask;
        }
    }
    rays
});

/// Rays heading toward higher square indices find their nearest blocker at the
/// lowest set bit; the others at the highest.
fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, DIR_N | DIR_E | DIR_NE | DIR_NW)
}

fn ray_attacks(sq: Square, dir: usize, occupancy: Bitboard) -> Bitboard {
    let ray = RAYS[dir][sq.index()];
    let blockers = ray.0 & occupancy.0;
    if blockers == 0 {
        return ray;
    }
    let nearest = if is_increasing_dir(dir) {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    };
    Bitboard(ray.0 ^ RAYS[dir][nearest].0)
}

fn slide(sq: Square, occupancy: Bitboard, dirs: &[usize; 4]) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |acc, &dir| {
        Bitboard(acc.0 | ray_attacks(sq, dir, occupancy).0)
    })
}

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` on `sq` attacks
#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Diagonal slider attacks; the first occupied square on each ray is included.
#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    slide(sq, occupancy, &DIAGONAL_DIRS)
}

/// Straight slider attacks; the first occupied square on each ray is included.
#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    slide(sq, occupancy, &STRAIGHT_DIRS)
}
