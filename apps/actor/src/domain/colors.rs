//! Resource colors and the token-count vector algebra.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// One of the six token kinds, in wire order. The first five are
/// regular gem colors; yellow is the wildcard that can stand in for
/// any regular color when paying for a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Color {
    /// All six colors, in slot order.
    pub const ALL: [Color; 6] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::White,
        Color::Yellow,
    ];

    /// The five regular colors, excluding the wildcard.
    pub const REGULAR: [Color; 5] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::White,
    ];

    /// The wildcard color.
    pub const WILDCARD: Color = Color::Yellow;

    pub const fn is_wildcard(self) -> bool {
        matches!(self, Color::Yellow)
    }
}

/// A fixed-width vector of token counts, one slot per [`Color`].
///
/// Comparison is the component-wise product order, which is partial:
/// when one vector has more of some color and less of another, the two
/// are incomparable and `partial_cmp` returns `None`. There is
/// deliberately no `Ord` impl.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ColorVec([u8; 6]);

impl ColorVec {
    pub const fn empty() -> Self {
        ColorVec([0; 6])
    }

    pub const fn new(black: u8, blue: u8, green: u8, red: u8, white: u8, yellow: u8) -> Self {
        ColorVec([black, blue, green, red, white, yellow])
    }

    pub fn get(&self, color: Color) -> u8 {
        self.0[color as usize]
    }

    pub fn set(&mut self, color: Color, value: u8) {
        self.0[color as usize] = value;
    }

    /// Add `value` tokens of one color.
    pub fn add(&mut self, color: Color, value: u8) {
        self.0[color as usize] += value;
    }

    /// Remove up to `value` tokens of one color, stopping at zero.
    pub fn sub(&mut self, color: Color, value: u8) {
        let slot = &mut self.0[color as usize];
        *slot = slot.saturating_sub(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Sum over all slots. Counts are game-scale small, so this cannot
    /// overflow in practice.
    pub fn total(&self) -> u8 {
        self.iter().sum()
    }

    /// Component-wise difference floored at zero.
    pub fn saturating_sub(&self, other: &ColorVec) -> ColorVec {
        let mut out = *self;
        out.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a = a.saturating_sub(*b));
        out
    }
}

impl From<[u8; 6]> for ColorVec {
    fn from(slots: [u8; 6]) -> Self {
        ColorVec(slots)
    }
}

impl PartialOrd for ColorVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut less = false;
        let mut greater = false;
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            match a.cmp(b) {
                Ordering::Less => less = true,
                Ordering::Greater => greater = true,
                Ordering::Equal => {}
            }
        }
        match (less, greater) {
            (false, false) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (true, true) => None,
        }
    }
}

impl Add for ColorVec {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for ColorVec {
    fn add_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0.iter())
            .for_each(|(a, b)| *a += b);
    }
}

// Unchecked: underflows (and panics in debug builds) if rhs exceeds
// self in any slot. Payment computation uses `saturating_sub` instead.
impl Sub for ColorVec {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl SubAssign for ColorVec {
    fn sub_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0.iter())
            .for_each(|(a, b)| *a -= b);
    }
}
