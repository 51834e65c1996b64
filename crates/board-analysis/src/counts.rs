//! Piece counts and material balance.

use std::fmt;

use board_core::Role;
use serde::Serialize;

/// How many pieces of each role one side has on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PieceCounts {
    pub king: u32,
    pub queen: u32,
    pub rook: u32,
    pub bishop: u32,
    pub knight: u32,
    pub pawn: u32,
}

impl PieceCounts {
    /// Returns the count for one role.
    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::King => self.king,
            Role::Queen => self.queen,
            Role::Rook => self.rook,
            Role::Bishop => self.bishop,
            Role::Knight => self.knight,
            Role::Pawn => self.pawn,
        }
    }

    /// Adds one piece of `role`.
    pub fn add(&mut self, role: Role) {
        match role {
            Role::King => self.king += 1,
            Role::Queen => self.queen += 1,
            Role::Rook => self.rook += 1,
            Role::Bishop => self.bishop += 1,
            Role::Knight => self.knight += 1,
            Role::Pawn => self.pawn += 1,
        }
    }

    /// Total number of pieces, kings included.
    pub fn total(&self) -> u32 {
        Role::ALL.iter().map(|&role| self.get(role)).sum()
    }

    /// Material value using queen 9, rook 5, bishop 3, knight 3, pawn 1.
    pub fn material(&self) -> u32 {
        Role::ALL
            .iter()
            .map(|&role| self.get(role) * role.material_value())
            .sum()
    }
}

impl fmt::Display for PieceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, role) in Role::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", role.letter(), self.get(role))?;
        }
        Ok(())
    }
}

/// Which side is ahead in material, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "side", content = "advantage", rename_all = "lowercase")]
pub enum MaterialBalance {
    Equal,
    White(u32),
    Black(u32),
}

impl MaterialBalance {
    /// Classifies a white-minus-black differential.
    pub fn from_differential(diff: i32) -> Self {
        match diff {
            0 => MaterialBalance::Equal,
            d if d > 0 => MaterialBalance::White(d.unsigned_abs()),
            d => MaterialBalance::Black(d.unsigned_abs()),
        }
    }
}

impl fmt::Display for MaterialBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialBalance::Equal => write!(f, "Equal"),
            MaterialBalance::White(n) => write!(f, "White +{}", n),
            MaterialBalance::Black(n) => write!(f, "Black +{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_add_and_total() {
        let mut counts = PieceCounts::default();
        counts.add(Role::King);
        counts.add(Role::Pawn);
        counts.add(Role::Pawn);
        assert_eq!(counts.get(Role::Pawn), 2);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.material(), 2);
    }

    #[test]
    fn starting_material_is_39() {
        let counts = PieceCounts {
            king: 1,
            queen: 1,
            rook: 2,
            bishop: 2,
            knight: 2,
            pawn: 8,
        };
        assert_eq!(counts.material(), 39);
        assert_eq!(counts.to_string(), "K:1 Q:1 R:2 B:2 N:2 P:8");
    }

    #[test]
    fn balance_from_differential() {
        assert_eq!(MaterialBalance::from_differential(0), MaterialBalance::Equal);
        assert_eq!(MaterialBalance::from_differential(9), MaterialBalance::White(9));
        assert_eq!(MaterialBalance::from_differential(-4), MaterialBalance::Black(4));
    }

    #[test]
    fn balance_display_uses_magnitude() {
        assert_eq!(MaterialBalance::White(4).to_string(), "White +4");
        assert_eq!(MaterialBalance::Black(3).to_string(), "Black +3");
        assert_eq!(MaterialBalance::Equal.to_string(), "Equal");
    }
}
