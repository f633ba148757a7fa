//! The tile vocabulary carried by collision layers.
//!
//! Collision layers are never drawn; their cells hold one of the codes below.
//! Decoding lives here so loaders and gameplay code agree on the numbers, but
//! movement resolution itself happens outside this crate.

use crate::map::layer::TileId;

/// A decoded collision-layer cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionTile {
    /// Creatures can stand here.
    Walkable,
    /// Neither creatures nor shots pass.
    Blocked,
    /// Creatures are blocked, shots pass.
    BlockedShootable,
    /// Stepping here moves the creature one action layer up.
    TransitionUp,
    /// Stepping here moves the creature one action layer down.
    TransitionDown,
    /// The upper half of the cell is blocked.
    HalfBlockedHorizontal,
    /// The upper half of the cell is blocked, shots pass.
    HalfBlockedHorizontalShootable,
    /// The left half of the cell is blocked.
    HalfBlockedVertical,
    /// The left half of the cell is blocked, shots pass.
    HalfBlockedVerticalShootable,
    /// Stairs; creatures move at reduced speed.
    Stairs,
    /// Stairs that also transition between action layers.
    StairsTransition,
}

impl CollisionTile {
    /// Decodes a collision-layer cell. Returns `None` for codes outside the
    /// vocabulary, which a well-formed map never contains.
    pub fn from_tile(tile: TileId) -> Option<CollisionTile> {
        use CollisionTile::*;
        Some(match tile {
            0 => Walkable,
            1 => Blocked,
            2 => BlockedShootable,
            3 => TransitionUp,
            4 => TransitionDown,
            5 => HalfBlockedHorizontal,
            6 => HalfBlockedHorizontalShootable,
            7 => HalfBlockedVertical,
            8 => HalfBlockedVerticalShootable,
            9 => Stairs,
            10 => StairsTransition,
            _ => return None,
        })
    }

    /// Whether a creature occupying the whole cell is blocked.
    pub fn blocks_movement(&self) -> bool {
        matches!(self, CollisionTile::Blocked | CollisionTile::BlockedShootable)
    }

    /// Whether shots are blocked.
    pub fn blocks_shots(&self) -> bool {
        matches!(
            self,
            CollisionTile::Blocked | CollisionTile::HalfBlockedHorizontal | CollisionTile::HalfBlockedVertical
        )
    }

    /// The action-layer delta applied when a creature steps on this cell.
    pub fn layer_transition(&self) -> i32 {
        match self {
            CollisionTile::TransitionUp => 1,
            CollisionTile::TransitionDown => -1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_vocabulary() {
        for code in 0..=10 {
            assert!(CollisionTile::from_tile(code).is_some(), "code {code} should decode");
        }
        assert_eq!(CollisionTile::from_tile(11), None);
        assert_eq!(CollisionTile::from_tile(TileId::MAX), None);
    }

    #[test]
    fn test_predicates() {
        assert!(CollisionTile::Blocked.blocks_movement());
        assert!(CollisionTile::Blocked.blocks_shots());
        assert!(!CollisionTile::BlockedShootable.blocks_shots());
        assert!(!CollisionTile::Walkable.blocks_movement());
        assert_eq!(CollisionTile::TransitionUp.layer_transition(), 1);
        assert_eq!(CollisionTile::TransitionDown.layer_transition(), -1);
        assert_eq!(CollisionTile::Stairs.layer_transition(), 0);
    }
}
