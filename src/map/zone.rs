use std::ops::RangeInclusive;

use glam::UVec2;

use crate::map::MapId;

/// A block of tiles that sends the player to another map when stepped on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionZone {
    pub name: &'static str,
    pub xs: RangeInclusive<u32>,
    pub ys: RangeInclusive<u32>,
    pub destination: MapId,
    /// Arrival tile on the destination map; `None` uses that map's initial position.
    pub arrival: Option<UVec2>,
}

impl TransitionZone {
    pub fn contains(&self, tile: UVec2) -> bool {
        self.xs.contains(&tile.x) && self.ys.contains(&tile.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let zone = TransitionZone {
            name: "forest",
            xs: 4..=5,
            ys: 0..=0,
            destination: MapId::DarkForest,
            arrival: Some(UVec2::new(2, 2)),
        };

        assert!(zone.contains(UVec2::new(4, 0)));
        assert!(zone.contains(UVec2::new(5, 0)));
        assert!(!zone.contains(UVec2::new(6, 0)));
        assert!(!zone.contains(UVec2::new(4, 1)));
    }
}
