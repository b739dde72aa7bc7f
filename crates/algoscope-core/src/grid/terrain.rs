//! Terrain kinds and their traversal costs.

use std::fmt;

/// The kind of ground a grid cell is made of.
///
/// Unweighted traversals only care whether a cell is passable. Weighted
/// traversals also charge the [`Terrain::cost`] of every cell they enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terrain {
    /// Open ground.
    #[default]
    Plain,
    /// Passable but expensive ground.
    Forest,
    /// Impassable cell.
    Wall,
}

impl Terrain {
    /// Cost of entering a [`Terrain::Plain`] cell.
    pub const PLAIN_COST: u32 = 1;

    /// Cost of entering a [`Terrain::Forest`] cell.
    pub const FOREST_COST: u32 = 5;

    /// Returns the cost of entering a cell of this terrain, or `None` for walls.
    pub fn cost(self) -> Option<u32> {
        match self {
            Terrain::Plain => Some(Self::PLAIN_COST),
            Terrain::Forest => Some(Self::FOREST_COST),
            Terrain::Wall => None,
        }
    }

    /// Returns `true` unless this is a wall.
    pub fn is_passable(self) -> bool {
        self != Terrain::Wall
    }

    /// Returns the character used for this terrain in grid layouts.
    pub fn symbol(self) -> char {
        match self {
            Terrain::Plain => '.',
            Terrain::Forest => '~',
            Terrain::Wall => '#',
        }
    }

    /// Parses a layout character back into a terrain.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Terrain::Plain),
            '~' => Some(Terrain::Forest),
            '#' => Some(Terrain::Wall),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Plain => "plain",
            Terrain::Forest => "forest",
            Terrain::Wall => "wall",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs() {
        assert_eq!(Terrain::Plain.cost(), Some(1));
        assert_eq!(Terrain::Forest.cost(), Some(5));
        assert_eq!(Terrain::Wall.cost(), None);
    }

    #[test]
    fn test_symbols_round_trip() {
        for terrain in [Terrain::Plain, Terrain::Forest, Terrain::Wall] {
            assert_eq!(Terrain::from_symbol(terrain.symbol()), Some(terrain));
        }
        assert_eq!(Terrain::from_symbol('x'), None);
    }
}
