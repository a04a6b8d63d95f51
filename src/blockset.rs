//! The standard block set: the 21 shapes of sizes 1 through 5, in
//! their fixed input order.
//!
//! The base coordinates pin the orientation-index assignment for every
//! block; changing a definition silently renumbers the emitted pieces.

use crate::polyominoes::{Block, Coord};

/// A block definition: a name plus the cells of the base orientation.
pub struct BlockDef {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl BlockDef {
    pub fn coords(&self) -> Vec<Coord> {
        self.cells.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    /// Compute the block's full orientation set.
    pub fn build(&self) -> Block {
        Block::new(self.name, &self.coords())
    }
}

/// Monomino through pentominoes, named by the usual shape mnemonics.
pub static STANDARD_BLOCKS: [BlockDef; 21] = [
    BlockDef { name: "i1", cells: &[(0, 0)] },
    BlockDef { name: "i2", cells: &[(0, 0), (0, 1)] },
    BlockDef { name: "i3", cells: &[(0, 0), (0, 1), (0, -1)] },
    BlockDef { name: "l3", cells: &[(0, 0), (1, 0), (0, -1)] },
    BlockDef { name: "i4", cells: &[(0, 0), (0, 1), (0, 2), (0, -1)] },
    BlockDef { name: "l4", cells: &[(0, 0), (0, -1), (0, 1), (-1, 1)] },
    BlockDef { name: "t4", cells: &[(0, 0), (1, 0), (0, 1), (0, -1)] },
    BlockDef { name: "o4", cells: &[(0, 0), (1, 0), (0, 1), (1, 1)] },
    BlockDef { name: "z4", cells: &[(-1, 0), (0, 0), (0, 1), (1, 1)] },
    BlockDef { name: "i5", cells: &[(0, 0), (0, 1), (0, 2), (0, -1), (0, -2)] },
    BlockDef { name: "l5", cells: &[(0, 0), (0, 1), (0, -2), (0, -1), (-1, 1)] },
    BlockDef { name: "n5", cells: &[(0, -2), (0, -1), (0, 0), (-1, 0), (-1, 1)] },
    BlockDef { name: "p5", cells: &[(0, -1), (-1, 0), (0, 0), (-1, 1), (0, 1)] },
    BlockDef { name: "c5", cells: &[(0, 0), (0, 1), (-1, 1), (0, -1), (-1, -1)] },
    BlockDef { name: "y5", cells: &[(0, -1), (0, 0), (1, 0), (0, 1), (0, 2)] },
    BlockDef { name: "t5", cells: &[(0, 0), (0, -1), (0, 1), (-1, 1), (1, 1)] },
    BlockDef { name: "v5", cells: &[(0, 0), (1, 0), (2, 0), (0, -1), (0, -2)] },
    BlockDef { name: "w5", cells: &[(0, 0), (1, 0), (1, 1), (0, -1), (-1, -1)] },
    BlockDef { name: "z5", cells: &[(0, 0), (1, 0), (1, 1), (-1, 0), (-1, -1)] },
    BlockDef { name: "f5", cells: &[(-1, -1), (-1, 0), (0, 0), (1, 0), (0, 1)] },
    BlockDef { name: "x5", cells: &[(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1)] },
];

/// Build every standard block, in input order.
pub fn standard_block_set() -> Vec<Block> {
    STANDARD_BLOCKS.iter().map(BlockDef::build).collect()
}

/// Look up a standard block definition by name.
pub fn find(name: &str) -> Option<&'static BlockDef> {
    STANDARD_BLOCKS.iter().find(|def| def.name == name)
}
