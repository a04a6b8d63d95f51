//! Emission of the computed tables as Rust source.
//!
//! The output is a single generated module: one `static` per oriented
//! piece, two global piece arrays partitioned by a size threshold, and
//! one record per block. The consuming engine defines the `Piece`,
//! `Block` and `Rotation` types; only data is generated here.

use std::io::{self, Write};

use crate::polyominoes::{Block, Coord, Piece, Quadrant};

/// Default size cutoff for the mini piece set.
pub const MINI_SIZE_LIMIT: usize = 4;

fn coord_list(coords: &[Coord]) -> String {
    let cells: Vec<String> = coords
        .iter()
        .map(|c| format!("({}, {})", c.x, c.y))
        .collect();
    format!("&[{}]", cells.join(", "))
}

fn const_name(piece: &Piece) -> String {
    piece.name().to_uppercase()
}

fn write_piece<W: Write>(w: &mut W, id: usize, piece: &Piece) -> io::Result<()> {
    let bounds = piece.bounds();

    writeln!(w, "static {}: Piece = Piece {{", const_name(piece))?;
    writeln!(w, "    id: 0x{id:02x},")?;
    writeln!(w, "    size: {},", piece.size())?;
    writeln!(w, "    coords: {},", coord_list(piece.coords()))?;

    let quadrants: Vec<String> = Quadrant::ALL
        .iter()
        .map(|&quadrant| coord_list(piece.directed_corners(quadrant)))
        .collect();
    writeln!(w, "    corners: [{}],", quadrants.join(", "))?;

    writeln!(
        w,
        "    min_x: {}, min_y: {}, max_x: {}, max_y: {},",
        bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
    )?;
    writeln!(w, "}};")?;

    Ok(())
}

fn write_piece_set<W: Write>(w: &mut W, name: &str, pieces: &[&Piece]) -> io::Result<()> {
    writeln!(w, "pub static {}: [&Piece; {}] = [", name, pieces.len())?;
    for piece in pieces {
        writeln!(w, "    &{},", const_name(piece))?;
    }
    writeln!(w, "];")?;

    Ok(())
}

/// Write the full generated module for `blocks`.
///
/// Pieces of blocks whose size is at most `mini_size_limit`
/// additionally land in the mini set. Both global arrays are flattened
/// across blocks in input order.
pub fn write_tables<W: Write>(
    w: &mut W,
    blocks: &[Block],
    mini_size_limit: usize,
) -> io::Result<()> {
    writeln!(w, "// Generated by blocktables. Do not edit.")?;
    writeln!(w)?;
    writeln!(w, "use super::{{Block, Piece, Rotation}};")?;
    writeln!(w)?;

    for (block_id, block) in blocks.iter().enumerate() {
        for piece in block.pieces() {
            let id = block_id << 3 | piece.orientation() as usize;
            write_piece(w, id, piece)?;
        }
    }
    writeln!(w)?;

    let all: Vec<(&Block, &Piece)> = blocks
        .iter()
        .flat_map(|block| block.pieces().iter().map(move |piece| (block, piece)))
        .collect();

    let mini: Vec<&Piece> = all
        .iter()
        .filter(|(block, _)| block.size() <= mini_size_limit)
        .map(|&(_, piece)| piece)
        .collect();
    write_piece_set(w, "MINI_PIECE_SET", &mini)?;
    writeln!(w)?;

    let full: Vec<&Piece> = all.iter().map(|&(_, piece)| piece).collect();
    write_piece_set(w, "FULL_PIECE_SET", &full)?;
    writeln!(w)?;

    writeln!(w, "pub static BLOCK_SET: [Block; {}] = [", blocks.len())?;
    for block in blocks {
        writeln!(w, "    Block {{")?;
        writeln!(w, "        name: \"{}\",", block.name())?;
        writeln!(w, "        size: {},", block.size())?;

        let refs: Vec<String> = block
            .pieces()
            .iter()
            .map(|piece| format!("&{}", const_name(piece)))
            .collect();
        writeln!(w, "        pieces: &[{}],", refs.join(", "))?;

        writeln!(w, "        rotations: [")?;
        for rotation in block.rotations() {
            writeln!(
                w,
                "            Rotation {{ dx: {}, dy: {}, piece: &{} }},",
                rotation.dx,
                rotation.dy,
                const_name(block.piece(rotation.piece))
            )?;
        }
        writeln!(w, "        ],")?;
        writeln!(w, "    }},")?;
    }
    writeln!(w, "];")?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::polyominoes::Coord;

    fn block(name: &str, cells: &[(i32, i32)]) -> Block {
        let coords: Vec<Coord> = cells.iter().map(|&(x, y)| Coord::new(x, y)).collect();
        Block::new(name, &coords)
    }

    #[test]
    fn tables_for_a_two_block_set() {
        let blocks = [
            block("i1", &[(0, 0)]),
            block("l3", &[(0, 0), (1, 0), (0, -1)]),
        ];

        let mut out = Vec::new();
        write_tables(&mut out, &blocks, MINI_SIZE_LIMIT).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("static I1_0: Piece = Piece {"));
        assert!(text.contains("    id: 0x00,"));

        // Second block, orientation 2: id 1 << 3 | 2.
        assert!(text.contains("    id: 0x0a,"));

        // Both blocks are small, so the sets coincide: 1 + 4 pieces.
        assert!(text.contains("pub static MINI_PIECE_SET: [&Piece; 5] = ["));
        assert!(text.contains("pub static FULL_PIECE_SET: [&Piece; 5] = ["));
        assert!(text.contains("pub static BLOCK_SET: [Block; 2] = ["));

        // The monomino's rotations all resolve to its only piece.
        assert_eq!(
            text.matches("Rotation { dx: 0, dy: 0, piece: &I1_0 }").count(),
            8
        );
    }

    #[test]
    fn size_threshold_partitions_the_sets() {
        let blocks = [
            block("i2", &[(0, 0), (0, 1)]),
            block("i5", &[(0, 0), (0, 1), (0, 2), (0, -1), (0, -2)]),
        ];

        let mut out = Vec::new();
        write_tables(&mut out, &blocks, MINI_SIZE_LIMIT).unwrap();
        let text = String::from_utf8(out).unwrap();

        // A one-column shape is unchanged by the mirror at step 0, so
        // its second canonical orientation is the rotation at index 2.
        assert!(text.contains(
            "pub static MINI_PIECE_SET: [&Piece; 2] = [\n    &I2_0,\n    &I2_2,\n];"
        ));

        // Flattened in input order.
        assert!(text.contains(
            "pub static FULL_PIECE_SET: [&Piece; 4] = [\n    &I2_0,\n    &I2_2,\n    &I5_0,\n    &I5_2,\n];"
        ));
    }
}
