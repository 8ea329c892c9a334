//! Plain-text rendering of walls for terminals and logs

use crate::algorithm::rows::Row;
use crate::algorithm::walls::Wall;
use std::io::Write;

/// Characters used for each brick unit
const UNIT_CHARS: usize = 2;

/// Draw a row as bricks two characters per unit, e.g. `[][--]` for `1,2`
pub fn render_row(row: &Row) -> String {
    let mut line = String::with_capacity(row.width() * UNIT_CHARS);
    for &brick in row.bricks() {
        line.push('[');
        line.push_str(&"-".repeat(usize::from(brick) * UNIT_CHARS - 2));
        line.push(']');
    }
    line
}

/// Draw a wall one row per line, top row first
pub fn render_wall(wall: &Wall) -> String {
    wall.rows()
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write walls separated by blank lines
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_walls<W: Write>(out: &mut W, walls: &[Wall]) -> std::io::Result<()> {
    for (index, wall) in walls.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", render_wall(wall))?;
    }
    Ok(())
}
