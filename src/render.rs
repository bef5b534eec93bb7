use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::grid::Grid;

/// Clears the sink and writes the current generation, one line per row,
/// two columns per cell.
pub fn display<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "{grid}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_writes_cell_symbols() {
        let grid: Grid = "o \n o".parse().unwrap();
        let mut out = Vec::new();
        display(&mut out, &grid).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("O   \n  O \n"));
    }
}
