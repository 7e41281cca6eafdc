//! Text rendering of a grid and the revealed part of its path.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridstar_core::{CellKind, Grid, Point};
use gridstar_paths::RevealStep;

const COL_NORMAL: Color = Color::Rgb {
    r: 90,
    g: 90,
    b: 100,
};
const COL_OBSTACLE: Color = Color::Rgb {
    r: 40,
    g: 80,
    b: 220,
};
const COL_START: (u8, u8, u8) = (220, 40, 40);
const COL_END: (u8, u8, u8) = (40, 200, 60);

/// Glyph marking a revealed path cell.
pub const PATH_GLYPH: char = '*';

/// Linear blend between two RGB colours, `t` clamped to `[0, 1]`.
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color::Rgb {
        r: mix(from.0, to.0),
        g: mix(from.1, to.1),
        b: mix(from.2, to.2),
    }
}

/// Colour of a revealed path cell: shifts from the start colour to the end
/// colour as the reveal progresses.
pub fn path_color(progress: f32) -> Color {
    blend(COL_START, COL_END, progress)
}

/// Glyph and colour for a cell. `revealed` carries the reveal progress if
/// the cell is on the shown part of the path; only Normal cells change.
pub fn cell_style(kind: CellKind, revealed: Option<f32>) -> (char, Color) {
    let (r, g, b) = COL_START;
    let start = Color::Rgb { r, g, b };
    let (r, g, b) = COL_END;
    let end = Color::Rgb { r, g, b };
    match (kind, revealed) {
        (CellKind::Normal, Some(progress)) => (PATH_GLYPH, path_color(progress)),
        (CellKind::Normal, None) => (kind.glyph(), COL_NORMAL),
        (CellKind::Obstacle, _) => (kind.glyph(), COL_OBSTACLE),
        (CellKind::Start, _) => (kind.glyph(), start),
        (CellKind::End, _) => (kind.glyph(), end),
    }
}

/// Draw `grid` row by row, overlaying the revealed path steps.
pub fn draw(out: &mut impl Write, grid: &Grid, revealed: &[RevealStep]) -> io::Result<()> {
    let progress: HashMap<Point, f32> = revealed.iter().map(|s| (s.pos, s.progress)).collect();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let kind = grid.kind(p).unwrap_or_default();
            let (ch, color) = cell_style(kind, progress.get(&p).copied());
            queue!(out, SetForegroundColor(color), Print(ch))?;
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_and_middle() {
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.0), Color::Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            blend((0, 0, 0), (200, 100, 50), 0.5),
            Color::Rgb {
                r: 100,
                g: 50,
                b: 25
            }
        );
        assert_eq!(
            blend((0, 0, 0), (200, 100, 50), 2.0),
            Color::Rgb {
                r: 200,
                g: 100,
                b: 50
            }
        );
    }

    #[test]
    fn only_normal_cells_take_path_colour() {
        let (ch, color) = cell_style(CellKind::Normal, Some(1.0));
        assert_eq!(ch, PATH_GLYPH);
        assert_eq!(color, path_color(1.0));

        let (ch, _) = cell_style(CellKind::Start, Some(0.2));
        assert_eq!(ch, 'S');
        let (ch, _) = cell_style(CellKind::End, Some(1.0));
        assert_eq!(ch, 'E');
        assert_eq!(cell_style(CellKind::Normal, None).0, '.');
    }

    #[test]
    fn draw_marks_revealed_cells() {
        let grid = Grid::parse("S..\n.#.\n..E").unwrap();
        let steps = [
            RevealStep {
                index: 0,
                pos: Point::new(0, 0),
                progress: 0.25,
            },
            RevealStep {
                index: 1,
                pos: Point::new(1, 0),
                progress: 0.5,
            },
        ];
        let mut buf = Vec::new();
        draw(&mut buf, &grid, &steps).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let glyphs: String = text
            .chars()
            .filter(|c| matches!(c, '.' | '#' | 'S' | 'E' | '*' | '\n'))
            .collect();
        assert_eq!(glyphs, "S*.\n.#.\n..E\n");
    }
}
