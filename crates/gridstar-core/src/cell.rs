//! The [`Cell`] type: a grid square with a [`CellKind`] and per-search state.

use std::fmt;

use crate::geom::Point;

/// What occupies a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Normal,
    Obstacle,
    Start,
    End,
}

impl CellKind {
    /// Whether a path may enter a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Whether this is a `Start` or `End` marker.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Glyph used by the text form of a grid.
    pub const fn glyph(self) -> char {
        match self {
            Self::Normal => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Normal),
            '#' => Some(Self::Obstacle),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Obstacle => "obstacle",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// A single grid square.
///
/// `g`, `h`, `f` and `parent` belong to the search currently (or most
/// recently) run over the grid; they carry no meaning until `discovered`
/// is set and are cleared by [`reset_search`](Self::reset_search).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    pub kind: CellKind,
    /// Cost of the best known path from the start to this cell.
    pub g: i32,
    /// Heuristic estimate of the remaining cost to the end.
    pub h: i32,
    /// `g + h`.
    pub f: i32,
    /// Cell this one was reached from on the best known path.
    pub parent: Option<Point>,
    /// Whether the current search has assigned `g` yet.
    pub discovered: bool,
}

impl Cell {
    /// A `Normal` cell at `pos` with cleared search state.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            kind: CellKind::Normal,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
            discovered: false,
        }
    }

    /// Set the kind (builder).
    #[inline]
    pub const fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Clear search state, keeping position and kind.
    #[inline]
    pub fn reset_search(&mut self) {
        self.g = 0;
        self.h = 0;
        self.f = 0;
        self.parent = None;
        self.discovered = false;
    }

    /// Record a (better) route to this cell.
    #[inline]
    pub fn relax(&mut self, parent: Point, g: i32, h: i32) {
        self.parent = Some(parent);
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.discovered = true;
    }

    /// Coordinate the cell was created at.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }
}
