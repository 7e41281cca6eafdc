use gridstar_core::{CellKind, Grid, Point};

use crate::cost::{heuristic, move_cost};
use crate::error::PathError;
use crate::open::OpenList;
use crate::path::Path;

/// Counters describing the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells selected as the expansion center.
    pub expanded: usize,
    /// Cells given their first G value.
    pub discovered: usize,
    /// Already discovered cells whose G value dropped.
    pub improved: usize,
}

/// A* search over an 8-connected [`Grid`].
///
/// Holds the open and closed sets of a search session. Buffers are kept
/// between searches so repeated queries reuse their allocations; their
/// contents are cleared at the start of every search.
#[derive(Debug, Default)]
pub struct PathFinder {
    open: OpenList,
    closed: Vec<bool>,
    nbuf: Vec<Point>,
    stats: SearchStats,
}

impl PathFinder {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(8),
            ..Self::default()
        }
    }

    /// Statistics of the last call to [`search`](Self::search).
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a path from `start` to `end`.
    ///
    /// The grid must already carry matching Start/End markers (see
    /// [`Grid::place_endpoints`]); the search resets every cell's search
    /// state before it begins and leaves the final G/H/F/parent values in
    /// place afterwards.
    pub fn search(&mut self, grid: &mut Grid, start: Point, end: Point) -> Result<Path, PathError> {
        grid.validate_endpoints(start, end)?;
        grid.reset();
        self.begin(grid.len());

        let start_h = heuristic(start, end);
        if let Some(cell) = grid.cell_mut(start) {
            cell.g = 0;
            cell.h = start_h;
            cell.f = start_h;
            cell.discovered = true;
        }
        self.open.push(start, start_h, start_h);

        loop {
            let Some(entry) = self.open.pop() else {
                log::debug!(
                    "no path from {start} to {end} after expanding {} cells",
                    self.stats.expanded
                );
                return Err(PathError::PathNotFound { start, end });
            };
            let center = entry.pos;
            let Some(ci) = grid.index(center) else {
                continue;
            };
            let Some(cell) = grid.cell(center) else {
                continue;
            };
            // Outdated entry: the cell was closed or improved after the push.
            if self.closed[ci] || cell.f != entry.f {
                continue;
            }
            let center_g = cell.g;
            let center_kind = cell.kind;

            self.stats.expanded += 1;
            log::trace!("expand {center} g={center_g} f={}", entry.f);

            if center_kind == CellKind::End {
                let path = Self::reconstruct(grid, center);
                log::debug!(
                    "path {start} -> {end}: {} cells, cost {}, {} expanded, {} open left",
                    path.len(),
                    path.cost(),
                    self.stats.expanded,
                    self.open.len()
                );
                return Ok(path);
            }

            self.nbuf.clear();
            self.nbuf.extend(grid.neighbors(center));
            for &np in &self.nbuf {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.closed[ni] {
                    continue;
                }
                let Some(n) = grid.cell_mut(np) else {
                    continue;
                };
                if !n.kind.is_passable() {
                    continue;
                }

                let g = center_g + move_cost(center, np);
                if n.discovered && g >= n.g {
                    continue;
                }
                if n.discovered {
                    self.stats.improved += 1;
                } else {
                    self.stats.discovered += 1;
                }
                n.relax(center, g, heuristic(np, end));
                self.open.push(np, n.f, n.h);
            }

            self.closed[ci] = true;
        }
    }

    fn begin(&mut self, len: usize) {
        self.open.clear();
        self.closed.clear();
        self.closed.resize(len, false);
        self.stats = SearchStats::default();
    }

    /// Walk parent links back from `end`, then reverse.
    fn reconstruct(grid: &Grid, end: Point) -> Path {
        let cost = grid.cell(end).map_or(0, |c| c.g);
        let mut points = Vec::new();
        let mut cur = Some(end);
        while let Some(p) = cur {
            points.push(p);
            cur = grid.cell(p).and_then(|c| c.parent);
        }
        points.reverse();
        Path::new(points, cost)
    }
}

/// Mark `start` and `end` on the grid, then search between them with a
/// fresh [`PathFinder`].
pub fn find_path(grid: &mut Grid, start: Point, end: Point) -> Result<Path, PathError> {
    grid.place_endpoints(start, end)?;
    PathFinder::new().search(grid, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::octile;
    use gridstar_core::GridError;

    fn open_grid(w: i32, h: i32) -> Grid {
        Grid::new(w, h).unwrap()
    }

    fn assert_connected(path: &Path, grid: &Grid) {
        for w in path.points().windows(2) {
            let d = w[1] - w[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d != Point::ZERO, "{w:?}");
        }
        for &p in path {
            assert_ne!(grid.kind(p), Some(CellKind::Obstacle), "{p}");
        }
        let cost: i32 = path
            .points()
            .windows(2)
            .map(|w| move_cost(w[0], w[1]))
            .sum();
        assert_eq!(cost, path.cost());
    }

    #[test]
    fn diagonal_across_open_grid() {
        let mut grid = open_grid(5, 5);
        let path = find_path(&mut grid, Point::new(0, 0), Point::new(4, 4)).unwrap();
        assert_eq!(path.cost(), 56);
        assert_eq!(path.len(), 5);
        assert_eq!(
            path.points(),
            &[
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
                Point::new(4, 4),
            ]
        );
        assert_connected(&path, &grid);
    }

    #[test]
    fn open_grid_cost_matches_octile_distance() {
        let mut grid = open_grid(7, 6);
        let mut finder = PathFinder::new();
        let points: Vec<Point> = grid.bounds().iter().collect();
        for &start in &points {
            for &end in points.iter().step_by(5) {
                grid.place_endpoints(start, end).unwrap();
                let path = finder.search(&mut grid, start, end).unwrap();
                assert_eq!(path.cost(), octile(start, end), "{start} -> {end}");
                assert_eq!(path.start(), Some(start));
                assert_eq!(path.end(), Some(end));
                assert_connected(&path, &grid);
            }
        }
    }

    #[test]
    fn start_equals_end() {
        let mut grid = open_grid(3, 3);
        let p = Point::new(1, 2);
        let path = find_path(&mut grid, p, p).unwrap();
        assert_eq!(path.points(), &[p]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn routes_around_center_obstacle() {
        let mut grid = Grid::with_obstacles(3, 3, [Point::new(1, 1)]).unwrap();
        let path = find_path(&mut grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert!(!path.points().contains(&Point::new(1, 1)));
        assert!((3..=4).contains(&path.len()));
        assert_eq!(path.cost(), 34);
        assert_eq!(
            path.points(),
            &[Point::new(0, 0), Point::new(1, 0), Point::new(2, 1), Point::new(2, 2)]
        );
        assert_connected(&path, &grid);
    }

    #[test]
    fn enclosed_end_is_not_found() {
        let mut grid = Grid::parse(
            "\
S......
.......
...###.
...#E#.
...###.",
        )
        .unwrap();
        let (start, end) = (Point::new(0, 0), Point::new(4, 3));
        let mut finder = PathFinder::new();
        assert_eq!(
            finder.search(&mut grid, start, end),
            Err(PathError::PathNotFound { start, end })
        );
        let passable = grid.cells().filter(|c| c.kind.is_passable()).count();
        assert_eq!(finder.last_stats().expanded, passable - 1);
    }

    #[test]
    fn disconnected_region_is_not_found() {
        let mut grid = Grid::parse(
            "\
S.#..
..#..
..#.E",
        )
        .unwrap();
        let err = PathFinder::new()
            .search(&mut grid, Point::new(0, 0), Point::new(4, 2))
            .unwrap_err();
        assert!(matches!(err, PathError::PathNotFound { .. }));
    }

    #[test]
    fn squeezes_through_diagonal_gap() {
        let mut grid = Grid::parse(
            "\
S.#..
..#..
.#...
..#.E",
        )
        .unwrap();
        let path = PathFinder::new()
            .search(&mut grid, Point::new(0, 0), Point::new(4, 3))
            .unwrap();
        assert!(path.points().contains(&Point::new(2, 2)));
        assert_connected(&path, &grid);
    }

    #[test]
    fn repeated_searches_agree() {
        let text = "\
S..#......
.#.#.####.
.#...#....
.####.#.#.
......#.#E";
        let (start, end) = (Point::new(0, 0), Point::new(9, 4));
        let mut grid = Grid::parse(text).unwrap();
        let mut finder = PathFinder::new();
        let first = finder.search(&mut grid, start, end).unwrap();
        let stats = finder.last_stats();
        let second = finder.search(&mut grid, start, end).unwrap();
        assert_eq!(first, second);
        assert_eq!(stats, finder.last_stats());

        let mut fresh = Grid::parse(text).unwrap();
        let third = PathFinder::new().search(&mut fresh, start, end).unwrap();
        assert_eq!(first, third);
        assert_connected(&first, &grid);
    }

    #[test]
    fn improves_cell_reached_by_worse_route() {
        // (8, 2) is first discovered diagonally from (7, 3) with G = 104,
        // then reached straight from (7, 2) for 96 and re-parented.
        let mut grid = Grid::parse(
            "\
S..#......
.#.#.####.
.#...#....
.####.#.#.
......#.#E",
        )
        .unwrap();
        let mut finder = PathFinder::new();
        let path = finder
            .search(&mut grid, Point::new(0, 0), Point::new(9, 4))
            .unwrap();
        assert_eq!(finder.last_stats().improved, 1);

        let cell = grid.cell(Point::new(8, 2)).unwrap();
        assert_eq!(cell.g, 96);
        assert_eq!(cell.parent, Some(Point::new(7, 2)));

        assert_eq!(path.cost(), 120);
        assert_eq!(
            path.points(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(4, 2),
                Point::new(5, 3),
                Point::new(6, 2),
                Point::new(7, 2),
                Point::new(8, 2),
                Point::new(9, 3),
                Point::new(9, 4),
            ]
        );
        assert_connected(&path, &grid);
    }

    #[test]
    fn search_leaves_costs_on_grid() {
        let mut grid = open_grid(4, 1);
        let path = find_path(&mut grid, Point::new(0, 0), Point::new(3, 0)).unwrap();
        assert_eq!(path.cost(), 30);
        let end = grid.cell(Point::new(3, 0)).unwrap();
        assert_eq!((end.g, end.h, end.f), (30, 0, 30));
        assert_eq!(end.parent, Some(Point::new(2, 0)));
        let start = grid.cell(Point::new(0, 0)).unwrap();
        assert_eq!(start.parent, None);
        assert!(start.discovered);
    }

    #[test]
    fn start_is_never_rediscovered() {
        // The start keeps G = 0 and no parent even though its neighbours
        // see it again while being expanded.
        let mut grid = open_grid(3, 3);
        find_path(&mut grid, Point::new(1, 1), Point::new(2, 2)).unwrap();
        let start = grid.cell(Point::new(1, 1)).unwrap();
        assert_eq!((start.g, start.parent), (0, None));
    }

    #[test]
    fn rejects_bad_configuration() {
        let mut grid = open_grid(3, 3);
        let err = find_path(&mut grid, Point::new(0, 0), Point::new(3, 3)).unwrap_err();
        assert!(matches!(err, PathError::Grid(GridError::OutOfBounds { .. })));

        let mut grid = Grid::parse("S.S\n...\n..E").unwrap();
        let err = PathFinder::new()
            .search(&mut grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap_err();
        assert_eq!(
            err,
            PathError::Grid(GridError::DuplicateEndpoint {
                kind: CellKind::Start,
                count: 2
            })
        );

        let mut grid = open_grid(3, 3);
        let err = PathFinder::new()
            .search(&mut grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap_err();
        assert_eq!(err, PathError::Grid(GridError::MissingEndpoint(CellKind::Start)));
    }

    #[test]
    fn stats_count_work() {
        let mut grid = open_grid(5, 5);
        let mut finder = PathFinder::new();
        grid.place_endpoints(Point::new(0, 0), Point::new(4, 4)).unwrap();
        finder.search(&mut grid, Point::new(0, 0), Point::new(4, 4)).unwrap();
        let stats = finder.last_stats();
        assert_eq!(stats.expanded, 5);
        assert!(stats.discovered >= 4);
    }
}
