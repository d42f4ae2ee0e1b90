//! Index-driven layout arithmetic.
//!
//! Every diagram places a fixed list of items along a row or into a grid.
//! Item `i` lands at `start + i * (size + gap)`; nothing is measured or
//! iterated, so the same constants always give the same coordinates.
//! Canvas bounds are not checked.

/// Items of equal size laid out along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub start: f64,
    pub size: f64,
    pub gap: f64,
}

impl RowLayout {
    pub fn new(start: f64, size: f64, gap: f64) -> Self {
        Self { start, size, gap }
    }

    /// Center `count` items on an axis of length `extent`.
    ///
    /// The start offset is floored to a whole unit.
    pub fn centered(count: usize, size: f64, gap: f64, extent: f64) -> Self {
        let total = Self::span(count, size, gap);
        Self::new(((extent - total) / 2.0).floor(), size, gap)
    }

    /// Length covered by `count` items and the gaps between them.
    pub fn span(count: usize, size: f64, gap: f64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        count as f64 * size + (count - 1) as f64 * gap
    }

    /// Leading edge of item `index`.
    #[inline]
    pub fn position(&self, index: usize) -> f64 {
        self.start + index as f64 * (self.size + self.gap)
    }

    /// Trailing edge of item `index`.
    #[inline]
    pub fn end(&self, index: usize) -> f64 {
        self.position(index) + self.size
    }

    /// Center of item `index`.
    #[inline]
    pub fn center(&self, index: usize) -> f64 {
        self.position(index) + self.size / 2.0
    }

    /// Midpoint of the gap after item `index`.
    #[inline]
    pub fn gap_center(&self, index: usize) -> f64 {
        self.end(index) + self.gap / 2.0
    }

    pub fn positions(&self, count: usize) -> Vec<f64> {
        (0..count).map(|i| self.position(i)).collect()
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Interior intersection test; shared edges do not count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Equal cells filled row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub cell_w: f64,
    pub cell_h: f64,
    pub gap_x: f64,
    pub gap_y: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl GridLayout {
    /// Center a `cols` x `rows` grid on a `width` x `height` canvas.
    #[allow(clippy::too_many_arguments)]
    pub fn centered(
        cols: usize,
        rows: usize,
        cell_w: f64,
        cell_h: f64,
        gap_x: f64,
        gap_y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let x = RowLayout::centered(cols, cell_w, gap_x, width);
        let y = RowLayout::centered(rows, cell_h, gap_y, height);
        Self {
            cols,
            cell_w,
            cell_h,
            gap_x,
            gap_y,
            start_x: x.start,
            start_y: y.start,
        }
    }

    /// Move the whole grid down by `dy`.
    pub fn offset_y(mut self, dy: f64) -> Self {
        self.start_y += dy;
        self
    }

    pub fn columns(&self) -> RowLayout {
        RowLayout::new(self.start_x, self.cell_w, self.gap_x)
    }

    pub fn rows(&self) -> RowLayout {
        RowLayout::new(self.start_y, self.cell_h, self.gap_y)
    }

    /// Bounds of cell `index`. A zero-column grid puts everything in column 0.
    pub fn cell(&self, index: usize) -> Bounds {
        let cols = self.cols.max(1);
        let (row, col) = (index / cols, index % cols);
        Bounds::new(
            self.columns().position(col),
            self.rows().position(row),
            self.cell_w,
            self.cell_h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pipeline_row_is_centered() {
        let row = RowLayout::centered(4, 300.0, 100.0, 1920.0);
        assert_eq!(row.start, 210.0);
        assert_eq!(row.positions(4), vec![210.0, 610.0, 1010.0, 1410.0]);
        assert_eq!(row.gap_center(0), 560.0);
        assert_eq!(RowLayout::span(0, 300.0, 100.0), 0.0);
    }

    #[test]
    fn test_role_grid_cells() {
        let grid = GridLayout::centered(4, 2, 380.0, 320.0, 40.0, 50.0, 1920.0, 1000.0).offset_y(30.0);
        assert_eq!((grid.start_x, grid.start_y), (140.0, 185.0));
        assert_eq!(grid.cell(5), Bounds::new(560.0, 555.0, 380.0, 320.0));
    }

    #[test]
    fn test_touching_bounds_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Bounds::new(10.0, 0.0, 10.0, 10.0)));
        assert!(a.overlaps(&Bounds::new(9.0, 9.0, 10.0, 10.0)));
    }

    proptest! {
        #[test]
        fn prop_row_position_formula(
            start in -1000.0f64..1000.0,
            size in 1.0f64..500.0,
            gap in 1.0f64..200.0,
            i in 0usize..64,
        ) {
            let row = RowLayout::new(start, size, gap);
            let expected = start + i as f64 * (size + gap);
            prop_assert!((row.position(i) - expected).abs() < 1e-6);
            prop_assert!(row.position(i + 1) > row.position(i));
            prop_assert!(row.position(i + 1) >= row.end(i));
        }

        #[test]
        fn prop_grid_cells_never_overlap(
            cols in 1usize..8,
            cell_w in 1.0f64..400.0,
            cell_h in 1.0f64..400.0,
            gap_x in 1.0f64..80.0,
            gap_y in 1.0f64..80.0,
            count in 0usize..32,
        ) {
            let grid = GridLayout {
                cols,
                cell_w,
                cell_h,
                gap_x,
                gap_y,
                start_x: 0.0,
                start_y: 0.0,
            };
            for a in 0..count {
                for b in (a + 1)..count {
                    prop_assert!(!grid.cell(a).overlaps(&grid.cell(b)));
                }
            }
        }
    }
}
