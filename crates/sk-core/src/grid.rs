use core::iter::FusedIterator;

use crate::Error;

/// Locator of one cell inside a [`BitGrid`] buffer.
///
/// Two references compare equal iff they address the same physical pixel, so
/// chains built in independent parts of a grid can be stitched by identity.
/// A reference is only meaningful for the grid that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelRef(usize);

impl PixelRef {
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Axis-aligned rectangle `(r0, c0, rows, cols)` inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub r0: usize,
    pub c0: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Region {
    pub fn new(r0: usize, c0: usize, rows: usize, cols: usize) -> Self {
        Self { r0, c0, rows, cols }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Bottom row index. The region must not be empty.
    pub fn last_row(&self) -> usize {
        self.r0 + self.rows - 1
    }

    /// Rightmost column index. The region must not be empty.
    pub fn last_col(&self) -> usize {
        self.c0 + self.cols - 1
    }

    /// Geometric middle, rounded towards the bottom-right for even extents.
    pub fn center(&self) -> (usize, usize) {
        (self.r0 + self.rows / 2, self.c0 + self.cols / 2)
    }

    /// The region without its 1-pixel frame, if anything is left.
    pub fn interior(&self) -> Option<Region> {
        if self.rows < 3 || self.cols < 3 {
            return None;
        }
        Some(Region::new(
            self.r0 + 1,
            self.c0 + 1,
            self.rows - 2,
            self.cols - 2,
        ))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.r0 && row < self.r0 + self.rows && col >= self.c0 && col < self.c0 + self.cols
    }

    pub fn fits_within(&self, rows: usize, cols: usize) -> bool {
        self.r0
            .checked_add(self.rows)
            .is_some_and(|end| end <= rows)
            && self
                .c0
                .checked_add(self.cols)
                .is_some_and(|end| end <= cols)
    }
}

/// Row-major binary grid where every cell is `0` ("off") or `1` ("on").
///
/// The buffer length always equals `rows * cols`; `offset = row * cols + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl BitGrid {
    /// All-off grid of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows.checked_mul(cols).expect("grid size overflow");
        Self {
            rows,
            cols,
            data: vec![0; len],
        }
    }

    /// Classifies `pixels` element-wise with `is_on`.
    pub fn from_pixels<T, F>(
        pixels: &[T],
        rows: usize,
        cols: usize,
        mut is_on: F,
    ) -> Result<Self, Error>
    where
        F: FnMut(&T) -> bool,
    {
        let expected = expected_len(rows, cols, pixels.len())?;
        if pixels.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let data = pixels.iter().map(|px| u8::from(is_on(px))).collect();
        Ok(Self { rows, cols, data })
    }

    /// Takes ownership of a byte mask; any nonzero byte is "on".
    pub fn from_u8(rows: usize, cols: usize, mut data: Vec<u8>) -> Result<Self, Error> {
        let expected = expected_len(rows, cols, data.len())?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        for v in &mut data {
            *v = u8::from(*v != 0);
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Region covering the whole grid.
    pub fn full(&self) -> Region {
        Region::new(0, 0, self.rows, self.cols)
    }

    pub fn coords(&self, px: PixelRef) -> (usize, usize) {
        (px.0 / self.cols, px.0 % self.cols)
    }

    /// Reference to the pixel at `(row, col)`.
    ///
    /// Callers must stay in bounds; this is only checked in debug builds. Use
    /// [`BitGrid::try_find`] for untrusted coordinates.
    #[inline]
    pub fn find(&self, row: usize, col: usize) -> PixelRef {
        debug_assert!(row < self.rows && col < self.cols, "pixel out of bounds");
        PixelRef(row * self.cols + col)
    }

    pub fn try_find(&self, row: usize, col: usize) -> Result<PixelRef, Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(PixelRef(row * self.cols + col))
    }

    #[inline]
    pub fn is_on(&self, px: PixelRef) -> bool {
        self.data[px.0] != 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col] != 0)
    }

    #[inline]
    pub fn set(&mut self, px: PixelRef, on: bool) {
        self.data[px.0] = u8::from(on);
    }

    /// Enumerates `|rows| x |cols|` pixels starting at `(r0, c0)`, row-major.
    ///
    /// A negative extent walks that axis backwards from the origin, so
    /// `section(r, c, 1, -n)` yields `(r, c), (r, c - 1), ..., (r, c - n + 1)`.
    pub fn section(&self, r0: usize, c0: usize, rows: isize, cols: isize) -> Section {
        let n_rows = rows.unsigned_abs();
        let n_cols = cols.unsigned_abs();
        let len = n_rows * n_cols;

        if len > 0 {
            debug_assert!(
                axis_in_bounds(r0, rows, self.rows) && axis_in_bounds(c0, cols, self.cols),
                "section out of bounds"
            );
        }

        Section {
            stride: self.cols,
            r0,
            c0,
            row_back: rows < 0,
            col_back: cols < 0,
            n_cols: n_cols.max(1),
            front: 0,
            back: len,
        }
    }

    /// Forward row-major pixels of `region`.
    pub fn pixels(&self, region: Region) -> Section {
        self.section(region.r0, region.c0, region.rows as isize, region.cols as isize)
    }

    pub fn count_on(&self, region: Region) -> usize {
        self.pixels(region).filter(|&px| self.is_on(px)).count()
    }

    pub fn any_on(&self, region: Region) -> bool {
        self.pixels(region).any(|px| self.is_on(px))
    }
}

fn expected_len(rows: usize, cols: usize, actual: usize) -> Result<usize, Error> {
    rows.checked_mul(cols).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual,
    })
}

fn axis_in_bounds(origin: usize, extent: isize, len: usize) -> bool {
    let n = extent.unsigned_abs();
    if extent >= 0 {
        origin.checked_add(n).is_some_and(|end| end <= len)
    } else {
        origin < len && origin + 1 >= n
    }
}

/// Iterator over the pixel references of a rectangular grid section.
#[derive(Debug, Clone)]
pub struct Section {
    stride: usize,
    r0: usize,
    c0: usize,
    row_back: bool,
    col_back: bool,
    n_cols: usize,
    front: usize,
    back: usize,
}

impl Section {
    #[inline]
    fn at(&self, i: usize) -> PixelRef {
        let dr = i / self.n_cols;
        let dc = i % self.n_cols;
        let r = if self.row_back { self.r0 - dr } else { self.r0 + dr };
        let c = if self.col_back { self.c0 - dc } else { self.c0 + dc };
        PixelRef(r * self.stride + c)
    }
}

impl Iterator for Section {
    type Item = PixelRef;

    fn next(&mut self) -> Option<PixelRef> {
        if self.front >= self.back {
            return None;
        }
        let px = self.at(self.front);
        self.front += 1;
        Some(px)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Section {
    fn next_back(&mut self) -> Option<PixelRef> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for Section {}

impl FusedIterator for Section {}
