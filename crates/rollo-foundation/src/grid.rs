//! Icon grid and scroll extent.
//!
//! The carousel never lays icons out itself; it only needs to know how many
//! scroll stops the current icon count produces in the current orientation.

use rollo_core::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when strictly wider than tall.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Icons visible at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: usize,
    pub rows: usize,
}

impl GridSize {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    pub fn icons_per_page(&self) -> usize {
        self.columns * self.rows
    }
}

/// What one integer step of the page position scrolls by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollUnit {
    /// A full screen of icons.
    #[default]
    Page,
    /// A single row; the last stop shows the final full screen.
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    portrait: GridSize,
    landscape: GridSize,
    unit: ScrollUnit,
}

impl GridLayout {
    pub fn new(
        portrait: GridSize,
        landscape: GridSize,
        unit: ScrollUnit,
    ) -> Result<Self, ConfigError> {
        for grid in [portrait, landscape] {
            if grid.columns == 0 || grid.rows == 0 {
                return Err(ConfigError::EmptyGrid {
                    columns: grid.columns,
                    rows: grid.rows,
                });
            }
        }
        Ok(Self {
            portrait,
            landscape,
            unit,
        })
    }

    pub fn grid(&self, orientation: Orientation) -> GridSize {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }

    pub fn unit(&self) -> ScrollUnit {
        self.unit
    }

    /// Number of scroll stops for `icon_count` icons. Always at least one.
    pub fn page_count(&self, orientation: Orientation, icon_count: usize) -> usize {
        let grid = self.grid(orientation);
        let stops = match self.unit {
            ScrollUnit::Page => icon_count.div_ceil(grid.icons_per_page()),
            ScrollUnit::Row => {
                let rows = icon_count.div_ceil(grid.columns);
                rows.saturating_sub(grid.rows) + 1
            }
        };
        stops.max(1)
    }
}

impl Default for GridLayout {
    /// 4x4 in portrait, 6x3 in landscape, scrolling by page.
    fn default() -> Self {
        Self {
            portrait: GridSize::new(4, 4),
            landscape: GridSize::new(6, 3),
            unit: ScrollUnit::Page,
        }
    }
}
