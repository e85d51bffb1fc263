//! Grid layout descriptions
//!
//! A layout only decides where thumbnails go. Both variants feed the same
//! [`crate::Viewer`], which always navigates the full image set, including
//! images a layout leaves out of the grid.
//!
//! Class names are spelled out in full tables (never `format!`-ed) so the
//! Tailwind scanner picks them up from this file.

use crate::{GalleryError, ImageSet};

const COL_SPAN: [&str; 6] = [
    "col-span-1",
    "col-span-2",
    "col-span-3",
    "col-span-4",
    "col-span-5",
    "col-span-6",
];
const MD_COL_SPAN: [&str; 6] = [
    "md:col-span-1",
    "md:col-span-2",
    "md:col-span-3",
    "md:col-span-4",
    "md:col-span-5",
    "md:col-span-6",
];
const LG_COL_SPAN: [&str; 6] = [
    "lg:col-span-1",
    "lg:col-span-2",
    "lg:col-span-3",
    "lg:col-span-4",
    "lg:col-span-5",
    "lg:col-span-6",
];
const ROW_SPAN: [&str; 3] = ["row-span-1", "row-span-2", "row-span-3"];
const MD_ROW_SPAN: [&str; 3] = ["md:row-span-1", "md:row-span-2", "md:row-span-3"];
const LG_ROW_SPAN: [&str; 3] = ["lg:row-span-1", "lg:row-span-2", "lg:row-span-3"];

fn pick(table: &[&'static str], n: u8) -> &'static str {
    let i = usize::from(n.max(1)) - 1;
    table[i.min(table.len() - 1)]
}

/// Columns and rows a cell occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub cols: u8,
    pub rows: u8,
}

impl CellSpan {
    pub const fn new(cols: u8, rows: u8) -> Self {
        Self { cols, rows }
    }
}

/// Spans below the `lg` breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveSpan {
    pub base: CellSpan,
    pub md: CellSpan,
}

/// One thumbnail slot in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub image_index: usize,
    /// Span at full width (`lg` and up for responsive layouts)
    pub span: CellSpan,
    /// Smaller-screen spans; `None` for fixed layouts
    pub responsive: Option<ResponsiveSpan>,
}

impl GridCell {
    pub const fn fixed(image_index: usize, cols: u8, rows: u8) -> Self {
        Self {
            image_index,
            span: CellSpan::new(cols, rows),
            responsive: None,
        }
    }

    pub const fn responsive(image_index: usize, span: CellSpan, md: CellSpan) -> Self {
        Self {
            image_index,
            span,
            responsive: Some(ResponsiveSpan {
                base: CellSpan::new(1, 1),
                md,
            }),
        }
    }
}

/// Grid description consumed by the gallery view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub name: &'static str,
    /// Columns at full width
    pub columns: u8,
    pub responsive: bool,
    pub cells: Vec<GridCell>,
}

/// Full-width mosaic shared by both variants: (image, cols, rows)
const MOSAIC: [(usize, u8, u8); 8] = [
    (0, 3, 2), // featured
    (1, 2, 2),
    (2, 2, 2),
    (3, 2, 1),
    (4, 2, 2), // tall
    (5, 2, 1),
    (6, 3, 1), // wide
    (7, 2, 1),
];

const WIDE_CELL: usize = 6;

impl GridLayout {
    /// Fixed six-column mosaic for desktop widths
    pub fn desktop() -> Self {
        Self {
            name: "desktop",
            columns: 6,
            responsive: false,
            cells: MOSAIC
                .iter()
                .map(|&(index, cols, rows)| GridCell::fixed(index, cols, rows))
                .collect(),
        }
    }

    /// One column on phones, two on tablets, the mosaic from `lg` up.
    /// The wide cell is left out of the grid.
    pub fn responsive() -> Self {
        Self {
            name: "responsive",
            columns: 6,
            responsive: true,
            cells: MOSAIC
                .iter()
                .filter(|(index, _, _)| *index != WIDE_CELL)
                .map(|&(index, cols, rows)| {
                    let md = if index == 0 {
                        CellSpan::new(2, 2)
                    } else {
                        CellSpan::new(1, 1)
                    };
                    GridCell::responsive(index, CellSpan::new(cols, rows), md)
                })
                .collect(),
        }
    }

    /// Check that every cell points at an existing image.
    pub fn validate(&self, images: &ImageSet) -> Result<(), GalleryError> {
        match self.cells.iter().find(|c| c.image_index >= images.len()) {
            Some(cell) => Err(GalleryError::CellOutOfRange {
                layout: self.name,
                index: cell.image_index,
                len: images.len(),
            }),
            None => Ok(()),
        }
    }

    /// Images with no grid cell. They are still reachable in the viewer.
    pub fn ungridded_indices(&self, images: &ImageSet) -> Vec<usize> {
        (0..images.len())
            .filter(|i| !self.cells.iter().any(|c| c.image_index == *i))
            .collect()
    }

    pub fn container_class(&self) -> String {
        let cols = if self.responsive {
            format!(
                "grid-cols-1 md:grid-cols-2 {}",
                pick(&LG_GRID_COLS, self.columns)
            )
        } else {
            pick(&GRID_COLS, self.columns).to_string()
        };
        format!("max-w-[1400px] mx-auto grid {cols} auto-rows-[200px] gap-4")
    }

    pub fn cell_class(&self, cell: &GridCell) -> String {
        match (self.responsive, cell.responsive) {
            (true, Some(small)) => [
                pick(&COL_SPAN, small.base.cols),
                pick(&ROW_SPAN, small.base.rows),
                pick(&MD_COL_SPAN, small.md.cols),
                pick(&MD_ROW_SPAN, small.md.rows),
                pick(&LG_COL_SPAN, cell.span.cols),
                pick(&LG_ROW_SPAN, cell.span.rows),
            ]
            .join(" "),
            _ => format!(
                "{} {}",
                pick(&COL_SPAN, cell.span.cols),
                pick(&ROW_SPAN, cell.span.rows)
            ),
        }
    }
}

const GRID_COLS: [&str; 6] = [
    "grid-cols-1",
    "grid-cols-2",
    "grid-cols-3",
    "grid-cols-4",
    "grid-cols-5",
    "grid-cols-6",
];
const LG_GRID_COLS: [&str; 6] = [
    "lg:grid-cols-1",
    "lg:grid-cols-2",
    "lg:grid-cols-3",
    "lg:grid-cols-4",
    "lg:grid-cols-5",
    "lg:grid-cols-6",
];

/// Which grid the page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutVariant {
    Desktop,
    #[default]
    Responsive,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 2] = [LayoutVariant::Responsive, LayoutVariant::Desktop];

    pub fn layout(self) -> GridLayout {
        match self {
            LayoutVariant::Desktop => GridLayout::desktop(),
            LayoutVariant::Responsive => GridLayout::responsive(),
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            LayoutVariant::Desktop => "desktop",
            LayoutVariant::Responsive => "responsive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutVariant::Desktop => "Desktop",
            LayoutVariant::Responsive => "Responsive",
        }
    }
}
