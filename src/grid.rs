use egui::Color32;
use thiserror::Error;

/// Hexagon orientation: whether a flat edge or a vertex points upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexOrientation {
    Flat,
    Pointy,
}

/// Which alternating column (flat-top) or row (pointy-top) gets the
/// half-spacing shift that produces proper hex tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetParity {
    Odd,
    Even,
}

impl OffsetParity {
    /// True when the given column/row index is the shifted one.
    pub fn shifts(self, index: usize) -> bool {
        match self {
            OffsetParity::Odd => index % 2 == 1,
            OffsetParity::Even => index % 2 == 0,
        }
    }
}

/// The five supported grid layouts, decoded once at the boundary so the
/// rest of the code branches on typed axes instead of re-parsing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GridKind {
    Square,
    Hex {
        orientation: HexOrientation,
        parity: OffsetParity,
    },
}

impl GridKind {
    pub const ALL: [GridKind; 5] = [
        GridKind::Square,
        GridKind::Hex {
            orientation: HexOrientation::Flat,
            parity: OffsetParity::Odd,
        },
        GridKind::Hex {
            orientation: HexOrientation::Flat,
            parity: OffsetParity::Even,
        },
        GridKind::Hex {
            orientation: HexOrientation::Pointy,
            parity: OffsetParity::Odd,
        },
        GridKind::Hex {
            orientation: HexOrientation::Pointy,
            parity: OffsetParity::Even,
        },
    ];

    /// Stable tag used for config storage keys, export filenames, and map data.
    pub fn tag(self) -> &'static str {
        match self {
            GridKind::Square => "square",
            GridKind::Hex {
                orientation: HexOrientation::Flat,
                parity: OffsetParity::Odd,
            } => "hex-flat-odd",
            GridKind::Hex {
                orientation: HexOrientation::Flat,
                parity: OffsetParity::Even,
            } => "hex-flat-even",
            GridKind::Hex {
                orientation: HexOrientation::Pointy,
                parity: OffsetParity::Odd,
            } => "hex-pointy-odd",
            GridKind::Hex {
                orientation: HexOrientation::Pointy,
                parity: OffsetParity::Even,
            } => "hex-pointy-even",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GridKind::Square => "Square",
            GridKind::Hex {
                orientation: HexOrientation::Flat,
                parity: OffsetParity::Odd,
            } => "Hex (flat, odd)",
            GridKind::Hex {
                orientation: HexOrientation::Flat,
                parity: OffsetParity::Even,
            } => "Hex (flat, even)",
            GridKind::Hex {
                orientation: HexOrientation::Pointy,
                parity: OffsetParity::Odd,
            } => "Hex (pointy, odd)",
            GridKind::Hex {
                orientation: HexOrientation::Pointy,
                parity: OffsetParity::Even,
            } => "Hex (pointy, even)",
        }
    }
}

impl std::fmt::Display for GridKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error)]
#[error("unknown grid kind tag: {0}")]
pub struct ParseGridKindError(String);

impl std::str::FromStr for GridKind {
    type Err = ParseGridKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ParseGridKindError(s.to_owned()))
    }
}

impl TryFrom<String> for GridKind {
    type Error = ParseGridKindError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GridKind> for String {
    fn from(kind: GridKind) -> Self {
        kind.tag().to_owned()
    }
}

/// A discrete tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub col: usize,
    pub row: usize,
}

/// The authoritative rows x columns matrix of painted tiles. A cell is
/// either empty or carries exactly one biome color.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMatrix {
    cols: usize,
    rows: usize,
    cells: Vec<Option<Color32>>,
}

impl TileMatrix {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Color32> {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Sets a cell, returning false (and doing nothing) when the coordinate
    /// is out of bounds.
    pub fn set(&mut self, col: usize, row: usize, color: Option<Color32>) -> bool {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = color;
            true
        } else {
            false
        }
    }

    /// Empties every cell without changing dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Resizes to the new extent. Paint inside the overlapping region is
    /// preserved; cells outside the previous bounds start empty.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        let mut next = vec![None; cols * rows];
        for row in 0..rows.min(self.rows) {
            for col in 0..cols.min(self.cols) {
                next[row * cols + col] = self.cells[row * self.cols + col];
            }
        }
        self.cols = cols;
        self.rows = rows;
        self.cells = next;
    }

    /// Iterates over the painted (non-empty) cells only.
    pub fn painted(&self) -> impl Iterator<Item = (TileCoord, Color32)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|color| {
                (
                    TileCoord {
                        col: i % self.cols,
                        row: i / self.cols,
                    },
                    color,
                )
            })
        })
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
