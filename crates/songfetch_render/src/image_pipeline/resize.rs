#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetGeometry {
    pub columns: u32,
    pub rows: u32,
}

/// Fixed-width layout: the column count is given and the row count follows
/// from the image ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPolicy {
    pub columns: u32,
    /// How many times taller a terminal cell is than it is wide.
    pub cell_aspect: f32,
}

impl LayoutPolicy {
    pub fn new(columns: u32, cell_aspect: f32) -> Self {
        Self { columns, cell_aspect }
    }

    pub fn derive(&self, source_width: u32, source_height: u32) -> Option<TargetGeometry> {
        if source_width == 0 || source_height == 0 || self.columns == 0 {
            return None;
        }
        if !(self.cell_aspect.is_finite() && self.cell_aspect > 0.0) {
            return None;
        }

        let image_ratio = f64::from(source_height) / f64::from(source_width);
        let rows =
            (image_ratio * f64::from(self.columns) / f64::from(self.cell_aspect)).round();
        let rows = (rows as u32).max(1);

        Some(TargetGeometry { columns: self.columns, rows })
    }
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self::new(crate::ART_COLUMNS, crate::CELL_ASPECT)
    }
}
