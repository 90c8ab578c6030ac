//! Matrix data types

/// A dense row-major matrix of floating point samples
#[derive(Debug, Clone)]
pub struct MatrixData {
    /// Number of rows in the matrix
    pub rows: usize,
    /// Number of columns shared by every row
    pub cols: usize,
    /// Row-major sample storage, `rows * cols` values
    pub data: Vec<f32>,
}
