use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::matrix::types::MatrixData;

pub trait MatrixReader {
    fn read_matrix(&self, data: &[u8]) -> Result<MatrixData>;
}
