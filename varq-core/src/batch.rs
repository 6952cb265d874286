//! Input and output tensors for forward evaluation

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// An immutable batch of classical input rows, shape `(batch_size, feature_dim)`
///
/// The same batch is passed unchanged to every forward evaluation within one
/// gradient estimation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputBatch {
    rows: Vec<Vec<f64>>,
    feature_dim: usize,
}

impl InputBatch {
    /// Build a batch from row-major data
    ///
    /// # Errors
    /// Returns an error if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let feature_dim = rows.first().map(|r| r.len()).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != feature_dim {
                return Err(CoreError::shape_mismatch(
                    format!("{} features per row", feature_dim),
                    format!("{} features in row {}", row.len(), i),
                ));
            }
        }
        Ok(Self { rows, feature_dim })
    }

    /// Number of rows in the batch
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.rows.len()
    }

    /// Number of features per row
    #[inline]
    pub fn feature_dim(&self) -> usize {
        self.feature_dim
    }

    /// Get one input row
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Iterate over input rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// One forward-evaluation output, shape `(batch_size, output_dim)`
///
/// Gradient estimates are themselves `OutputBatch` values: one per trainable
/// parameter, combined from the plus- and minus-shifted evaluations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputBatch {
    rows: Vec<Vec<f64>>,
    output_dim: usize,
}

impl OutputBatch {
    /// Build an output batch from row-major data
    ///
    /// # Errors
    /// Returns an error if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let output_dim = rows.first().map(|r| r.len()).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != output_dim {
                return Err(CoreError::shape_mismatch(
                    format!("{} outputs per row", output_dim),
                    format!("{} outputs in row {}", row.len(), i),
                ));
            }
        }
        Ok(Self { rows, output_dim })
    }

    /// Number of rows
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.rows.len()
    }

    /// Number of outputs per row
    #[inline]
    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// Get one output row
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Iterate over output rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Elementwise difference `self - other`
    ///
    /// # Errors
    /// Returns an error on shape mismatch.
    pub fn sub(&self, other: &OutputBatch) -> Result<OutputBatch> {
        if self.batch_size() != other.batch_size() || self.output_dim != other.output_dim {
            return Err(CoreError::shape_mismatch(
                format!("({}, {})", self.batch_size(), self.output_dim),
                format!("({}, {})", other.batch_size(), other.output_dim),
            ));
        }
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
            .collect();
        Ok(OutputBatch {
            rows,
            output_dim: self.output_dim,
        })
    }

    /// Elementwise scaling by a constant factor
    pub fn scale(&self, factor: f64) -> OutputBatch {
        OutputBatch {
            rows: self
                .rows
                .iter()
                .map(|r| r.iter().map(|x| x * factor).collect())
                .collect(),
            output_dim: self.output_dim,
        }
    }
}
