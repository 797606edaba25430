//! Data
//!
//! The label collaborator handed to an evaluation callback, and a light
//! column major view over prediction arrays coming out of a booster.
use serde::{Deserialize, Serialize};

/// Anything that can hand ground truth labels to an evaluation callback.
///
/// Labels are aligned index for index with the predictions passed
/// alongside the dataset.
pub trait LabeledDataset {
    /// Ground truth labels of the dataset.
    fn get_label(&self) -> &[f64];
}

/// Minimal owned label holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    label: Vec<f64>,
}

impl Dataset {
    /// Create a dataset from labels.
    pub fn new(label: Vec<f64>) -> Self {
        Dataset { label }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.label.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(label: Vec<f64>) -> Self {
        Dataset::new(label)
    }
}

impl LabeledDataset for Dataset {
    fn get_label(&self) -> &[f64] {
        &self.label
    }
}

impl LabeledDataset for [f64] {
    fn get_label(&self) -> &[f64] {
        self
    }
}

impl LabeledDataset for Vec<f64> {
    fn get_label(&self) -> &[f64] {
        self
    }
}

/// Contiguous Column Major Matrix data container.
///
/// Boosters hand predictions over as one column per output,
/// a binary model has a single column.
pub struct Matrix<'a, T> {
    /// The raw data stored in a single slice.
    pub data: &'a [T],
    /// Number of rows in the matrix.
    pub rows: usize,
    /// Number of columns in the matrix.
    pub cols: usize,
    stride1: usize,
    stride2: usize,
}

impl<'a, T> Matrix<'a, T> {
    // Defaults to column major
    /// Create a new Matrix.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Data length must equal rows * cols");
        Matrix {
            data,
            rows,
            cols,
            stride1: rows,
            stride2: 1,
        }
    }

    /// Number of dimensions of the matrix, a single column counts as one.
    pub fn ndim(&self) -> usize {
        if self.cols == 1 {
            1
        } else {
            2
        }
    }

    fn item_index(&self, i: usize, j: usize) -> usize {
        let mut idx = self.stride2 * i;
        idx += j * self.stride1;
        idx
    }

    /// Get a slice of a column in the matrix.
    ///
    /// * `col` - The index of the column to select.
    /// * `start_row` - The index of the start of the slice.
    /// * `end_row` - The index of the end of the slice of the column to select.
    pub fn get_col_slice(&self, col: usize, start_row: usize, end_row: usize) -> &[T] {
        let i = self.item_index(start_row, col);
        let j = self.item_index(end_row, col);
        &self.data[i..j]
    }

    /// Get an entire column in the matrix.
    ///
    /// * `col` - The index of the column to get.
    pub fn get_col(&self, col: usize) -> &[T] {
        self.get_col_slice(col, 0, self.rows)
    }
}
