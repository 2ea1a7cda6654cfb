/// Model input: one row, one column per history character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    values: Vec<f32>,
}

impl FeatureMatrix {
    /// Number of rows. Always 1; batching is not supported.
    pub const ROWS: usize = 1;

    pub fn from_row(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn columns(&self) -> usize {
        self.values.len()
    }

    /// `[rows, columns]`.
    pub fn shape(&self) -> [usize; 2] {
        [Self::ROWS, self.values.len()]
    }

    /// Row-major values of the single row.
    pub fn row(&self) -> &[f32] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
