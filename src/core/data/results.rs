use std::collections::BTreeMap;

use rayon::prelude::*;
use thiserror::Error;

use crate::core::data::frac_result::FracResult;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ResultsError {
    #[error("result at (row: {row}, col: {col}) is outside a {rows}x{cols} store")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("result store has already been sealed")]
    Sealed,
}

/// Row-major store of one [`FracResult`] per sample.
///
/// Pre-sized on construction. Writers either go through [`Results::set_result`]
/// or receive disjoint rows from [`Results::par_rows_mut`]. After [`Results::done`]
/// the store is sealed and the iteration histogram is available.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    rows: usize,
    cols: usize,
    iteration_capacity: u32,
    records: Vec<FracResult>,
    histogram: Option<BTreeMap<u32, u64>>,
}

impl Results {
    /// `iteration_capacity` is the number of distinct iteration counts a
    /// record may hold, i.e. the run's `max_iterations`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, iteration_capacity: u32) -> Self {
        Self {
            rows,
            cols,
            iteration_capacity,
            records: vec![FracResult::default(); rows * cols],
            histogram: None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn iteration_capacity(&self) -> u32 {
        self.iteration_capacity
    }

    #[must_use]
    pub fn records(&self) -> &[FracResult] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&FracResult> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.records.get(row * self.cols + col)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.histogram.is_some()
    }

    /// Count of records per iteration value, omitting values no record holds.
    /// `None` until [`Results::done`].
    #[must_use]
    pub fn histogram(&self) -> Option<&BTreeMap<u32, u64>> {
        self.histogram.as_ref()
    }

    pub fn set_result(&mut self, row: usize, col: usize, result: FracResult) -> Result<(), ResultsError> {
        if self.is_done() {
            return Err(ResultsError::Sealed);
        }
        if row >= self.rows || col >= self.cols {
            return Err(ResultsError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        self.records[row * self.cols + col] = result;
        Ok(())
    }

    /// Disjoint mutable rows, paired with their row index.
    pub(crate) fn par_rows_mut(
        &mut self,
    ) -> Result<impl IndexedParallelIterator<Item = (usize, &mut [FracResult])>, ResultsError> {
        if self.is_done() {
            return Err(ResultsError::Sealed);
        }

        Ok(self.records.par_chunks_mut(self.cols.max(1)).enumerate())
    }

    /// Seals the store and tallies iteration counts. Counts at or above the
    /// capacity land in the `capacity - 1` bucket.
    pub fn done(&mut self) {
        if self.is_done() {
            return;
        }

        let last_bucket = self.iteration_capacity.saturating_sub(1);
        let mut histogram = BTreeMap::new();
        for record in &self.records {
            *histogram.entry(record.iterations.min(last_bucket)).or_insert(0u64) += 1;
        }

        tracing::trace!(records = self.records.len(), buckets = histogram.len(), "result store sealed");
        self.histogram = Some(histogram);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn record(iterations: u32) -> FracResult {
        FracResult::new(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), iterations)
    }

    #[test]
    fn test_new_is_presized() {
        let results = Results::new(3, 4, 10);

        assert_eq!(results.rows(), 3);
        assert_eq!(results.cols(), 4);
        assert_eq!(results.iteration_capacity(), 10);
        assert_eq!(results.records().len(), 12);
        assert!(!results.is_done());
        assert!(results.histogram().is_none());
    }

    #[test]
    fn test_set_result_is_row_major() {
        let mut results = Results::new(2, 3, 10);
        results.set_result(1, 2, record(7)).unwrap();

        assert_eq!(results.records()[5], record(7));
        assert_eq!(results.get(1, 2), Some(&record(7)));
    }

    #[test]
    fn test_set_result_out_of_bounds() {
        let mut results = Results::new(2, 3, 10);

        assert_eq!(
            results.set_result(2, 0, record(1)),
            Err(ResultsError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(results.set_result(0, 3, record(1)).is_err());
        assert_eq!(results.get(0, 3), None);
    }

    #[test]
    fn test_done_builds_histogram_and_seals() {
        let mut results = Results::new(2, 2, 4);
        results.set_result(0, 0, record(0)).unwrap();
        results.set_result(0, 1, record(3)).unwrap();
        results.set_result(1, 0, record(3)).unwrap();
        results.set_result(1, 1, record(1)).unwrap();

        results.done();

        assert!(results.is_done());
        assert_eq!(results.histogram(), Some(&BTreeMap::from([(0, 1), (1, 1), (3, 2)])));
        assert_eq!(results.set_result(0, 0, record(2)), Err(ResultsError::Sealed));
        assert!(results.par_rows_mut().is_err());
    }

    #[test]
    fn test_histogram_clamps_counts_above_capacity() {
        let mut results = Results::new(1, 2, 2);
        results.set_result(0, 0, record(5)).unwrap();

        results.done();

        assert_eq!(results.histogram(), Some(&BTreeMap::from([(0, 1), (1, 1)])));
    }

    #[test]
    fn test_histogram_size_follows_records_not_capacity() {
        let mut results = Results::new(1, 2, u32::MAX);
        results.set_result(0, 1, record(u32::MAX - 1)).unwrap();

        results.done();

        assert_eq!(results.histogram(), Some(&BTreeMap::from([(0, 1), (u32::MAX - 1, 1)])));
    }

    #[test]
    fn test_par_rows_mut_yields_each_row_once() {
        let mut results = Results::new(4, 3, 8);

        results
            .par_rows_mut()
            .unwrap()
            .for_each(|(row, cells)| {
                for (col, cell) in cells.iter_mut().enumerate() {
                    *cell = record((row * 3 + col) as u32);
                }
            });

        for (index, record) in results.records().iter().enumerate() {
            assert_eq!(record.iterations, index as u32);
        }
    }
}
