//! Summary Table
//!
//! Collects benchmark rows in run order, serializes them as CSV with the header
//! `Approach,Portion,Time,Throughput,Latency` and derives the inputs of the
//! comparison charts: mean time per approach and per-approach metric series.

use super::types::{Approach, BenchmarkResult, Metric};
use crate::error::StorageError;

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    rows: Vec<BenchmarkResult>,
}

impl SummaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: BenchmarkResult) {
        self.rows.push(result);
    }

    pub fn rows(&self) -> &[BenchmarkResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_csv(&self) -> Result<Vec<u8>, StorageError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.rows.is_empty() {
            writer.write_record(["Approach", "Portion", "Time", "Throughput", "Latency"])?;
        }
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| StorageError::Csv(e.into_error().into()))
    }

    pub fn from_csv(bytes: &[u8]) -> Result<Self, StorageError> {
        let mut reader = csv::Reader::from_reader(bytes);
        let mut rows = Vec::new();
        for record in reader.deserialize::<BenchmarkResult>() {
            rows.push(record?);
        }
        Ok(Self { rows })
    }

    /// Mean `Time` per approach, over every row of that approach.
    pub fn average_time_by_approach(&self) -> BTreeMap<Approach, f64> {
        let mut sums: BTreeMap<Approach, (f64, usize)> = BTreeMap::new();
        for row in &self.rows {
            let entry = sums.entry(row.approach).or_insert((0.0, 0));
            entry.0 += row.time;
            entry.1 += 1;
        }

        sums.into_iter()
            .map(|(approach, (sum, count))| (approach, sum / count as f64))
            .collect()
    }

    /// `(portion %, value)` points of one approach, in table order.
    /// Rows whose portion label does not parse are left out.
    pub fn series(&self, approach: Approach, metric: Metric) -> Vec<(u32, f64)> {
        self.rows
            .iter()
            .filter(|row| row.approach == approach)
            .filter_map(|row| row.portion_percent().map(|p| (p, metric.of(row))))
            .collect()
    }
}
