// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Synthetic student records for the placement demo.
//!
//! Every record carries four numeric features and an outcome derived from a
//! fixed readiness rule, so the generated table is fully determined by the
//! seed and the number of rows.

use std::fmt;
use std::io::Write;

use log::{debug, info};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::DatasetError;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROWS: usize = 30;

/// Feature columns in the order they appear in the feature matrix.
pub const FEATURE_NAMES: [&str; 4] = ["CGPA", "DSA_Problems", "Projects", "Mock_Score"];
pub const LABEL_NAME: &str = "Outcome";

/// Readiness score above which a student is expected to clear the interview.
pub const READINESS_THRESHOLD: f64 = 130.0;

/// Weighted sum of a student's profile: `10·CGPA + DSA/10 + 5·Projects + Mock/2`.
pub fn readiness_score(cgpa: f64, dsa_problems: u32, projects: u32, mock_score: u32) -> f64 {
    cgpa * 10.0 + f64::from(dsa_problems) / 10.0 + f64::from(projects) * 5.0
        + f64::from(mock_score) / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    NotClear,
    Clear,
}

impl Outcome {
    pub fn from_profile(cgpa: f64, dsa_problems: u32, projects: u32, mock_score: u32) -> Self {
        if readiness_score(cgpa, dsa_problems, projects, mock_score) > READINESS_THRESHOLD {
            Outcome::Clear
        } else {
            Outcome::NotClear
        }
    }

    pub fn from_label(label: f64) -> Option<Self> {
        if label == 0.0 {
            Some(Outcome::NotClear)
        } else if label == 1.0 {
            Some(Outcome::Clear)
        } else {
            None
        }
    }

    pub fn label(self) -> u8 {
        match self {
            Outcome::NotClear => 0,
            Outcome::Clear => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Clear => write!(f, "✨ CLEAR"),
            Outcome::NotClear => write!(f, "❌ NOT CLEAR"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentRecord {
    pub cgpa: f64,
    pub dsa_problems: u32,
    pub projects: u32,
    pub mock_score: u32,
    pub outcome: Outcome,
}

impl StudentRecord {
    pub fn new(cgpa: f64, dsa_problems: u32, projects: u32, mock_score: u32) -> Self {
        StudentRecord {
            cgpa,
            dsa_problems,
            projects,
            mock_score,
            outcome: Outcome::from_profile(cgpa, dsa_problems, projects, mock_score),
        }
    }

    pub fn features(&self) -> [f64; 4] {
        [
            self.cgpa,
            f64::from(self.dsa_problems),
            f64::from(self.projects),
            f64::from(self.mock_score),
        ]
    }
}

/// Configuration for the synthetic dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticDatasetConfig {
    seed: u64,
    rows: usize,
}

impl SyntheticDatasetConfig {
    pub fn new() -> Self {
        SyntheticDatasetConfig { seed: DEFAULT_SEED, rows: DEFAULT_ROWS }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl Default for SyntheticDatasetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts of each outcome in a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetSummary {
    pub cleared: usize,
    pub not_cleared: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset Summary: {} Cleared | {} Not Cleared", self.cleared, self.not_cleared)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<StudentRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<StudentRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Feature matrix of shape `(n_rows, 4)` in [`FEATURE_NAMES`] order.
    pub fn features(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.records.len(), FEATURE_NAMES.len()), |(i, j)| {
            self.records[i].features()[j]
        })
    }

    /// Outcome labels as `0.0` / `1.0`.
    pub fn labels(&self) -> Array1<f64> {
        self.records.iter().map(|r| f64::from(r.outcome.label())).collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        let cleared = self.records.iter().filter(|r| r.outcome == Outcome::Clear).count();
        DatasetSummary { cleared, not_cleared: self.records.len() - cleared }
    }

    /// Writes the table with a header row as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), DatasetError> {
        let mut wtr = csv::Writer::from_writer(writer);
        let mut header = FEATURE_NAMES.to_vec();
        header.push(LABEL_NAME);
        wtr.write_record(&header)?;

        for record in &self.records {
            wtr.write_record(&[
                format!("{:.2}", record.cgpa),
                record.dsa_problems.to_string(),
                record.projects.to_string(),
                record.mock_score.to_string(),
                record.outcome.label().to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates the synthetic dataset described by `config`.
///
/// Columns are drawn one after another from a single seeded generator:
/// CGPA uniform in `[6.0, 9.8)` rounded to two decimals, DSA problems in
/// `[50, 500)`, projects in `[0, 6)` and mock scores in `[30, 100)`.
pub fn generate(config: &SyntheticDatasetConfig) -> Result<Dataset, DatasetError> {
    let rows = config.rows;
    if rows == 0 {
        return Err(DatasetError::EmptyDataset);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let cgpa: Vec<f64> = (0..rows).map(|_| round_to_cents(rng.gen_range(6.0..9.8))).collect();
    let dsa: Vec<u32> = (0..rows).map(|_| rng.gen_range(50..500)).collect();
    let projects: Vec<u32> = (0..rows).map(|_| rng.gen_range(0..6)).collect();
    let mock: Vec<u32> = (0..rows).map(|_| rng.gen_range(30..100)).collect();

    let records: Vec<StudentRecord> = (0..rows)
        .map(|i| StudentRecord::new(cgpa[i], dsa[i], projects[i], mock[i]))
        .collect();

    let dataset = Dataset::from_records(records)?;
    let summary = dataset.summary();
    info!("Generated {} synthetic records (seed {})", rows, config.seed);
    debug!("{}", summary);
    Ok(dataset)
}
