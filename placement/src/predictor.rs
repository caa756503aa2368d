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

use std::ops::RangeInclusive;

use log::debug;
use ndarray::Array2;

use crate::algorithms::{KNN, Neighbor};
use crate::dataset::{Dataset, Outcome};
use crate::errors::{InputError, ModelError};
use crate::scalers::StandardScaler;

pub const CGPA_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const DSA_RANGE: RangeInclusive<u32> = 0..=500;
pub const PROJECTS_RANGE: RangeInclusive<u32> = 0..=10;
pub const MOCK_RANGE: RangeInclusive<u32> = 0..=100;

/// A new student to classify. Values are kept within the bounds the input
/// controls allow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StudentProfile {
    cgpa: f64,
    dsa_problems: u32,
    projects: u32,
    mock_score: u32,
}

fn check_range<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), InputError>
where
    T: PartialOrd + Copy + Into<f64>,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field,
            value: value.into(),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        })
    }
}

impl StudentProfile {
    pub fn new(
        cgpa: f64,
        dsa_problems: u32,
        projects: u32,
        mock_score: u32,
    ) -> Result<Self, InputError> {
        check_range("CGPA", cgpa, &CGPA_RANGE)?;
        check_range("DSA_Problems", dsa_problems, &DSA_RANGE)?;
        check_range("Projects", projects, &PROJECTS_RANGE)?;
        check_range("Mock_Score", mock_score, &MOCK_RANGE)?;
        Ok(StudentProfile { cgpa, dsa_problems, projects, mock_score })
    }

    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    pub fn dsa_problems(&self) -> u32 {
        self.dsa_problems
    }

    pub fn projects(&self) -> u32 {
        self.projects
    }

    pub fn mock_score(&self) -> u32 {
        self.mock_score
    }

    /// Single-row feature matrix in the dataset's column order.
    pub fn to_features(&self) -> Array2<f64> {
        ndarray::array![[
            self.cgpa,
            f64::from(self.dsa_problems),
            f64::from(self.projects),
            f64::from(self.mock_score)
        ]]
    }
}

impl Default for StudentProfile {
    fn default() -> Self {
        StudentProfile { cgpa: 7.5, dsa_problems: 250, projects: 2, mock_score: 70 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub outcome: Outcome,
    /// Nearest training records, closest first.
    pub neighbors: Vec<Neighbor>,
    pub cleared_votes: usize,
}

impl Prediction {
    pub fn k(&self) -> usize {
        self.neighbors.len()
    }
}

/// Standardizing KNN model fitted on a student dataset.
#[derive(Clone, Debug)]
pub struct PlacementModel {
    knn: KNN,
}

impl PlacementModel {
    pub fn fit(dataset: &Dataset, k: usize) -> Result<Self, ModelError> {
        let mut knn = KNN::new().k(k).scaler(StandardScaler::new()).normalize(true).build();
        knn.fit(&dataset.features(), &dataset.labels())?;
        Ok(PlacementModel { knn })
    }

    pub fn k(&self) -> usize {
        self.knn.k()
    }

    pub fn predict(&self, profile: &StudentProfile) -> Result<Prediction, ModelError> {
        let features = profile.to_features();
        let label = self.knn.predict(&features)?[0];
        let outcome = Outcome::from_label(label).ok_or(ModelError::InvalidLabel { label })?;

        let neighbors = self.knn.kneighbors(&features)?.into_iter().next().unwrap_or_default();
        let cleared_votes = match self.knn.labels() {
            Some(labels) => neighbors.iter().filter(|n| labels[n.index] == 1.0).count(),
            None => 0,
        };

        debug!(
            "Predicted {:?} for {:?} ({}/{} neighbors cleared)",
            outcome,
            profile,
            cleared_votes,
            neighbors.len()
        );
        Ok(Prediction { outcome, neighbors, cleared_votes })
    }

    /// Share of the dataset's own records the model labels correctly.
    pub fn training_accuracy(&self, dataset: &Dataset) -> Result<f64, ModelError> {
        let labels = dataset.labels();
        let predictions = self.knn.predict(&dataset.features())?;
        Ok(self.knn.calculate_accuracy(&predictions, &labels))
    }
}
