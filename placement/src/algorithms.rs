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

use std::collections::HashMap;

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, Axis, Zip};

use crate::errors::{ModelError, ScalerError};
use crate::scalers::{Scaler, StandardScaler};

/// A training point close to a query, with its Euclidean distance in the
/// space the model was fitted in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

pub struct KNNBuilder {
    k: usize,
    normalize: bool,
    x_scaler: StandardScaler<f64>,
}

impl KNNBuilder {
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn scaler(mut self, scaler: StandardScaler<f64>) -> Self {
        self.x_scaler = scaler;
        self
    }

    pub fn build(self) -> KNN {
        KNN {
            x_train: None,
            y_train: None,
            k: self.k,
            normalize: self.normalize,
            x_scaler: self.x_scaler,
        }
    }
}

/// Majority-vote k-nearest-neighbors classifier for binary labels.
///
/// Fitting only standardizes and stores the training data; all distance
/// work happens in [`KNN::kneighbors`]. Neighbors at equal distance keep
/// their training order, and an even vote goes to the smaller label.
#[derive(Clone, Debug)]
pub struct KNN {
    x_train: Option<Array2<f64>>,
    y_train: Option<Array1<f64>>,
    k: usize,
    normalize: bool,
    x_scaler: StandardScaler<f64>,
}

impl KNN {
    pub fn new() -> KNNBuilder {
        KNNBuilder { k: 3, normalize: true, x_scaler: StandardScaler::new() }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        if x.ncols() == 0 {
            return Err(ScalerError::NoFeatures.into());
        }
        if x.is_empty() || y.is_empty() {
            return Err(ScalerError::EmptyInput.into());
        }
        if x.nrows() != y.len() {
            return Err(
                ScalerError::DimensionMismatch { expected: x.nrows(), actual: y.len() }.into()
            );
        }
        if self.k == 0 || self.k > x.nrows() {
            return Err(ModelError::InvalidK { k: self.k, n_samples: x.nrows() });
        }
        if let Some(&label) = y.iter().find(|&&v| v != 0.0 && v != 1.0) {
            return Err(ModelError::InvalidLabel { label });
        }

        let x_scaled = if self.normalize { self.x_scaler.fit_transform(x)? } else { x.clone() };

        debug!("KNN fitted on {} samples x {} features (k = {})", x.nrows(), x.ncols(), self.k);
        self.x_train = Some(x_scaled);
        self.y_train = Some(y.clone());
        Ok(())
    }

    /// Returns the `k` closest training points for every query row, nearest first.
    pub fn kneighbors(&self, x: &Array2<f64>) -> Result<Vec<Vec<Neighbor>>, ModelError> {
        let x_train = self.x_train.as_ref().ok_or(ScalerError::NotFitted)?;

        if x.is_empty() {
            return Err(ScalerError::EmptyInput.into());
        }
        if x.ncols() != x_train.ncols() {
            return Err(ScalerError::DimensionMismatch {
                expected: x_train.ncols(),
                actual: x.ncols(),
            }
            .into());
        }

        let x_scaled = if self.normalize { self.x_scaler.transform(x)? } else { x.clone() };

        let neighbors = x_scaled
            .axis_iter(Axis(0))
            .map(|row| {
                let mut candidates: Vec<Neighbor> = x_train
                    .axis_iter(Axis(0))
                    .enumerate()
                    .map(|(index, v)| Neighbor { index, distance: euclidean(v, row) })
                    .collect();
                candidates.sort_by(|a, b| {
                    a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal)
                });
                candidates.truncate(self.k);
                candidates
            })
            .collect();
        Ok(neighbors)
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let y_train = self.y_train.as_ref().ok_or(ScalerError::NotFitted)?;
        let neighbors = self.kneighbors(x)?;

        let mut predictions = Array1::zeros(neighbors.len());
        for (i, nearest) in neighbors.iter().enumerate() {
            let mut class_counts: HashMap<usize, usize> = HashMap::new();
            for neighbor in nearest {
                let label_int = y_train[neighbor.index] as usize;
                *class_counts.entry(label_int).or_insert(0) += 1;
            }

            let (predicted_class_int, _) = class_counts
                .into_iter()
                .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
                .unwrap_or((0, 0));
            predictions[i] = predicted_class_int as f64;
        }
        Ok(predictions)
    }

    /// Label of each training point, available once fitted.
    pub fn labels(&self) -> Option<&Array1<f64>> {
        self.y_train.as_ref()
    }

    pub fn calculate_accuracy(&self, predictions: &Array1<f64>, y_test: &Array1<f64>) -> f64 {
        if predictions.is_empty() {
            return 0.0;
        }
        let correct = predictions
            .iter()
            .zip(y_test.iter())
            .filter(|(&pred, &true_label)| pred == true_label)
            .count();
        correct as f64 / predictions.len() as f64
    }
}

fn euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let squared_sum = Zip::from(a).and(b).fold(0.0, |acc, &a_i, &b_i| {
        let diff = a_i - b_i;
        acc + diff * diff
    });
    squared_sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, array};

    fn two_clusters() -> (Array2<f64>, Array1<f64>) {
        let x = array![[1.0, 1.0], [1.5, 1.0], [1.0, 1.5], [8.0, 8.0], [8.5, 8.0], [8.0, 8.5]];
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        (x, y)
    }

    #[test]
    fn knn_fit_predict() {
        let (x, y) = two_clusters();
        let mut knn = KNN::new().k(3).build();
        knn.fit(&x, &y).unwrap();
        let predictions = knn.predict(&array![[1.2, 1.2], [7.9, 8.1]]).unwrap();
        assert_eq!(predictions, array![0.0, 1.0]);
    }

    #[test]
    fn knn_k1_returns_training_label() {
        let (x, y) = two_clusters();
        let mut knn = KNN::new().k(1).build();
        knn.fit(&x, &y).unwrap();
        let predictions = knn.predict(&x).unwrap();
        assert_eq!(predictions, y);
        assert_eq!(knn.calculate_accuracy(&predictions, &y), 1.0);
    }

    #[test]
    fn knn_majority_vote_outweighs_nearest() {
        let x = array![[0.0], [1.1], [1.2], [5.0]];
        let y = array![1.0, 0.0, 0.0, 1.0];
        let mut knn = KNN::new().k(3).normalize(false).build();
        knn.fit(&x, &y).unwrap();
        // nearest is label 1, but two of three neighbors are label 0
        assert_eq!(knn.predict(&array![[0.4]]).unwrap(), array![0.0]);
    }

    #[test]
    fn knn_even_vote_prefers_smaller_label() {
        let x = array![[0.0], [2.0]];
        let y = array![1.0, 0.0];
        let mut knn = KNN::new().k(2).normalize(false).build();
        knn.fit(&x, &y).unwrap();
        assert_eq!(knn.predict(&array![[1.0]]).unwrap(), array![0.0]);
    }

    #[test]
    fn knn_kneighbors_sorted_and_stable() {
        let x = array![[2.0], [1.0], [-1.0], [3.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];
        let mut knn = KNN::new().k(3).normalize(false).build();
        knn.fit(&x, &y).unwrap();
        let neighbors = knn.kneighbors(&array![[0.0]]).unwrap();
        assert_eq!(neighbors.len(), 1);
        let indices: Vec<usize> = neighbors[0].iter().map(|n| n.index).collect();
        // index 1 and 2 are both at distance 1.0 and keep training order
        assert_eq!(indices, vec![1, 2, 0]);
        assert_eq!(neighbors[0][2].distance, 2.0);
    }

    #[test]
    fn knn_normalize_changes_neighbors() {
        // the second feature dominates raw distances
        let x = array![[0.0, 40.0], [10.0, 0.0], [0.0, 100.0], [10.0, 100.0]];
        let y = array![0.0, 1.0, 0.0, 1.0];
        let query = array![[10.0, 30.0]];

        let mut raw = KNN::new().k(1).normalize(false).build();
        raw.fit(&x, &y).unwrap();
        assert_eq!(raw.kneighbors(&query).unwrap()[0][0].index, 0);
        assert_eq!(raw.predict(&query).unwrap(), array![0.0]);

        let mut scaled = KNN::new().k(1).build();
        scaled.fit(&x, &y).unwrap();
        assert_eq!(scaled.kneighbors(&query).unwrap()[0][0].index, 1);
        assert_eq!(scaled.predict(&query).unwrap(), array![1.0]);
    }

    #[test]
    fn knn_invalid_k() {
        let mut knn = KNN::new().k(5).build();
        let x = array![[1.0, 2.0], [2.0, 3.0]];
        let y = array![1.0, 0.0];
        let result = knn.fit(&x, &y);
        assert!(matches!(result, Err(ModelError::InvalidK { k: 5, n_samples: 2 })));

        let mut knn = KNN::new().k(0).build();
        assert!(matches!(knn.fit(&x, &y), Err(ModelError::InvalidK { k: 0, .. })));
    }

    #[test]
    fn knn_invalid_label() {
        let mut knn = KNN::new().k(1).build();
        let x = array![[1.0, 2.0], [2.0, 3.0]];
        let y = array![1.0, 2.0];
        let result = knn.fit(&x, &y);
        assert!(matches!(result, Err(ModelError::InvalidLabel { label }) if label == 2.0));
    }

    #[test]
    fn knn_empty_input() {
        let mut knn = KNN::new().build();
        let x: Array2<f64> = Array2::zeros((0, 2));
        let y: Array1<f64> = Array1::zeros(0);
        let result = knn.fit(&x, &y);
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::EmptyInput))));
    }

    #[test]
    fn knn_no_features() {
        let mut knn = KNN::new().build();
        let x: Array2<f64> = Array2::zeros((2, 0));
        let y = array![1.0, 0.0];
        let result = knn.fit(&x, &y);
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::NoFeatures))));
    }

    #[test]
    fn knn_dimension_mismatch() {
        let mut knn = KNN::new().build();
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1.0, 0.0, 1.0];
        let result = knn.fit(&x, &y);
        assert!(matches!(
            result,
            Err(ModelError::Scaler(ScalerError::DimensionMismatch { expected: 2, actual: 3 }))
        ));
    }

    #[test]
    fn knn_not_fitted() {
        let knn = KNN::new().build();
        let x = array![[1.0, 2.0]];
        let result = knn.predict(&x);
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::NotFitted))));
    }

    #[test]
    fn knn_predict_dimension_mismatch() {
        let mut knn = KNN::new().k(1).build();
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1.0, 0.0];
        knn.fit(&x, &y).unwrap();
        let x_test = array![[1.0, 2.0, 3.0]];
        let result = knn.predict(&x_test);
        assert!(matches!(
            result,
            Err(ModelError::Scaler(ScalerError::DimensionMismatch { expected: 2, actual: 3 }))
        ));
    }
}
