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

//! Per-user state of the demo.
//!
//! A session owns the generated dataset and the fitted model and reacts to
//! one event at a time: a control moved, `k` changed, the predict button
//! pressed or the page reloaded. Nothing is shared between sessions.

use log::{debug, info, warn};

use crate::dataset::{Dataset, SyntheticDatasetConfig, generate};
use crate::errors::SessionError;
use crate::predictor::{
    CGPA_RANGE, DSA_RANGE, MOCK_RANGE, PROJECTS_RANGE, PlacementModel, Prediction, StudentProfile,
};

pub const K_MIN: usize = 1;
pub const K_MAX: usize = 9;
pub const K_STEP: usize = 2;
pub const DEFAULT_K: usize = 3;

const CGPA_STEP: f64 = 0.1;
const DSA_STEP: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    K,
    Cgpa,
    DsaProblems,
    Projects,
    MockScore,
}

impl Control {
    pub const ALL: [Control; 5] =
        [Control::K, Control::Cgpa, Control::DsaProblems, Control::Projects, Control::MockScore];

    pub fn label(self) -> &'static str {
        match self {
            Control::K => "Select value of K",
            Control::Cgpa => "Enter CGPA",
            Control::DsaProblems => "Enter DSA Problems",
            Control::Projects => "Projects",
            Control::MockScore => "Mock Interview Score",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub fn validate_k(k: usize) -> Result<usize, SessionError> {
    if (K_MIN..=K_MAX).contains(&k) && k % 2 == 1 {
        Ok(k)
    } else {
        Err(SessionError::InvalidK { k, min: K_MIN, max: K_MAX })
    }
}

fn step_u32(value: u32, steps: i64, step: i64, min: u32, max: u32) -> u32 {
    let moved = i64::from(value).saturating_add(steps.saturating_mul(step));
    moved.clamp(i64::from(min), i64::from(max)) as u32
}

#[derive(Debug)]
pub struct Session {
    config: SyntheticDatasetConfig,
    dataset: Dataset,
    model: PlacementModel,
    profile: StudentProfile,
    prediction: Option<Prediction>,
}

impl Session {
    pub fn new(config: SyntheticDatasetConfig, k: usize) -> Result<Self, SessionError> {
        let k = validate_k(k)?;
        let dataset = generate(&config)?;
        let model = PlacementModel::fit(&dataset, k)?;
        info!("Session ready: {} records, k = {}", dataset.len(), k);
        Ok(Session { config, dataset, model, profile: StudentProfile::default(), prediction: None })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn model(&self) -> &PlacementModel {
        &self.model
    }

    pub fn k(&self) -> usize {
        self.model.k()
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    /// Result of the last predict request, cleared whenever an input changes.
    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn set_k(&mut self, k: usize) -> Result<(), SessionError> {
        let k = validate_k(k)?;
        if k != self.k() {
            self.model = PlacementModel::fit(&self.dataset, k)?;
            debug!("Refitted model with k = {}", k);
        }
        self.prediction = None;
        Ok(())
    }

    pub fn set_profile(&mut self, profile: StudentProfile) {
        self.profile = profile;
        self.prediction = None;
    }

    /// Moves a control by whole steps, stopping at its bounds.
    pub fn adjust(&mut self, control: Control, steps: i64) -> Result<(), SessionError> {
        let p = self.profile;
        let profile = match control {
            Control::K => {
                let k = step_u32(self.k() as u32, steps, K_STEP as i64, K_MIN as u32, K_MAX as u32);
                return self.set_k(k as usize);
            }
            Control::Cgpa => {
                let cgpa = (p.cgpa() + steps as f64 * CGPA_STEP)
                    .clamp(*CGPA_RANGE.start(), *CGPA_RANGE.end());
                StudentProfile::new(
                    (cgpa * 100.0).round() / 100.0,
                    p.dsa_problems(),
                    p.projects(),
                    p.mock_score(),
                )?
            }
            Control::DsaProblems => StudentProfile::new(
                p.cgpa(),
                step_u32(p.dsa_problems(), steps, DSA_STEP, *DSA_RANGE.start(), *DSA_RANGE.end()),
                p.projects(),
                p.mock_score(),
            )?,
            Control::Projects => StudentProfile::new(
                p.cgpa(),
                p.dsa_problems(),
                step_u32(p.projects(), steps, 1, *PROJECTS_RANGE.start(), *PROJECTS_RANGE.end()),
                p.mock_score(),
            )?,
            Control::MockScore => StudentProfile::new(
                p.cgpa(),
                p.dsa_problems(),
                p.projects(),
                step_u32(p.mock_score(), steps, 1, *MOCK_RANGE.start(), *MOCK_RANGE.end()),
            )?,
        };
        debug!("{} -> {:?}", control.label(), profile);
        self.set_profile(profile);
        Ok(())
    }

    /// Classifies the current profile and keeps the result.
    pub fn predict(&mut self) -> Result<&Prediction, SessionError> {
        let prediction = self.model.predict(&self.profile)?;
        info!("Interview prediction: {}", prediction.outcome);
        Ok(&*self.prediction.insert(prediction))
    }

    /// Regenerates the dataset from the session's configuration and refits.
    pub fn reload(&mut self) -> Result<(), SessionError> {
        let dataset = generate(&self.config)?;
        let model = PlacementModel::fit(&dataset, self.k()).inspect_err(|e| {
            warn!("Refit after reload failed: {}", e);
        })?;
        self.dataset = dataset;
        self.model = model;
        self.prediction = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DEFAULT_ROWS;

    fn session() -> Session {
        Session::new(SyntheticDatasetConfig::new(), DEFAULT_K).unwrap()
    }

    #[test]
    fn new_session_defaults() {
        let session = session();
        assert_eq!(session.k(), 3);
        assert_eq!(session.dataset().len(), DEFAULT_ROWS);
        assert_eq!(session.profile(), &StudentProfile::default());
        assert!(session.prediction().is_none());
    }

    #[test]
    fn k_must_be_odd_and_in_range() {
        for k in [0, 2, 4, 10, 11] {
            assert!(matches!(validate_k(k), Err(SessionError::InvalidK { .. })), "k = {}", k);
        }
        for k in [1, 3, 5, 7, 9] {
            assert_eq!(validate_k(k).unwrap(), k);
        }
        assert!(Session::new(SyntheticDatasetConfig::new(), 4).is_err());
    }

    #[test]
    fn adjust_k_steps_by_two_and_clamps() {
        let mut session = session();
        session.adjust(Control::K, 1).unwrap();
        assert_eq!(session.k(), 5);
        session.adjust(Control::K, 10).unwrap();
        assert_eq!(session.k(), 9);
        session.adjust(Control::K, -10).unwrap();
        assert_eq!(session.k(), 1);
    }

    #[test]
    fn adjust_inputs_clamp_to_bounds() {
        let mut session = session();
        session.adjust(Control::Cgpa, 3).unwrap();
        assert_eq!(session.profile().cgpa(), 7.8);
        session.adjust(Control::Cgpa, 100).unwrap();
        assert_eq!(session.profile().cgpa(), 10.0);
        session.adjust(Control::DsaProblems, -1).unwrap();
        assert_eq!(session.profile().dsa_problems(), 245);
        session.adjust(Control::DsaProblems, -1000).unwrap();
        assert_eq!(session.profile().dsa_problems(), 0);
        session.adjust(Control::Projects, 20).unwrap();
        assert_eq!(session.profile().projects(), 10);
        session.adjust(Control::MockScore, i64::MIN).unwrap();
        assert_eq!(session.profile().mock_score(), 0);
    }

    #[test]
    fn input_change_discards_prediction() {
        let mut session = session();
        session.predict().unwrap();
        assert!(session.prediction().is_some());
        session.adjust(Control::Projects, 1).unwrap();
        assert!(session.prediction().is_none());

        session.predict().unwrap();
        session.set_k(5).unwrap();
        assert!(session.prediction().is_none());
    }

    #[test]
    fn every_k_predicts_on_bounds() {
        let mut session = session();
        let corners = [
            StudentProfile::new(0.0, 0, 0, 0).unwrap(),
            StudentProfile::new(10.0, 500, 10, 100).unwrap(),
            StudentProfile::new(0.0, 500, 0, 100).unwrap(),
            StudentProfile::default(),
        ];
        for k in [1, 3, 5, 7, 9] {
            session.set_k(k).unwrap();
            for profile in corners {
                session.set_profile(profile);
                let prediction = session.predict().unwrap();
                assert_eq!(prediction.k(), k);
            }
        }
    }

    #[test]
    fn reload_reproduces_dataset() {
        let mut session = session();
        let before = session.dataset().clone();
        session.predict().unwrap();
        session.reload().unwrap();
        assert_eq!(session.dataset(), &before);
        assert!(session.prediction().is_none());
    }

    #[test]
    fn control_cycle() {
        assert_eq!(Control::K.next(), Control::Cgpa);
        assert_eq!(Control::MockScore.next(), Control::K);
        assert_eq!(Control::K.prev(), Control::MockScore);
    }
}
