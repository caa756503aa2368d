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

//! Static text shown by the presenter.

pub const TITLE: &str = "Activity 1: Supervised Learning Review";
pub const SUBTITLE: &str = "Predicting B.Tech CSE Interview Success using KNN";
pub const PRESENTATION_DATE: &str = "Presentation Date: 09/01/2026";

pub const TEAM_HEADER: &str = "Team Details (Group 2)";
pub const TEAM_LEADER: &str = "Team Leader: Bibek Nandi";
pub const TEAM_MEMBERS: [&str; 5] = [
    "1. Bibek Nandi (14)",
    "2. Anmol Kansal (9)",
    "3. Shubham Kumar (41)",
    "4. Vikash Sharma (54)",
    "5. Siddhant Singh (42)",
];

pub const TAB_TITLES: [&str; 4] = [
    "1a & 1b: Problem Definition",
    "1c: Dummy Dataset",
    "1d: Challenges",
    "Interactive KNN Model",
];

pub const PROBLEM_HEADER: &str = "a. Define the Problem";
pub const PROBLEM_TEXT: [&str; 2] = [
    "Objective: To predict whether a B.Tech CSE student will clear a technical interview \
     based on their academic and technical profile.",
    "In the competitive campus placement landscape, we aim to use historical data to \
     identify which students are \"Interview Ready\" and which require further training.",
];

pub const PROBLEM_TYPE_HEADER: &str = "b. Type of Problem";
pub const PROBLEM_TYPE: &str = "Type: Supervised Learning (Classification)";
pub const PROBLEM_TYPE_TEXT: [&str; 2] = [
    "- Supervised: Because we use a labeled dataset (past results).",
    "- Classification: Because the output is a discrete category: Clear or Not Clear.",
];

pub const DATASET_HEADER: &str = "c. Collected Dataset";

pub const CHALLENGES_HEADER: &str = "d. Identify Challenges";
pub const CHALLENGES_INTRO: &str = "Key Technical Hurdles in KNN Implementation:";
pub const CHALLENGES: [&str; 4] = [
    "1. Feature Scaling: Since 'DSA Problems' (up to 500) and 'CGPA' (0-10) are on \
     different scales, the model would ignore CGPA without a StandardScaler.",
    "2. Choosing K: A small K (like 1) makes the model sensitive to outliers; a large K \
     may include points from the wrong class.",
    "3. The Curse of Dimensionality: As we add more parameters (Projects, Mock Scores), \
     calculating multi-dimensional distance becomes computationally heavy.",
    "4. Memory Usage: KNN is a 'Lazy Learner'. It doesn't 'learn' a model but compares \
     new data to all stored samples every time.",
];

pub const MODEL_HEADER: &str = "Visualizing Model Training & Prediction";
pub const TEST_STUDENT_HEADER: &str = "Test a New Student";
pub const PREDICT_BUTTON: &str = "Predict Result";
pub const PREDICTION_LABEL: &str = "Interview Prediction";
pub const PLOT_HEADER: &str = "Spatial Distribution (CGPA vs DSA)";
pub const PLOT_CAPTION: &str =
    "Note: Visualization shows only 2 of the 4 parameters used by the model.";
