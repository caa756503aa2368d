use placement::dataset::{self, SyntheticDatasetConfig};
use placement::ndarray::Axis;
use placement::scalers::{Scaler, StandardScaler};
use placement::session::{Control, DEFAULT_K, Session};
use placement::{Outcome, PlacementModel, StudentProfile};

#[test]
fn scaled_features_are_standardized() {
    let dataset = dataset::generate(&SyntheticDatasetConfig::new()).unwrap();
    let mut scaler = StandardScaler::new();
    let scaled = scaler.fit_transform(&dataset.features()).unwrap();

    let mean = scaled.mean_axis(Axis(0)).unwrap();
    let var = scaled.var_axis(Axis(0), 0.0);
    for (&m, &v) in mean.iter().zip(var.iter()) {
        assert!(m.abs() < 1e-9, "column mean {} should be ~0", m);
        assert!((v - 1.0).abs() < 1e-9, "column variance {} should be ~1", v);
    }
}

#[test]
fn default_scenario_is_reproducible() {
    let profile = StudentProfile::new(7.5, 250, 2, 70).unwrap();

    let first = {
        let dataset = dataset::generate(&SyntheticDatasetConfig::new()).unwrap();
        PlacementModel::fit(&dataset, 3).unwrap().predict(&profile).unwrap()
    };
    let second = {
        let dataset = dataset::generate(&SyntheticDatasetConfig::new()).unwrap();
        PlacementModel::fit(&dataset, 3).unwrap().predict(&profile).unwrap()
    };
    assert_eq!(first, second);
    assert_eq!(first.k(), 3);
}

#[test]
fn default_dataset_matches_recorded_table() {
    let dataset = dataset::generate(&SyntheticDatasetConfig::new()).unwrap();
    let mut out = Vec::new();
    dataset.write_csv(&mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("CGPA,DSA_Problems,Projects,Mock_Score,Outcome"));
    assert_eq!(lines.next(), Some("8.00,439,5,80,1"));
    assert_eq!(lines.count(), 29);
    assert_eq!(dataset.summary().to_string(), "Dataset Summary: 26 Cleared | 4 Not Cleared");
}

#[test]
fn default_scenario_predicts_clear() {
    let dataset = dataset::generate(&SyntheticDatasetConfig::new()).unwrap();
    let model = PlacementModel::fit(&dataset, 3).unwrap();
    let prediction = model.predict(&StudentProfile::new(7.5, 250, 2, 70).unwrap()).unwrap();
    assert_eq!(prediction.outcome, Outcome::Clear);
    assert_eq!(prediction.cleared_votes, 2);
}

#[test]
fn prediction_agrees_with_brute_force_neighbors() {
    let dataset = dataset::generate(&SyntheticDatasetConfig::new()).unwrap();
    let features = dataset.features();
    let mean = features.mean_axis(Axis(0)).unwrap();
    let std = features.var_axis(Axis(0), 0.0).mapv(f64::sqrt);

    let profile = StudentProfile::default();
    let query = (profile.to_features().row(0).to_owned() - &mean) / &std;

    let mut distances: Vec<(usize, f64)> = features
        .axis_iter(Axis(0))
        .enumerate()
        .map(|(i, row)| {
            let scaled = (row.to_owned() - &mean) / &std;
            (i, (&scaled - &query).mapv(|d| d * d).sum().sqrt())
        })
        .collect();
    distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

    for k in [1, 3, 5, 7, 9] {
        let model = PlacementModel::fit(&dataset, k).unwrap();
        let prediction = model.predict(&profile).unwrap();
        let expected: Vec<usize> = distances.iter().take(k).map(|&(i, _)| i).collect();
        let actual: Vec<usize> = prediction.neighbors.iter().map(|n| n.index).collect();
        assert_eq!(actual, expected, "k = {}", k);

        let cleared = expected
            .iter()
            .filter(|&&i| dataset.records()[i].outcome == Outcome::Clear)
            .count();
        assert_eq!(prediction.cleared_votes, cleared);
        assert_eq!(prediction.outcome == Outcome::Clear, cleared * 2 > k);
    }
}

#[test]
fn session_walkthrough() {
    let mut session = Session::new(SyntheticDatasetConfig::new(), DEFAULT_K).unwrap();
    let label_before = session.predict().unwrap().outcome;

    session.adjust(Control::K, 1).unwrap();
    session.adjust(Control::K, -1).unwrap();
    assert_eq!(session.k(), DEFAULT_K);
    assert!(session.prediction().is_none());

    assert_eq!(session.predict().unwrap().outcome, label_before);
}
