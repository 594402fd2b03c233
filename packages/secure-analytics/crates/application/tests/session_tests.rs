use analytics_snapshot::Snapshot;
use application::{AppConfig, DashboardSession, LiveSimulator};
use domain::indicators::{Group, IndicatorKey};
use domain::ports::{Notifier, ScorePresenter, Severity};
use domain::scoring::{KpiId, ScoreReport, UpdateOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

#[derive(Clone, Default)]
struct Recorder {
    notes: Rc<RefCell<Vec<(String, Severity)>>>,
    reports: Rc<RefCell<Vec<ScoreReport>>>,
}

impl Notifier for Recorder {
    fn notify(&self, message: &str, severity: Severity) {
        self.notes.borrow_mut().push((message.to_string(), severity));
    }
}

impl ScorePresenter for Recorder {
    fn present(&self, report: &ScoreReport) {
        self.reports.borrow_mut().push(report.clone());
    }
}

fn config() -> AppConfig {
    AppConfig {
        autosave: false,
        ..Default::default()
    }
}

fn session(recorder: &Recorder) -> DashboardSession {
    DashboardSession::new(
        &config(),
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    )
    .unwrap()
}

#[test]
fn test_update_is_presented_once() {
    let recorder = Recorder::default();
    let mut session = session(&recorder);

    let outcome = session.set_indicator(Group::Environment, "terror", 9);
    assert!(outcome.changed());

    let reports = recorder.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].scores, *session.derived_scores().unwrap());
    assert!(recorder.notes.borrow().is_empty());
}

#[test]
fn test_unknown_key_is_silent() {
    let recorder = Recorder::default();
    let mut session = session(&recorder);
    let before = *session.derived_scores().unwrap();

    assert_eq!(
        session.set_indicator(Group::Environment, "bogus", 5),
        UpdateOutcome::Ignored
    );
    assert_eq!(*session.derived_scores().unwrap(), before);
    assert!(recorder.reports.borrow().is_empty());
    assert!(recorder.notes.borrow().is_empty());
}

#[test]
fn test_failed_recompute_notifies_and_keeps_scores() {
    let recorder = Recorder::default();
    let mut session = session(&recorder);

    let keys: Vec<_> = IndicatorKey::in_group(Group::Environment).collect();
    for key in &keys[..keys.len() - 1] {
        session.clear_indicator(Group::Environment, key.as_str());
    }
    let last_good = *session.derived_scores().unwrap();
    let presented = recorder.reports.borrow().len();

    let outcome = session.clear_indicator(Group::Environment, keys[keys.len() - 1].as_str());
    assert!(matches!(outcome, UpdateOutcome::Cleared { .. }));

    assert_eq!(*session.derived_scores().unwrap(), last_good);
    assert_eq!(recorder.reports.borrow().len(), presented);

    let notes = recorder.notes.borrow();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].1, Severity::Error);
}

#[test]
fn test_completion_counts_indicators_and_profile() {
    let recorder = Recorder::default();
    let mut session = session(&recorder);
    assert_eq!(session.completion_count().to_string(), "18/38");

    session.clear_indicator(Group::Object, "cctv");
    let mut facility = session.facility().clone();
    facility.operating_hours = None;
    session.set_facility(facility);

    assert_eq!(session.completion_count().to_string(), "16/38");
    let report = recorder.reports.borrow().last().cloned().unwrap();
    assert_eq!(report.card(KpiId::IndicatorCount).unwrap().display, "16/38");
}

#[test]
fn test_snapshot_round_trip_through_store() {
    let home = tempdir().unwrap();
    let cfg = AppConfig {
        profile: "werk-nord".to_string(),
        ..Default::default()
    };

    {
        let recorder = Recorder::default();
        let mut session = DashboardSession::open(
            &cfg,
            home.path(),
            Box::new(recorder.clone()),
            Box::new(recorder.clone()),
        )
        .unwrap();
        // autosave is on in this config
        session.set(IndicatorKey::Cyber, 10);
        session.clear_indicator(Group::Object, "alarm");
    }

    let recorder = Recorder::default();
    let session = DashboardSession::open(
        &cfg,
        home.path(),
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    )
    .unwrap();

    assert_eq!(session.aggregator().value(IndicatorKey::Cyber), Some(10));
    assert_eq!(session.aggregator().value(IndicatorKey::Alarm), None);
    assert!(home.path().join("profiles/werk-nord.json").exists());
}

#[test]
fn test_legacy_snapshot_is_clamped_and_filtered() {
    let recorder = Recorder::default();
    let mut session = session(&recorder);

    let legacy = Snapshot::from_json(
        r#"{
            "general": { "objectName": "Altbau" },
            "environment": { "political": 12, "crime": 3, "weather": 4 },
            "object": { "access": 7 }
        }"#,
    )
    .unwrap();

    let outcomes = session.apply_snapshot(&legacy);
    assert_eq!(outcomes.len(), 4);
    assert_eq!(outcomes.iter().filter(|o| !o.changed()).count(), 1);
    assert_eq!(session.aggregator().value(IndicatorKey::Political), Some(10));
    assert_eq!(session.aggregator().value(IndicatorKey::Fire), None);
    assert_eq!(session.facility().object_name.as_deref(), Some("Altbau"));
}

#[test]
fn test_rejected_import_keeps_previous_assessment() {
    let home = tempdir().unwrap();
    let cfg = AppConfig::default();
    let recorder = Recorder::default();
    let mut session = DashboardSession::open(
        &cfg,
        home.path(),
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    )
    .unwrap();
    session.set(IndicatorKey::Cctv, 2);
    let facility = session.facility().clone();
    let scores = *session.derived_scores().unwrap();

    let incomplete =
        Snapshot::from_json(r#"{"environment":{},"object":{"cctv":3}}"#).unwrap();
    let outcomes = session.apply_snapshot(&incomplete);

    assert!(outcomes.is_empty());
    assert_eq!(session.aggregator().value(IndicatorKey::Cctv), Some(2));
    assert_eq!(session.aggregator().value(IndicatorKey::Crime), Some(3));
    assert_eq!(session.facility(), &facility);
    assert_eq!(*session.derived_scores().unwrap(), scores);
    {
        let notes = recorder.notes.borrow();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].1, Severity::Error);
    }
    drop(session);

    let reopened = DashboardSession::open(
        &cfg,
        home.path(),
        Box::new(Recorder::default()),
        Box::new(Recorder::default()),
    )
    .unwrap();
    assert_eq!(reopened.aggregator().value(IndicatorKey::Cctv), Some(2));
    assert_eq!(
        reopened.aggregator().set(Group::Environment).assessed_count(),
        6
    );
}

#[test]
fn test_simulator_steps_from_unclamped_extremes() {
    let recorder = Recorder::default();
    let cfg = AppConfig {
        clamp_input: false,
        autosave: false,
        ..Default::default()
    };
    let mut session = DashboardSession::new(
        &cfg,
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    )
    .unwrap();
    let mut simulator = LiveSimulator::seeded(11).with_max_step(3);

    for extreme in [i64::MAX, i64::MIN] {
        let keys: Vec<_> = IndicatorKey::in_group(Group::Environment).collect();
        for key in keys {
            session.set(key, extreme);
        }
        for _ in 0..50 {
            let (key, outcome) = simulator.step(&mut session);
            assert!(matches!(outcome, UpdateOutcome::Applied { .. }));
            let value = session.aggregator().value(key).unwrap();
            assert!((0..=10).contains(&value));
        }
    }
}

#[test]
fn test_simulator_steps_stay_on_scale() {
    let recorder = Recorder::default();
    let mut session = session(&recorder);
    let mut simulator = LiveSimulator::seeded(7).with_max_step(3);

    for _ in 0..200 {
        let (key, _) = simulator.step(&mut session);
        assert_eq!(key.group(), Group::Environment);
        let value = session.aggregator().value(key).unwrap();
        assert!((0..=10).contains(&value));
    }
    assert!(recorder.notes.borrow().is_empty());
}

#[tokio::test]
async fn test_simulator_run_is_bounded() {
    let recorder = Recorder::default();
    let mut session = session(&recorder);
    let mut simulator = LiveSimulator::seeded(1);

    let ticks = simulator
        .run(
            &mut session,
            Duration::from_millis(2),
            Duration::from_millis(3),
            Some(5),
        )
        .await;

    assert_eq!(ticks, 5);
}
