//! Integration tests for the fitness session relay.

use pebblebike::integrations::fit::{
    DetectedActivity, FitApiClient, FitSession, FitSessionError, FitSessionManager,
    SessionRecorder,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Client that stores sessions and can be told to fail.
#[derive(Default)]
struct MockFitClient {
    sessions: Mutex<Vec<FitSession>>,
    fail: AtomicBool,
}

impl FitApiClient for MockFitClient {
    async fn insert_session(&self, session: &FitSession) -> Result<(), FitSessionError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(FitSessionError::InsertFailed("service unavailable".to_string()));
        }
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }
}

const START: i64 = 1_420_934_400_000;

#[tokio::test]
async fn test_save_without_session() {
    let mut recorder: SessionRecorder<MockFitClient> = SessionRecorder::new();
    let result = recorder.save_active_session().await;
    assert!(matches!(result, Err(FitSessionError::NoActiveSession)));
}

#[tokio::test]
async fn test_ride_session_saved() {
    let client = Arc::new(MockFitClient::default());
    let mut recorder: SessionRecorder<MockFitClient> = SessionRecorder::new();
    recorder.start_session(START, client.clone()).unwrap();

    recorder.add_data_point(START, DetectedActivity::OnBicycle).unwrap();
    recorder.add_data_point(START + 60_000, DetectedActivity::OnBicycle).unwrap();
    recorder.add_data_point(START + 120_000, DetectedActivity::OnBicycle).unwrap();

    let session = recorder.save_active_session().await.unwrap();
    assert_eq!(session.activity, "biking");
    assert_eq!(session.identifier, format!("pebblebike-{}", START));
    assert_eq!(session.segments.len(), 1);
    assert_eq!(session.segments[0].start_time.timestamp_millis(), START);
    assert_eq!(session.segments[0].end_time.timestamp_millis(), START + 120_000);

    let stored = client.sessions.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, session.id);
}

#[tokio::test]
async fn test_empty_session_ends_at_start() {
    let client = Arc::new(MockFitClient::default());
    let mut recorder: SessionRecorder<MockFitClient> = SessionRecorder::new();
    recorder.start_session(START, client).unwrap();

    let session = recorder.save_active_session().await.unwrap();
    assert!(session.segments.is_empty());
    assert_eq!(session.end_time, Some(session.start_time));
}

#[tokio::test]
async fn test_failed_insert_keeps_session_for_retry() {
    let client = Arc::new(MockFitClient::default());
    client.fail.store(true, Ordering::SeqCst);

    let mut recorder: SessionRecorder<MockFitClient> = SessionRecorder::new();
    recorder.start_session(START, client.clone()).unwrap();
    recorder.add_data_point(START + 1_000, DetectedActivity::Walking).unwrap();

    let result = recorder.save_active_session().await;
    assert!(matches!(result, Err(FitSessionError::InsertFailed(_))));
    assert!(recorder.has_active_session());

    client.fail.store(false, Ordering::SeqCst);
    assert!(recorder.save_active_session().await.is_ok());
    assert!(!recorder.has_active_session());
}

#[test]
fn test_restart_discards_previous_points() {
    let client = Arc::new(MockFitClient::default());
    let mut recorder: SessionRecorder<MockFitClient> = SessionRecorder::new();
    recorder.start_session(START, client.clone()).unwrap();
    recorder.add_data_point(START, DetectedActivity::Still).unwrap();

    recorder.start_session(START + 10_000, client).unwrap();
    assert_eq!(recorder.data_point_count(), 0);
}
