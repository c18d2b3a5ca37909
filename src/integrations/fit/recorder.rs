//! In-memory fitness session recorder.

use super::{
    ActivitySegment, DetectedActivity, FitApiClient, FitSession, FitSessionError,
    FitSessionManager,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Session currently being recorded.
#[derive(Debug, Clone)]
struct ActiveSession {
    session: FitSession,
    points: Vec<(DateTime<Utc>, DetectedActivity)>,
}

impl ActiveSession {
    fn new(start_time: DateTime<Utc>) -> Self {
        let millis = start_time.timestamp_millis();
        Self {
            session: FitSession {
                id: Uuid::new_v4(),
                name: format!("Ride {}", start_time.format("%Y-%m-%d %H:%M")),
                identifier: format!("pebblebike-{}", millis),
                activity: DetectedActivity::OnBicycle.fitness_activity().to_string(),
                start_time,
                end_time: None,
                segments: Vec::new(),
            },
            points: Vec::new(),
        }
    }

    /// Build the finished session: end time plus collapsed segments.
    ///
    /// Each run of identical activities becomes one segment lasting until the
    /// next change, or until the session end for the last run. Every sample
    /// lands in a segment; runs with no duration become zero-length segments.
    fn finish(&self) -> FitSession {
        let end_time = self
            .points
            .last()
            .map(|(time, _)| *time)
            .unwrap_or(self.session.start_time)
            .max(self.session.start_time);

        let mut runs: Vec<(DateTime<Utc>, DetectedActivity)> = Vec::new();
        for &(time, activity) in &self.points {
            if runs.last().map(|(_, a)| *a) != Some(activity) {
                runs.push((time, activity));
            }
        }

        let segments = runs
            .iter()
            .enumerate()
            .map(|(i, &(start_time, activity))| ActivitySegment {
                activity,
                start_time,
                end_time: runs.get(i + 1).map(|(t, _)| *t).unwrap_or(end_time),
            })
            .collect();

        FitSession {
            end_time: Some(end_time),
            segments,
            ..self.session.clone()
        }
    }
}

/// Records detected activity and inserts finished sessions with a client.
pub struct SessionRecorder<C: FitApiClient> {
    client: Option<Arc<C>>,
    active: Option<ActiveSession>,
}

impl<C: FitApiClient> Default for SessionRecorder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FitApiClient> SessionRecorder<C> {
    /// Create a recorder with no active session.
    pub fn new() -> Self {
        Self {
            client: None,
            active: None,
        }
    }

    /// Whether a session is open.
    pub fn has_active_session(&self) -> bool {
        self.active.is_some()
    }

    /// Number of data points in the active session.
    pub fn data_point_count(&self) -> usize {
        self.active.as_ref().map(|a| a.points.len()).unwrap_or(0)
    }
}

fn to_datetime(millis: i64) -> Result<DateTime<Utc>, FitSessionError> {
    DateTime::from_timestamp_millis(millis).ok_or(FitSessionError::InvalidTimestamp(millis))
}

impl<C: FitApiClient> FitSessionManager for SessionRecorder<C> {
    type Client = C;

    fn start_session(
        &mut self,
        start_time_ms: i64,
        client: Arc<C>,
    ) -> Result<(), FitSessionError> {
        let start_time = to_datetime(start_time_ms)?;

        if let Some(previous) = &self.active {
            tracing::warn!(
                "Discarding unsaved fitness session {} ({} points)",
                previous.session.identifier,
                previous.points.len()
            );
        }

        let active = ActiveSession::new(start_time);
        tracing::info!("Started fitness session {}", active.session.identifier);

        self.active = Some(active);
        self.client = Some(client);
        Ok(())
    }

    fn add_data_point(
        &mut self,
        time_ms: i64,
        activity: DetectedActivity,
    ) -> Result<(), FitSessionError> {
        let time = to_datetime(time_ms)?;
        let active = self
            .active
            .as_mut()
            .ok_or(FitSessionError::NoActiveSession)?;

        if let Some(&(previous, _)) = active.points.last() {
            if time < previous {
                return Err(FitSessionError::OutOfOrder { time, previous });
            }
        }

        tracing::trace!("Activity {:?} at {}", activity, time);
        active.points.push((time, activity));
        Ok(())
    }

    async fn save_active_session(&mut self) -> Result<FitSession, FitSessionError> {
        let (session, client) = match (&self.active, &self.client) {
            (Some(active), Some(client)) => (active.finish(), client.clone()),
            _ => return Err(FitSessionError::NoActiveSession),
        };

        if let Ok(payload) = serde_json::to_string(&session) {
            tracing::debug!("Inserting fitness session: {}", payload);
        }

        if let Err(e) = client.insert_session(&session).await {
            tracing::error!("Failed to save fitness session {}: {}", session.identifier, e);
            return Err(e);
        }

        tracing::info!(
            "Saved fitness session {} with {} segments",
            session.identifier,
            session.segments.len()
        );
        self.active = None;
        Ok(session)
    }
}
