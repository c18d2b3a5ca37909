//! Fitness Activity Relay
//!
//! Collects detected activity samples during a ride and hands the finished
//! session to a cloud fitness API client.

pub mod recorder;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub use recorder::SessionRecorder;

/// Fitness session errors
#[derive(Debug, Error)]
pub enum FitSessionError {
    #[error("No active session")]
    NoActiveSession,

    #[error("Invalid timestamp: {0} ms")]
    InvalidTimestamp(i64),

    #[error("Data point at {time} precedes previous point at {previous}")]
    OutOfOrder {
        time: DateTime<Utc>,
        previous: DateTime<Utc>,
    },

    #[error("Session insert failed: {0}")]
    InsertFailed(String),
}

/// Activity reported by the phone's activity recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectedActivity {
    InVehicle,
    OnBicycle,
    OnFoot,
    Still,
    Unknown,
    Tilting,
    Walking,
    Running,
}

impl DetectedActivity {
    /// Parse the platform activity code.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => DetectedActivity::InVehicle,
            1 => DetectedActivity::OnBicycle,
            2 => DetectedActivity::OnFoot,
            3 => DetectedActivity::Still,
            5 => DetectedActivity::Tilting,
            7 => DetectedActivity::Walking,
            8 => DetectedActivity::Running,
            _ => DetectedActivity::Unknown,
        }
    }

    /// Platform activity code.
    pub fn code(&self) -> i32 {
        match self {
            DetectedActivity::InVehicle => 0,
            DetectedActivity::OnBicycle => 1,
            DetectedActivity::OnFoot => 2,
            DetectedActivity::Still => 3,
            DetectedActivity::Unknown => 4,
            DetectedActivity::Tilting => 5,
            DetectedActivity::Walking => 7,
            DetectedActivity::Running => 8,
        }
    }

    /// Fitness API activity name.
    pub fn fitness_activity(&self) -> &'static str {
        match self {
            DetectedActivity::InVehicle => "in_vehicle",
            DetectedActivity::OnBicycle => "biking",
            DetectedActivity::OnFoot => "on_foot",
            DetectedActivity::Still => "still",
            DetectedActivity::Tilting => "tilting",
            DetectedActivity::Walking => "walking",
            DetectedActivity::Running => "running",
            DetectedActivity::Unknown => "unknown",
        }
    }
}

/// A contiguous stretch of one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySegment {
    pub activity: DetectedActivity,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// A finished (or in-progress) fitness session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitSession {
    /// Unique ID
    pub id: Uuid,
    /// Human readable name
    pub name: String,
    /// Identifier sent to the fitness API
    pub identifier: String,
    /// Session activity
    pub activity: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Activity segments, filled when the session is saved
    pub segments: Vec<ActivitySegment>,
}

/// Cloud fitness API used to store sessions.
pub trait FitApiClient: Send + Sync {
    /// Insert a finished session
    fn insert_session(
        &self,
        session: &FitSession,
    ) -> impl std::future::Future<Output = Result<(), FitSessionError>> + Send;
}

/// Relays activity samples to a fitness API.
pub trait FitSessionManager {
    type Client: FitApiClient;

    /// Open a new session starting at `start_time_ms` (unix millis)
    fn start_session(
        &mut self,
        start_time_ms: i64,
        client: Arc<Self::Client>,
    ) -> Result<(), FitSessionError>;

    /// Record a detected activity at `time_ms`
    fn add_data_point(
        &mut self,
        time_ms: i64,
        activity: DetectedActivity,
    ) -> Result<(), FitSessionError>;

    /// Close the active session and insert it with the client
    fn save_active_session(
        &mut self,
    ) -> impl std::future::Future<Output = Result<FitSession, FitSessionError>> + Send;
}
