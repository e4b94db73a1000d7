//! Lifecycle of the "hidden gem" alert.
//!
//! The machine is driven by re-evaluating the nearest point whenever
//! the user location or the point list changes. Time is passed in by
//! the owner, nothing here polls or sleeps.

use crate::{entities::*, proximity::HIDDEN_GEM_DISPLAY_DURATION};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertState {
    Idle,
    Alerting { point_id: Id, since: Instant },
}

#[derive(Debug, Clone)]
pub struct HiddenGemAlert {
    display_duration: Duration,
    state: AlertState,
    // The point that has already been alerted during the current visit.
    visited: Option<Id>,
}

impl Default for HiddenGemAlert {
    fn default() -> Self {
        Self::new(HIDDEN_GEM_DISPLAY_DURATION)
    }
}

impl HiddenGemAlert {
    pub const fn new(display_duration: Duration) -> Self {
        Self {
            display_duration,
            state: AlertState::Idle,
            visited: None,
        }
    }

    pub const fn state(&self) -> &AlertState {
        &self.state
    }

    pub fn is_alerting(&self) -> bool {
        matches!(self.state, AlertState::Alerting { .. })
    }

    pub fn target(&self) -> Option<&Id> {
        match &self.state {
            AlertState::Idle => None,
            AlertState::Alerting { point_id, .. } => Some(point_id),
        }
    }

    /// Feeds the result of the latest proximity evaluation.
    ///
    /// Returns the id of the point that must be alerted now, if any.
    pub fn evaluate(&mut self, nearest: Option<&Point>, now: Instant) -> Option<Id> {
        self.tick(now);
        let Some(point) = nearest else {
            self.visited = None;
            return None;
        };
        if self.visited.as_ref() == Some(&point.id) {
            return None;
        }
        log::debug!("Alerting hidden gem {}", point.id);
        self.visited = Some(point.id.clone());
        self.state = AlertState::Alerting {
            point_id: point.id.clone(),
            since: now,
        };
        Some(point.id.clone())
    }

    /// Expires the alert after the display duration.
    ///
    /// Returns the id of the dismissed point.
    pub fn tick(&mut self, now: Instant) -> Option<Id> {
        let expired = match &self.state {
            AlertState::Alerting { since, .. } => {
                now.saturating_duration_since(*since) >= self.display_duration
            }
            AlertState::Idle => false,
        };
        if expired {
            self.dismiss()
        } else {
            None
        }
    }

    /// The user navigated away: dismiss immediately and end the visit.
    pub fn leave(&mut self) -> Option<Id> {
        self.visited = None;
        self.dismiss()
    }

    fn dismiss(&mut self) -> Option<Id> {
        match std::mem::replace(&mut self.state, AlertState::Idle) {
            AlertState::Alerting { point_id, .. } => Some(point_id),
            AlertState::Idle => None,
        }
    }
}
