//! Shared page state.
//!
//! Every handler reads and writes one [`UiState`]. Requests are stamped with a
//! [`Ticket`] when they start; a result whose ticket is no longer the latest
//! for its action is dropped, so overlapping clicks resolve to the last click
//! rather than to whichever response arrives last.

use crate::airfoil::AirfoilReply;
use crate::error::{ApiError, ValidationError};
use crate::point::Point;
use crate::reynolds::ReynoldsReply;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Status shown while an airfoil request is in flight.
pub const CONTACTING_API: &str = "Contacting API…";

const AIRFOIL_FALLBACK: &str = "Request failed";
const REYNOLDS_FALLBACK: &str = "Request failed.";

/// The kinds of request a page can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Airfoil,
    Reynolds,
}

/// Identifies one started request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    action: Action,
    generation: u64,
}

/// What became of a finished airfoil request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AirfoilOutcome {
    /// New points are stored and should be drawn.
    Generated,
    /// The request failed; `alert` is the blocking message for the user.
    Failed { alert: String },
    /// A newer request has started since; nothing changed.
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Points of the last successful generation.
    pub last_points: Vec<Point>,
    /// Airfoil status line.
    pub status: String,
    /// Reynolds output line.
    pub reynolds_output: String,
    airfoil_generation: u64,
    reynolds_generation: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    fn generation(&mut self, action: Action) -> &mut u64 {
        match action {
            Action::Airfoil => &mut self.airfoil_generation,
            Action::Reynolds => &mut self.reynolds_generation,
        }
    }

    /// Start a request for `action`, superseding any in flight.
    pub fn begin(&mut self, action: Action) -> Ticket {
        let generation = self.generation(action);
        *generation += 1;
        let ticket = Ticket {
            action,
            generation: *generation,
        };
        if action == Action::Airfoil {
            self.status = CONTACTING_API.to_owned();
        }
        ticket
    }

    /// Whether `ticket` belongs to the latest request of its action.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        let generation = match ticket.action {
            Action::Airfoil => self.airfoil_generation,
            Action::Reynolds => self.reynolds_generation,
        };
        ticket.generation == generation
    }

    /// Report a rejected airfoil form.
    pub fn reject_airfoil(&mut self, err: &ValidationError) {
        self.status = err.to_string();
    }

    /// Report a rejected Reynolds form.
    pub fn reject_reynolds(&mut self, err: &ValidationError) {
        self.reynolds_output = err.to_string();
    }

    /// Apply the result of an airfoil request.
    pub fn finish_airfoil(
        &mut self,
        ticket: Ticket,
        result: Result<AirfoilReply, ApiError>,
    ) -> AirfoilOutcome {
        if !self.is_current(ticket) {
            return AirfoilOutcome::Stale;
        }
        match result {
            Ok(reply) => {
                self.last_points = reply.points;
                self.status = format!("OK • points: {}", self.last_points.len());
                AirfoilOutcome::Generated
            }
            Err(err) => {
                self.status = err.user_message(AIRFOIL_FALLBACK);
                AirfoilOutcome::Failed {
                    alert: format!("Airfoil generation failed: {}", self.status),
                }
            }
        }
    }

    /// Apply the result of a Reynolds request. Returns `false` if it was stale.
    pub fn finish_reynolds(
        &mut self,
        ticket: Ticket,
        result: Result<ReynoldsReply, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.reynolds_output = match result {
            Ok(reply) => reply.output_text(),
            Err(err) => err.user_message(REYNOLDS_FALLBACK),
        };
        true
    }
}
