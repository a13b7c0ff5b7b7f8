//! Airfoil generation requests and replies.
//!
//! Three [NACA airfoil](https://en.wikipedia.org/wiki/NACA_airfoil) families
//! are generated remotely. Only the 4-digit family is checked before sending.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ValidationError};
use crate::point::Point;

#[cfg(test)]
#[path = "airfoil_test.rs"]
mod airfoil_test;

/// Point count the form always asks for with a 6-series airfoil.
pub const NACA6_POINT_COUNT: u32 = 200;

/// Smallest point count a 4-digit request may ask for (exclusive).
const NACA4_MIN_POINT_COUNT: i64 = 10;

/// Parameters of a 4-digit NACA airfoil.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Naca4 {
    /// Maximum camber (fraction of chord).
    pub m: f64,
    /// Location of maximum camber (fraction of chord).
    pub p: f64,
    /// Maximum thickness (fraction of chord).
    pub t: f64,
    /// Number of points per surface.
    pub n: Option<i64>,
    /// Whether the trailing edge is closed.
    pub closed_te: bool,
}

impl Naca4 {
    /// Check the ranges the server cannot work without.
    ///
    /// NaN fails every comparison, so unparsed fields are rejected too.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let n_ok = self.n.is_some_and(|n| n > NACA4_MIN_POINT_COUNT);
        if n_ok && self.t > 0.0 && self.p >= 0.0 && self.m >= 0.0 {
            Ok(())
        } else {
            Err(ValidationError::Naca4)
        }
    }
}

/// Parameters of a 5-digit NACA airfoil with a standard mean line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Naca5 {
    /// Location of maximum camber, one of 0.05, 0.10, 0.15, 0.20 or 0.25.
    pub p_pos: f64,
    /// Maximum thickness (fraction of chord).
    pub t: f64,
    /// Number of points per surface.
    pub n: Option<i64>,
    /// Whether the trailing edge is closed.
    pub closed_te: bool,
}

/// Parameters of a symmetric 6-series NACA airfoil.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Naca6 {
    /// Family designation, e.g. `63A`.
    pub family: String,
    /// Maximum thickness (fraction of chord).
    pub t: f64,
    /// Number of points.
    pub n: u32,
}

/// A request for airfoil coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AirfoilRequest {
    Naca4(Naca4),
    Naca5(Naca5),
    Naca6(Naca6),
}

impl AirfoilRequest {
    /// Endpoint path relative to the API base.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Naca4(_) => "/api/airfoil/naca4",
            Self::Naca5(_) => "/api/airfoil/naca5",
            Self::Naca6(_) => "/api/airfoil/naca6",
        }
    }

    /// Short family name for log lines.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Naca4(_) => "NACA 4-digit",
            Self::Naca5(_) => "NACA 5-digit",
            Self::Naca6(_) => "NACA 6-series",
        }
    }
}

/// Body of a successful airfoil response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AirfoilReply {
    /// Content hash of the coordinates.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl AirfoilReply {
    /// Parse a 2xx response body. Anything without points is a failure.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        match serde_json::from_str::<Self>(body) {
            Ok(reply) if !reply.points.is_empty() => Ok(reply),
            Ok(_) | Err(_) => Err(ApiError::NoPoints),
        }
    }
}
