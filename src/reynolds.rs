//! [Reynolds number](https://en.wikipedia.org/wiki/Reynolds_number) requests
//! and replies.

use serde::Serialize;
use serde_json::Value;

use crate::decimal::to_fixed;
use crate::error::ValidationError;

#[cfg(test)]
#[path = "reynolds_test.rs"]
mod reynolds_test;

/// Path of the Reynolds endpoint relative to the API base.
pub const PATH: &str = "/api/re/";

/// Radio value selecting kinematic viscosity.
const KINEMATIC_RADIO_VALUE: &str = "nu";

/// Which viscosity inputs are in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReynoldsMode {
    /// Kinematic viscosity `nu`.
    #[default]
    Kinematic,
    /// Density `rho` and dynamic viscosity `mu`.
    Dynamic,
}

impl ReynoldsMode {
    /// Mode for the checked radio value; nothing checked means kinematic.
    pub fn from_radio(value: Option<&str>) -> Self {
        match value {
            None | Some(KINEMATIC_RADIO_VALUE) => Self::Kinematic,
            Some(_) => Self::Dynamic,
        }
    }

    /// Visibility of the two input groups in this mode.
    pub fn groups(self) -> GroupVisibility {
        let kinematic = self == Self::Kinematic;
        GroupVisibility {
            kinematic,
            dynamic: !kinematic,
        }
    }
}

/// Which viscosity input groups are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupVisibility {
    pub kinematic: bool,
    pub dynamic: bool,
}

/// Fluid properties sent with a request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Viscosity {
    Kinematic { nu: f64 },
    Dynamic { rho: f64, mu: f64 },
}

/// Raw Reynolds form values after coercion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReynoldsInput {
    pub velocity: f64,
    pub chord: f64,
    pub nu: f64,
    pub rho: f64,
    pub mu: f64,
}

/// A request for a Reynolds number.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReynoldsRequest {
    /// Velocity (m/s).
    #[serde(rename = "V")]
    pub velocity: f64,
    /// Chord length (m).
    #[serde(rename = "c")]
    pub chord: f64,
    #[serde(flatten)]
    pub viscosity: Viscosity,
}

impl ReynoldsRequest {
    /// Validate the input for the active mode and build the request.
    pub fn new(input: &ReynoldsInput, mode: ReynoldsMode) -> Result<Self, ValidationError> {
        if !(input.velocity > 0.0) || !(input.chord > 0.0) {
            return Err(ValidationError::VelocityOrChord);
        }
        let viscosity = match mode {
            ReynoldsMode::Kinematic => {
                if !(input.nu > 0.0) {
                    return Err(ValidationError::KinematicViscosity);
                }
                Viscosity::Kinematic { nu: input.nu }
            }
            ReynoldsMode::Dynamic => {
                if !(input.rho > 0.0) || !(input.mu > 0.0) {
                    return Err(ValidationError::DensityOrDynamicViscosity);
                }
                Viscosity::Dynamic {
                    rho: input.rho,
                    mu: input.mu,
                }
            }
        };
        Ok(Self {
            velocity: input.velocity,
            chord: input.chord,
            viscosity,
        })
    }
}

/// What a 2xx Reynolds response turned out to hold.
#[derive(Clone, Debug, PartialEq)]
pub enum ReynoldsReply {
    Value(f64),
    ServerError(String),
    Unexpected,
}

impl ReynoldsReply {
    /// Interpret a 2xx response body.
    pub fn from_body(body: &str) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
            return Self::Unexpected;
        };
        if let Some(re) = fields.get("Re").and_then(Value::as_f64) {
            return Self::Value(re);
        }
        match fields.get("error") {
            Some(Value::String(error)) if !error.is_empty() => Self::ServerError(error.clone()),
            _ => Self::Unexpected,
        }
    }

    /// Text for the output element.
    pub fn output_text(&self) -> String {
        match self {
            Self::Value(re) => format!("Re = {}", format_grouped(*re)),
            Self::ServerError(error) => error.clone(),
            Self::Unexpected => "Unexpected response from server.".to_owned(),
        }
    }
}

/// Format a number the way an en-US locale would: comma thousands
/// separators, at most three fraction digits with halves rounded up, and the
/// sign kept on anything negative, zero included.
pub fn format_grouped(val: f64) -> String {
    if val.is_nan() {
        return "NaN".to_owned();
    }
    if val.is_infinite() {
        let infinity = if val < 0.0 { "-∞" } else { "∞" };
        return infinity.to_owned();
    }

    let fixed = to_fixed(val.abs(), 3);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if val.is_sign_negative() { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}
