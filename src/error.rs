//! Error types shared by the form, the API client and the download action.
//!
//! Every error here ends up as text in front of the user, so `Display` is the
//! user-facing message.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A form input rejected before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A NACA 4-digit field is out of range or not a number.
    #[error("Please enter valid numeric inputs.")]
    Naca4,
    /// Velocity or chord is not positive.
    #[error("Please enter positive values for V and c.")]
    VelocityOrChord,
    /// Kinematic viscosity is not positive.
    #[error("Please enter a positive kinematic viscosity ν.")]
    KinematicViscosity,
    /// Density or dynamic viscosity is not positive.
    #[error("Please enter positive values for ρ and μ.")]
    DensityOrDynamicViscosity,
}

/// A failed exchange with the API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request could not be built.
    #[error("{0}")]
    Request(String),
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },
    /// A 2xx airfoil response without any points.
    #[error("API returned no points.")]
    NoPoints,
}

impl ApiError {
    /// Message for the user: the server `detail` if there is one, then the
    /// error text, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            Self::Status {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            other => other.to_string(),
        };
        if message.is_empty() {
            fallback.to_owned()
        } else {
            message
        }
    }
}

/// The download action was triggered before anything was generated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Generate an airfoil first.")]
pub struct NothingToDownload;
