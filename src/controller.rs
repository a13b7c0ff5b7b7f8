//! Request flows behind the buttons, without any DOM access.
//!
//! Each flow takes the already-read form result, updates the shared
//! [`UiState`] and pushes what changed to a view. The state is never borrowed
//! across an `.await`.

use std::cell::RefCell;

use crate::airfoil::AirfoilRequest;
use crate::api::{ApiClient, Transport};
use crate::download;
use crate::error::ValidationError;
use crate::point::Point;
use crate::reynolds::ReynoldsRequest;
use crate::state::{Action, AirfoilOutcome, UiState};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Where the airfoil flow shows its results.
pub trait AirfoilView {
    fn show_status(&self, status: &str);
    fn draw(&self, points: &[Point]);
    /// Blocking message for the user.
    fn alert(&self, message: &str);
}

/// Where the Reynolds flow shows its results.
pub trait ReynoldsView {
    fn show_output(&self, text: &str);
}

/// Where the download action delivers its file.
pub trait DownloadView {
    fn alert(&self, message: &str);
    fn save(&self, contents: &str);
}

/// Run an airfoil request if the form was valid.
///
/// Returns `None` when the form was rejected and nothing was sent.
pub async fn submit_airfoil<T: Transport, V: AirfoilView>(
    client: &ApiClient<T>,
    state: &RefCell<UiState>,
    view: &V,
    request: Result<AirfoilRequest, ValidationError>,
) -> Option<AirfoilOutcome> {
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            state.borrow_mut().reject_airfoil(&err);
            show_status(state, view);
            return None;
        }
    };

    let ticket = state.borrow_mut().begin(Action::Airfoil);
    log::debug!("requesting {} airfoil", request.family());
    show_status(state, view);

    let result = client.generate_airfoil(&request).await;
    match &result {
        Ok(reply) => log::debug!(
            "received {} points (id {})",
            reply.points.len(),
            reply.id.as_deref().unwrap_or("-")
        ),
        Err(err) => log::error!("Airfoil API error: {err}"),
    }

    let outcome = state.borrow_mut().finish_airfoil(ticket, result);
    match &outcome {
        AirfoilOutcome::Generated => {
            let points = state.borrow().last_points.clone();
            view.draw(&points);
            show_status(state, view);
        }
        AirfoilOutcome::Failed { alert } => {
            show_status(state, view);
            view.alert(alert);
        }
        AirfoilOutcome::Stale => log::debug!("dropped stale airfoil response"),
    }
    Some(outcome)
}

fn show_status<V: AirfoilView>(state: &RefCell<UiState>, view: &V) {
    let status = state.borrow().status.clone();
    log::info!("{status}");
    view.show_status(&status);
}

/// Run a Reynolds request if the form was valid.
///
/// Returns `true` if the output text changed.
pub async fn submit_reynolds<T: Transport, V: ReynoldsView>(
    client: &ApiClient<T>,
    state: &RefCell<UiState>,
    view: &V,
    request: Result<ReynoldsRequest, ValidationError>,
) -> bool {
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            state.borrow_mut().reject_reynolds(&err);
            view.show_output(&state.borrow().reynolds_output);
            return true;
        }
    };

    let ticket = state.borrow_mut().begin(Action::Reynolds);
    let result = client.compute_reynolds(&request).await;
    if let Err(err) = &result {
        log::error!("Reynolds API error: {err}");
    }

    let applied = state.borrow_mut().finish_reynolds(ticket, result);
    if applied {
        let output = state.borrow().reynolds_output.clone();
        view.show_output(&output);
    } else {
        log::debug!("dropped stale Reynolds response");
    }
    applied
}

/// Hand the last generated airfoil to the view as a `.dat` file.
pub fn download_last<V: DownloadView>(state: &RefCell<UiState>, view: &V) {
    let contents = download::dat_contents(&state.borrow().last_points);
    match contents {
        Ok(contents) => view.save(&contents),
        Err(err) => view.alert(&err.to_string()),
    }
}
