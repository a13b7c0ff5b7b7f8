use super::*;

fn reply(points: Vec<Point>) -> AirfoilReply {
    AirfoilReply { id: None, points }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_state_is_empty() {
    let state = UiState::new();
    assert!(state.last_points.is_empty());
    assert!(state.status.is_empty());
    assert!(state.reynolds_output.is_empty());
}

// =============================================================
// Airfoil
// =============================================================

#[test]
fn begin_airfoil_sets_contacting_status() {
    let mut state = UiState::new();
    let ticket = state.begin(Action::Airfoil);
    assert!(state.is_current(ticket));
    assert_eq!(state.status, "Contacting API…");
}

#[test]
fn successful_airfoil_stores_points() {
    let mut state = UiState::new();
    let ticket = state.begin(Action::Airfoil);
    let outcome = state.finish_airfoil(ticket, Ok(reply(vec![[0.0, 0.0], [1.0, 0.0]])));
    assert_eq!(outcome, AirfoilOutcome::Generated);
    assert_eq!(state.last_points, vec![[0.0, 0.0], [1.0, 0.0]]);
    assert_eq!(state.status, "OK • points: 2");
}

#[test]
fn failed_airfoil_keeps_previous_points() {
    let mut state = UiState::new();
    let first = state.begin(Action::Airfoil);
    state.finish_airfoil(first, Ok(reply(vec![[0.5, 0.1]])));

    let second = state.begin(Action::Airfoil);
    let outcome = state.finish_airfoil(second, Err(ApiError::NoPoints));
    assert_eq!(
        outcome,
        AirfoilOutcome::Failed {
            alert: "Airfoil generation failed: API returned no points.".to_owned()
        }
    );
    assert_eq!(state.status, "API returned no points.");
    assert_eq!(state.last_points, vec![[0.5, 0.1]]);
}

#[test]
fn failed_airfoil_prefers_detail() {
    let mut state = UiState::new();
    let ticket = state.begin(Action::Airfoil);
    state.finish_airfoil(
        ticket,
        Err(ApiError::Status {
            status: 400,
            detail: Some("Unsupported p".to_owned()),
        }),
    );
    assert_eq!(state.status, "Unsupported p");
}

#[test]
fn stale_airfoil_response_is_dropped() {
    let mut state = UiState::new();
    let slow = state.begin(Action::Airfoil);
    let fast = state.begin(Action::Airfoil);

    assert_eq!(
        state.finish_airfoil(fast, Ok(reply(vec![[1.0, 0.0]]))),
        AirfoilOutcome::Generated
    );
    assert_eq!(
        state.finish_airfoil(slow, Ok(reply(vec![[0.0, 0.0], [0.2, 0.2]]))),
        AirfoilOutcome::Stale
    );
    assert_eq!(state.last_points, vec![[1.0, 0.0]]);
    assert_eq!(state.status, "OK • points: 1");
}

#[test]
fn stale_airfoil_failure_raises_no_alert() {
    let mut state = UiState::new();
    let slow = state.begin(Action::Airfoil);
    state.begin(Action::Airfoil);
    assert_eq!(
        state.finish_airfoil(slow, Err(ApiError::NoPoints)),
        AirfoilOutcome::Stale
    );
    assert_eq!(state.status, "Contacting API…");
}

#[test]
fn rejected_airfoil_sets_status() {
    let mut state = UiState::new();
    state.reject_airfoil(&ValidationError::Naca4);
    assert_eq!(state.status, "Please enter valid numeric inputs.");
}

// =============================================================
// Reynolds
// =============================================================

#[test]
fn reynolds_does_not_touch_airfoil_status() {
    let mut state = UiState::new();
    state.begin(Action::Reynolds);
    assert!(state.status.is_empty());
}

#[test]
fn reynolds_value_is_written_to_output() {
    let mut state = UiState::new();
    let ticket = state.begin(Action::Reynolds);
    assert!(state.finish_reynolds(ticket, Ok(ReynoldsReply::Value(1_000_000.0))));
    assert_eq!(state.reynolds_output, "Re = 1,000,000");
}

#[test]
fn reynolds_transport_failure_is_written_to_output() {
    let mut state = UiState::new();
    let ticket = state.begin(Action::Reynolds);
    state.finish_reynolds(ticket, Err(ApiError::Network(String::new())));
    assert_eq!(state.reynolds_output, "Request failed.");
}

#[test]
fn stale_reynolds_response_is_dropped() {
    let mut state = UiState::new();
    let slow = state.begin(Action::Reynolds);
    let fast = state.begin(Action::Reynolds);
    assert!(state.finish_reynolds(fast, Ok(ReynoldsReply::Value(10.0))));
    assert!(!state.finish_reynolds(slow, Ok(ReynoldsReply::Value(20.0))));
    assert_eq!(state.reynolds_output, "Re = 10");
}

#[test]
fn actions_have_independent_generations() {
    let mut state = UiState::new();
    let airfoil = state.begin(Action::Airfoil);
    state.begin(Action::Reynolds);
    assert!(state.is_current(airfoil));
}

#[test]
fn rejected_reynolds_sets_output() {
    let mut state = UiState::new();
    state.reject_reynolds(&ValidationError::KinematicViscosity);
    assert_eq!(
        state.reynolds_output,
        "Please enter a positive kinematic viscosity ν."
    );
}
