pub mod airfoil;
pub mod api;
pub mod config;
pub mod controller;
pub mod decimal;
pub mod download;
pub mod error;
pub mod form;
pub mod point;
pub mod render;
pub mod reynolds;
pub mod state;
pub mod ui;

use api::{ApiClient, FetchTransport};
use config::Config;
use state::UiState;

use wasm_bindgen::prelude::*;

use std::cell::RefCell;
use std::rc::Rc;

/// Entry point of the application.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = ui::window()?;
    let config = Config::from_window(&window);
    if console_log::init_with_level(config.log_level).is_err() {
        log::debug!("logger already initialised");
    }
    log::debug!("using API at {}", config.api_base);

    let document = window.document().ok_or("should have document")?;
    let client = Rc::new(ApiClient::new(config, FetchTransport));
    let state = Rc::new(RefCell::new(UiState::new()));

    let airfoil = ui::attach_airfoil(&document, client.clone(), state.clone())?;
    let reynolds = ui::attach_reynolds(&document, client, state)?;
    if !airfoil && !reynolds {
        log::warn!("no airfoil or Reynolds controls found on the page");
    }

    Ok(())
}
