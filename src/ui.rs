//! Browser glue.
//!
//! Finds the page elements by id, implements the form and view seams over the
//! live document, and wires the click and change listeners. The airfoil and
//! Reynolds sections attach independently, so a page may carry either one.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::airfoil::AirfoilRequest;
use crate::api::{ApiClient, FetchTransport};
use crate::controller::{self, AirfoilView, DownloadView, ReynoldsView};
use crate::download;
use crate::error::ValidationError;
use crate::form::{self, FormSource};
use crate::point::Point;
use crate::render;
use crate::reynolds::ReynoldsMode;
use crate::state::UiState;

/// Element ids of everything other than the form fields.
pub mod ids {
    pub const FOIL_SVG: &str = "foil_svg";
    pub const STATUS: &str = "status";
    pub const BTN_NACA4: &str = "btn_naca4";
    pub const BTN_NACA5: &str = "btn_naca5";
    pub const BTN_NACA6: &str = "btn_naca6";
    pub const BTN_DOWNLOAD: &str = "btn_download";

    pub const BTN_RE: &str = "btn_re";
    pub const RE_OUT: &str = "re_out";
    pub const NU_BLOCK: &str = "nu_block";
    pub const RHOMU_BLOCK: &str = "rhomu_block";
}

const MODE_RADIO_SELECTOR: &str = r#"input[name="mode"]"#;

type Client = ApiClient<FetchTransport>;
type AirfoilReader = fn(&DocumentForm) -> Result<AirfoilRequest, ValidationError>;

pub fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("should have window"))
}

fn required(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("should have element #{id}")))
}

/// Register `handler` for `event` for the lifetime of the page.
fn listen<F: FnMut() + 'static>(
    target: &EventTarget,
    event: &str,
    mut handler: F,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |_: web_sys::Event| handler());
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn show_alert(message: &str) {
    if let Err(err) = window().and_then(|window| window.alert_with_message(message)) {
        log::error!("failed to show alert: {err:?}");
    }
}

/// Form fields read straight from the document.
#[derive(Clone)]
pub struct DocumentForm {
    document: Document,
}

impl FormSource for DocumentForm {
    fn value(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
    }

    fn checked(&self, id: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked())
    }

    fn checked_mode(&self) -> Option<String> {
        mode_radios(&self.document)
            .into_iter()
            .find(HtmlInputElement::checked)
            .map(|radio| radio.value())
    }
}

fn mode_radios(document: &Document) -> Vec<HtmlInputElement> {
    let nodes = match document.query_selector_all(MODE_RADIO_SELECTOR) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::error!("failed to find mode radios: {err:?}");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

/// Elements of the airfoil section.
struct AirfoilPage {
    document: Document,
    svg: Option<Element>,
    status: Option<Element>,
}

impl AirfoilView for AirfoilPage {
    fn show_status(&self, status: &str) {
        if let Some(element) = &self.status {
            element.set_text_content(Some(status));
        }
    }

    fn draw(&self, points: &[Point]) {
        if let Err(err) = render::draw_airfoil(points, self.svg.as_ref()) {
            log::error!("failed to draw airfoil: {err:?}");
        }
    }

    fn alert(&self, message: &str) {
        show_alert(message);
    }
}

impl DownloadView for AirfoilPage {
    fn alert(&self, message: &str) {
        show_alert(message);
    }

    fn save(&self, contents: &str) {
        if let Err(err) = download::trigger_download(&self.document, contents) {
            log::error!("failed to download {}: {err:?}", download::FILENAME);
        }
    }
}

/// Wire the airfoil buttons. Returns `false` if the page has none.
pub fn attach_airfoil(
    document: &Document,
    client: Rc<Client>,
    state: Rc<RefCell<UiState>>,
) -> Result<bool, JsValue> {
    let [naca4, naca5, naca6, download_button] = [
        ids::BTN_NACA4,
        ids::BTN_NACA5,
        ids::BTN_NACA6,
        ids::BTN_DOWNLOAD,
    ]
    .map(|id| document.get_element_by_id(id));
    if naca4.is_none() && naca5.is_none() && naca6.is_none() && download_button.is_none() {
        return Ok(false);
    }

    let svg = document.get_element_by_id(ids::FOIL_SVG);
    if svg.is_none() {
        log::warn!("SVG not found (id=foil_svg).");
    }
    let page = Rc::new(AirfoilPage {
        document: document.clone(),
        svg,
        status: document.get_element_by_id(ids::STATUS),
    });
    let fields = DocumentForm {
        document: document.clone(),
    };

    let readers: [(Option<Element>, AirfoilReader); 3] = [
        (naca4, form::read_naca4::<DocumentForm>),
        (naca5, |fields| Ok(form::read_naca5(fields))),
        (naca6, |fields| Ok(form::read_naca6(fields))),
    ];
    for (button, read) in readers {
        let Some(button) = button else {
            continue;
        };
        let (page, fields, client, state) =
            (page.clone(), fields.clone(), client.clone(), state.clone());
        listen(&button, "click", move || {
            let request = read(&fields);
            let (page, client, state) = (page.clone(), client.clone(), state.clone());
            wasm_bindgen_futures::spawn_local(async move {
                controller::submit_airfoil(&*client, &*state, &*page, request).await;
            });
        })?;
    }

    if let Some(button) = download_button {
        listen(&button, "click", move || {
            controller::download_last(&*state, &*page);
        })?;
    }
    Ok(true)
}

/// Elements of the Reynolds section.
struct ReynoldsPage {
    output: Element,
    kinematic_group: HtmlElement,
    dynamic_group: HtmlElement,
}

impl ReynoldsPage {
    fn show_mode(&self, mode: ReynoldsMode) {
        let groups = mode.groups();
        set_visible(&self.kinematic_group, groups.kinematic);
        set_visible(&self.dynamic_group, groups.dynamic);
    }
}

impl ReynoldsView for ReynoldsPage {
    fn show_output(&self, text: &str) {
        self.output.set_text_content(Some(text));
    }
}

fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "" } else { "none" };
    if let Err(err) = element.style().set_property("display", display) {
        log::error!("failed to set display of #{}: {err:?}", element.id());
    }
}

/// Wire the Reynolds calculator. Returns `false` if the page has none.
pub fn attach_reynolds(
    document: &Document,
    client: Rc<Client>,
    state: Rc<RefCell<UiState>>,
) -> Result<bool, JsValue> {
    let Some(button) = document.get_element_by_id(ids::BTN_RE) else {
        return Ok(false);
    };

    let page = Rc::new(ReynoldsPage {
        output: required(document, ids::RE_OUT)?,
        kinematic_group: required(document, ids::NU_BLOCK)?.dyn_into::<HtmlElement>()?,
        dynamic_group: required(document, ids::RHOMU_BLOCK)?.dyn_into::<HtmlElement>()?,
    });
    let fields = DocumentForm {
        document: document.clone(),
    };

    page.show_mode(form::read_mode(&fields));
    for radio in mode_radios(document) {
        let (page, fields) = (page.clone(), fields.clone());
        listen(&radio, "change", move || {
            page.show_mode(form::read_mode(&fields));
        })?;
    }

    listen(&button, "click", move || {
        let request = form::read_reynolds(&fields);
        let (page, client, state) = (page.clone(), client.clone(), state.clone());
        wasm_bindgen_futures::spawn_local(async move {
            controller::submit_reynolds(&*client, &*state, &*page, request).await;
        });
    })?;
    Ok(true)
}
