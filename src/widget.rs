//! WASM entry point: `TileWidget` mounts the board into a page element and
//! binds it to the host API found on `window.grist`.
//!
//! ```javascript
//! import init, { TileWidget } from 'tileboard';
//! await init();
//! const widget = TileWidget.mount(document.getElementById('root'), { layout: { kind: 'grid' } });
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use tracing::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::binding::{ColumnMappings, HostBinding};
use crate::config::WidgetConfig;
use crate::error::{describe_js, Result, WidgetError};
use crate::logging;
use crate::navigation::{Navigator, TopWindow};
use crate::render::{ClickAction, DomBackend};
use crate::types::SourceRecord;

/// Name of the host API global
const HOST_GLOBAL: &str = "grist";

struct SharedState {
    binding: HostBinding,
    backend: DomBackend,
}

impl SharedState {
    fn render(&mut self) {
        let Self { binding, backend } = self;
        binding.render_into(backend);
    }
}

#[wasm_bindgen]
pub struct TileWidget {
    state: Rc<RefCell<SharedState>>,
    _on_records: Option<Closure<dyn FnMut(JsValue, JsValue)>>,
}

fn host_api() -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(window.as_ref(), &JsValue::from_str(HOST_GLOBAL))
        .ok()
        .filter(JsValue::is_object)
}

fn host_method(api: &JsValue, name: &str) -> Result<Function> {
    Reflect::get(api, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| WidgetError::Init(format!("host API has no {name}()")))
}

fn call_ready(api: &JsValue, binding: &HostBinding) -> Result<()> {
    let request = serde_wasm_bindgen::to_value(&binding.ready_request())
        .map_err(|e| WidgetError::Init(e.to_string()))?;
    host_method(api, "ready")?
        .call1(api, &request)
        .map_err(|e| WidgetError::Init(describe_js(&e)))?;
    Ok(())
}

type Batch = (Vec<SourceRecord>, Option<ColumnMappings>);

fn decode_batch(records: JsValue, mappings: JsValue) -> Result<Batch> {
    let records: Vec<SourceRecord> = if records.is_undefined() || records.is_null() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(records)
            .map_err(|e| WidgetError::Render(e.to_string()))?
    };
    let mappings = if mappings.is_object() {
        serde_wasm_bindgen::from_value(mappings).ok()
    } else {
        None
    };
    Ok((records, mappings))
}

#[wasm_bindgen]
impl TileWidget {
    /// Mount the widget into `root` and connect to the host.
    ///
    /// A missing host API or a failed handshake is shown as status text in
    /// `root`; only an unusable config or page is reported as an error.
    pub fn mount(root: HtmlElement, config: JsValue) -> std::result::Result<TileWidget, JsValue> {
        console_error_panic_hook::set_once();

        let config = WidgetConfig::from_js(config)?;
        logging::init(config.level()?);

        let navigator = Rc::new(Navigator::new(TopWindow::new()?));
        let on_click = Rc::new(move |action: &ClickAction| match action {
            ClickAction::Navigate(target) => {
                navigator.navigate(target);
            }
        });
        let backend = DomBackend::new(root, on_click)?;
        let state = Rc::new(RefCell::new(SharedState {
            binding: HostBinding::new(config),
            backend,
        }));

        let Some(api) = host_api() else {
            let mut s = state.borrow_mut();
            s.binding.host_missing();
            s.render();
            drop(s);
            return Ok(TileWidget {
                state,
                _on_records: None,
            });
        };

        let ready = call_ready(&api, &state.borrow().binding);
        let handshake_ok = ready.is_ok();
        state.borrow_mut().binding.on_ready_result(ready);
        state.borrow_mut().render();
        if !handshake_ok {
            return Ok(TileWidget {
                state,
                _on_records: None,
            });
        }

        let records_state = Rc::clone(&state);
        let on_records = Closure::wrap(Box::new(move |records: JsValue, mappings: JsValue| {
            let mut s = records_state.borrow_mut();
            match decode_batch(records, mappings) {
                Ok((records, mappings)) => {
                    s.binding.on_records(&records, mappings.as_ref());
                    s.render();
                }
                Err(e) => error!(error = %e, "dropping undecodable record batch"),
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        let subscribed = host_method(&api, "onRecords").and_then(|f| {
            f.call1(&api, on_records.as_ref())
                .map(|_| ())
                .map_err(|e| WidgetError::Init(describe_js(&e)))
        });
        if subscribed.is_err() {
            let mut s = state.borrow_mut();
            s.binding.on_subscribe_result(subscribed);
            s.render();
            drop(s);
            return Ok(TileWidget {
                state,
                _on_records: None,
            });
        }
        info!("subscribed to host records");

        Ok(TileWidget {
            state,
            _on_records: Some(on_records),
        })
    }

    /// Current status text, empty while tiles are shown
    pub fn status(&self) -> String {
        self.state
            .borrow()
            .binding
            .status()
            .message()
            .unwrap_or_default()
    }

    /// Number of tiles in the latest batch
    pub fn tile_count(&self) -> usize {
        self.state.borrow().binding.tiles().len()
    }

    /// Tiles of the latest batch as plain JS objects
    pub fn tiles(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.state.borrow().binding.tiles())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
