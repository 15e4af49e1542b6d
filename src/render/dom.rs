//! Live DOM backend (wasm32 only).

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::{ClickAction, Node, RenderBackend};
use crate::error::{describe_js, Result, WidgetError};

/// Callback receiving element clicks
pub type ClickHandler = Rc<dyn Fn(&ClickAction)>;

/// Renders the board into a host element, replacing its children on every
/// mount. Click closures live as long as the elements they are attached to.
pub struct DomBackend {
    document: Document,
    root: HtmlElement,
    on_click: ClickHandler,
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

fn dom_err(context: &str, value: &wasm_bindgen::JsValue) -> WidgetError {
    WidgetError::Render(format!("{context}: {}", describe_js(value)))
}

impl DomBackend {
    pub fn new(root: HtmlElement, on_click: ClickHandler) -> Result<Self> {
        let document = root
            .owner_document()
            .ok_or_else(|| WidgetError::Render("root element has no document".to_string()))?;
        Ok(Self {
            document,
            root,
            on_click,
            closures: Vec::new(),
        })
    }

    fn build(&mut self, node: &Node) -> Result<Element> {
        let element = self
            .document
            .create_element(node.tag)
            .map_err(|e| dom_err("createElement", &e))?;
        if let Some(class) = &node.class {
            element.set_class_name(class);
        }
        if !node.style.is_empty() {
            element
                .set_attribute("style", &node.style_text())
                .map_err(|e| dom_err("style", &e))?;
        }
        for (name, value) in &node.attrs {
            element
                .set_attribute(name, value)
                .map_err(|e| dom_err("setAttribute", &e))?;
        }
        if let Some(text) = &node.text {
            element.set_text_content(Some(text));
        }
        for child in &node.children {
            let child = self.build(child)?;
            element
                .append_child(&child)
                .map_err(|e| dom_err("appendChild", &e))?;
        }
        if let Some(action) = &node.on_click {
            self.attach_click(&element, action.clone())?;
        }
        Ok(element)
    }

    fn attach_click(&mut self, element: &Element, action: ClickAction) -> Result<()> {
        let handler = Rc::clone(&self.on_click);
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            // Menu rows sit inside the tile; don't let a row click bubble.
            event.stop_propagation();
            handler(&action);
        }) as Box<dyn FnMut(MouseEvent)>);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| dom_err("addEventListener", &e))?;
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("cursor", "pointer");
        }
        self.closures.push(closure);
        Ok(())
    }
}

impl RenderBackend for DomBackend {
    fn mount(&mut self, root: &Node) -> Result<()> {
        self.root.set_inner_html("");
        self.closures.clear();
        let element = self.build(root)?;
        self.root
            .append_child(&element)
            .map_err(|e| dom_err("appendChild", &e))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dom"
    }
}
