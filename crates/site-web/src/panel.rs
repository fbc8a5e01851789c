//! DOM rendition of the debug panel: a collapsible box pinned to the bottom
//! right of the page with one slider per numeric uniform and one colour
//! picker per colour uniform.

use crate::dom;
use site_core::panel::{ColorControl, DebugPanel, UniformControl};
use site_core::SceneGraph;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;right:10px;bottom:10px;z-index:1000;\
background:rgba(20,20,24,0.9);color:#ddd;font:11px sans-serif;";
const ROW_STYLE: &str = "display:flex;align-items:center;gap:6px;padding:2px 6px;";
const LABEL_STYLE: &str = "flex:0 0 140px;overflow:hidden;text-overflow:ellipsis;";

fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {e:?}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{tag}> has unexpected type"))
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {e:?}"))
}

fn label_row(document: &web::Document, name: &str) -> anyhow::Result<web::HtmlElement> {
    let row: web::HtmlElement = create(document, "div")?;
    let _ = row.set_attribute("style", ROW_STYLE);
    let label: web::HtmlElement = create(document, "span")?;
    let _ = label.set_attribute("style", LABEL_STYLE);
    label.set_text_content(Some(name));
    append(&row, &label)?;
    Ok(row)
}

fn slider_row(
    document: &web::Document,
    control: UniformControl,
    scene: &Rc<RefCell<SceneGraph>>,
) -> anyhow::Result<web::HtmlElement> {
    let row = label_row(document, control.name())?;
    let range = control.range();
    let input: web::HtmlInputElement = create(document, "input")?;
    input.set_type("range");
    input.set_name(control.name());
    input.set_min(&range.min.to_string());
    input.set_max(&range.max.to_string());
    input.set_step(&range.step.to_string());
    let current = control.read(&scene.borrow().water.uniforms);
    input.set_value(&current.to_string());
    let readout: web::HtmlElement = create(document, "span")?;
    readout.set_text_content(Some(&format!("{current:.3}")));

    append(&row, &input)?;
    append(&row, &readout)?;
    Ok(row)
}

/// One delegated listener for every slider: the input's `name` is the
/// uniform it drives and the following sibling is its readout.
fn wire_sliders(
    rows: &web::HtmlElement,
    panel: Rc<RefCell<DebugPanel>>,
    scene: Rc<RefCell<SceneGraph>>,
) {
    dom::add_listener(rows.as_ref(), "input", move |ev: web::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        if input.type_() != "range" {
            return;
        }
        let raw = input.value_as_number() as f32;
        let result = panel.borrow().apply_named(
            &mut scene.borrow_mut().water.uniforms,
            &input.name(),
            raw,
        );
        match result {
            Ok(stored) => {
                if let Some(out) = input.next_element_sibling() {
                    out.set_text_content(Some(&format!("{stored:.3}")));
                }
            }
            Err(e) => log::warn!("[panel] {e}"),
        }
    });
}

fn color_row(
    document: &web::Document,
    control: ColorControl,
    panel: &Rc<RefCell<DebugPanel>>,
    scene: &Rc<RefCell<SceneGraph>>,
) -> anyhow::Result<web::HtmlElement> {
    let row = label_row(document, control.name())?;
    let input: web::HtmlInputElement = create(document, "input")?;
    input.set_type("color");
    input.set_value(&control.read(&scene.borrow().water.uniforms).to_hex());

    let panel = panel.clone();
    let scene = scene.clone();
    let source = input.clone();
    dom::add_listener(input.as_ref(), "input", move |_ev: web::Event| {
        let hex = source.value();
        let result =
            panel
                .borrow()
                .apply_color(&mut scene.borrow_mut().water.uniforms, control, &hex);
        if let Err(e) = result {
            log::warn!("[panel] {e}");
        }
    });

    append(&row, &input)?;
    Ok(row)
}

/// Builds the panel into `<body>`, collapsed.
pub fn mount(
    document: &web::Document,
    scene: Rc<RefCell<SceneGraph>>,
    width_px: u32,
) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let panel = Rc::new(RefCell::new(DebugPanel::new()));

    let root: web::HtmlElement = create(document, "div")?;
    let _ = root.set_attribute("style", &format!("{PANEL_STYLE}width:{width_px}px;"));
    let _ = root.set_attribute("data-panel", "water");

    let title: web::HtmlElement = create(document, "div")?;
    let _ = title.set_attribute("style", "padding:4px 6px;cursor:pointer;user-select:none;");
    title.set_text_content(Some("Water"));
    append(&root, &title)?;

    let rows: web::HtmlElement = create(document, "div")?;
    for control in panel.borrow().controls() {
        append(&rows, &slider_row(document, *control, &scene)?)?;
    }
    for control in panel.borrow().color_controls() {
        append(&rows, &color_row(document, *control, &panel, &scene)?)?;
    }
    wire_sliders(&rows, panel.clone(), scene.clone());
    dom::set_style(&rows, "display", "none");
    append(&root, &rows)?;

    {
        let panel = panel.clone();
        dom::add_listener(title.as_ref(), "click", move |_ev: web::Event| {
            let collapsed = panel.borrow_mut().toggle();
            dom::set_style(&rows, "display", if collapsed { "none" } else { "block" });
        });
    }

    append(&body, &root)?;
    log::info!(
        "[panel] mounted controls={} colors={} collapsed={}",
        panel.borrow().controls().len(),
        panel.borrow().color_controls().len(),
        panel.borrow().is_collapsed()
    );
    Ok(())
}
