//! Bridge to the page-level `Plotly` global.
//!
//! Outside the browser every call is a no-op so components stay renderable
//! under server-side rendering in tests.

use salescast_core::FigureSpec;

#[derive(Debug, thiserror::Error)]
pub enum PlotlyError {
    #[error("Plotly is not loaded on this page")]
    Missing,
    #[error("figure could not be converted: {0}")]
    Convert(String),
    #[error("Plotly.react failed: {0}")]
    Call(String),
}

/// Figure as JSON text, used for the `data-figure` attribute.
#[must_use]
pub fn figure_json(figure: &FigureSpec) -> String {
    serde_json::to_string(figure).unwrap_or_default()
}

/// Draw or redraw `figure` into the element with id `element_id`.
///
/// # Errors
///
/// Returns an error if the Plotly global is absent or rejects the figure.
#[cfg(target_arch = "wasm32")]
pub fn render_figure(element_id: &str, figure: &FigureSpec) -> Result<(), PlotlyError> {
    use serde::Serialize;
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or(PlotlyError::Missing)?;
    let plotly = js_sys::Reflect::get(&window, &"Plotly".into())
        .ok()
        .filter(|value| !value.is_undefined())
        .ok_or(PlotlyError::Missing)?;
    let react = js_sys::Reflect::get(&plotly, &"react".into())
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        .ok_or(PlotlyError::Missing)?;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let data = figure
        .data
        .serialize(&serializer)
        .map_err(|err| PlotlyError::Convert(err.to_string()))?;
    let layout = figure
        .layout
        .serialize(&serializer)
        .map_err(|err| PlotlyError::Convert(err.to_string()))?;

    let args = js_sys::Array::of3(&JsValue::from_str(element_id), &data, &layout);
    js_sys::Reflect::apply(&react, &plotly, &args)
        .map(|_| ())
        .map_err(|err| PlotlyError::Call(format!("{err:?}")))
}

/// # Errors
///
/// Never fails off the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_figure(element_id: &str, figure: &FigureSpec) -> Result<(), PlotlyError> {
    log::debug!(
        "skipping Plotly render of {} trace(s) into #{element_id}",
        figure.data.len()
    );
    Ok(())
}
