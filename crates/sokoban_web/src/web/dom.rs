use wasm_bindgen::JsCast;

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

pub(super) fn document() -> Result<web_sys::Document, String> {
    window()?
        .document()
        .ok_or_else(|| "no document".to_string())
}

pub(super) fn get_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, String> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("canvas #{id} is missing"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("#{id} is not a canvas"))
}

pub(super) fn create_canvas(width: u32, height: u32) -> Result<web_sys::HtmlCanvasElement, String> {
    let canvas = document()?
        .create_element("canvas")
        .map_err(|_| "failed to create canvas".to_string())?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "created element is not a canvas".to_string())?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

/// `performance.now()` in milliseconds, or 0 when unavailable.
pub(super) fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
