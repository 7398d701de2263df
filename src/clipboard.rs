use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// `navigator.clipboard` is undefined outside secure contexts; calling through
// the binding would throw, so check first.
fn clipboard_available(navigator: &web::Navigator) -> bool {
    js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

pub async fn write_text(text: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let navigator = window.navigator();
    if !clipboard_available(&navigator) {
        anyhow::bail!("clipboard API unavailable");
    }
    let promise = navigator.clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("clipboard write rejected: {:?}", e))?;
    Ok(())
}
