use crate::features::FeatureStore;
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and parse the points file.
pub async fn fetch_points(url: &str) -> anyhow::Result<FeatureStore> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        anyhow::bail!("GET {} -> {} {}", url, resp.status(), resp.status_text());
    }
    let body = resp.text().await?;
    Ok(FeatureStore::from_geojson_str(&body)?)
}

/// Load an image and wait until it has decoded (or failed).
pub async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let image = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let img = image.clone();
    let src = url.to_string();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            _ = reject.call0(&wasm_bindgen::JsValue::NULL);
        });
        img.set_onload(Some(onload.unchecked_ref()));
        img.set_onerror(Some(onerror.unchecked_ref()));
        img.set_src(&src);
    });
    JsFuture::from(promise)
        .await
        .map_err(|_| anyhow::anyhow!("failed to load image {}", url))?;
    image.set_onload(None);
    image.set_onerror(None);
    Ok(image)
}
