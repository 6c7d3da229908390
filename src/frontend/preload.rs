use std::rc::Rc;

use futures_util::future::join_all;
use gloo_net::http::Request;
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Event, HtmlImageElement};

use crate::preload::{request_order, Asset, AssetKind};

/// Starts every request in priority order and reports each one as it
/// settles, with `true` when it loaded.
pub fn spawn<F>(manifest: &'static [Asset], on_settled: F)
where
    F: Fn(Asset, bool) + 'static,
{
    let on_settled = Rc::new(on_settled);

    spawn_local(async move {
        let requests = request_order(manifest).into_iter().map(|asset| {
            let on_settled = on_settled.clone();
            async move {
                let loaded = fetch_asset(asset).await;
                on_settled(asset, loaded);
            }
        });

        join_all(requests).await;
    });
}

async fn fetch_asset(asset: Asset) -> bool {
    match asset.kind {
        AssetKind::Image => load_image(asset.url).await,
        AssetKind::Page => Request::get(asset.url)
            .send()
            .await
            .map(|response| response.ok())
            .unwrap_or(false),
    }
}

/// Resolves on `load` and on `error` alike.
pub(super) async fn load_image(url: &str) -> bool {
    let Ok(image) = HtmlImageElement::new() else {
        return false;
    };

    let promise = Promise::new(&mut |resolve, _reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&resolve));
    });
    image.set_src(url);

    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|value| value.dyn_into::<Event>().ok())
        .map(|event| event.type_() == "load")
        .unwrap_or(false)
}
