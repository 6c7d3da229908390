#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod counter;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod entrance;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod loader;
mod logging;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod motion;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod particles;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod preload;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod transform;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod typer;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
