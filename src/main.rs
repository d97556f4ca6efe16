mod content;
mod state;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod serve;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    serve::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
