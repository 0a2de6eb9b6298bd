// The native build exists for `cargo test` over the target-independent core;
// only the wasm32 build renders anything.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod api;
mod config;
mod contact;
mod effects;
mod models;
mod rotation;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod pages;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    app::run();
}
