fn main() {
    #[cfg(target_arch = "wasm32")]
    finance_tracker::ui::start();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("finance_tracker runs in the browser; build it for wasm32 (e.g. `trunk serve`)");
}
