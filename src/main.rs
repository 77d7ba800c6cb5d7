use lotto_generator::App;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(lotto_generator::configs::log_level()) {
            web_sys::console::error_1(&format!("Failed to initialize logging: {}", e).into());
        }
    }

    dioxus::launch(App);
}
