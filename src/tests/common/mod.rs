pub mod mocks;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::VirtualDom;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// Flushes pending signal writes and returns the updated HTML.
pub fn rerender(dom: &mut VirtualDom) -> String {
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}
