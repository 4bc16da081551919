use bouncing_images::canvas::Stage;
use dioxus::prelude::*;

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Stage {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already set: {err}").into());
        }
    }
    dioxus::launch(App);
}
