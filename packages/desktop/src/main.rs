use dioxus::prelude::*;

fn main() {
    if let Some(url) = ui::load_config().server_url() {
        // Server functions keep the base URL for the whole process lifetime.
        let url: &'static str = Box::leak(url.to_string().into_boxed_str());
        dioxus::fullstack::set_server_url(url);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);
    use_hook(|| match config.server_url() {
        Some(url) => tracing::info!("using backend at {}", url),
        None => tracing::info!("no backend configured; data stays on this device"),
    });

    rsx! {
        ui::Dashboard { config }
    }
}
