mod api;
mod app;
mod browser;
mod components;
mod logging;
mod pages;
mod preferences;

use app::App;

fn main() {
    logging::init();
    leptos::mount::mount_to_body(App);
}
