mod app;
mod browser;
mod card;
mod modal;

use app::App;

fn main() {
    leptos::mount_to_body(App);
}
