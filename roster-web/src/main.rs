use roster_web::App;
use tracing::info;

fn main() {
    dioxus::logger::initialize_default();
    info!("Starting student registration");
    dioxus::launch(App);
}
