use cellar_web::App;
use tracing::Level;

fn main() {
    // Fails only if a subscriber is already installed
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(App);
}
