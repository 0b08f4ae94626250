use dioxus::logger::tracing::Level;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }

    dioxus::launch(breed_explorer::App);
}
