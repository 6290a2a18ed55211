fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(globalex_frontend::App);
}
