fn main() {
    pdfchat::config::load_environment();
    dioxus::launch(pdfchat::ui::App);
}
