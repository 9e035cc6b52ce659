use mongocraft_web::app::App;

fn main() {
    console_error_panic_hook::set_once();
    // try-init tolerance: the logger may already be set in dev reloads.
    let _ = console_log::init_with_level(log::Level::Info);

    dioxus::launch(App);
}
