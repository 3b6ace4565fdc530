use compass_web::App;

fn main() {
    dioxus::launch(App);
}
