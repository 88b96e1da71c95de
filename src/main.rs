use smart_earner_dashboard::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
