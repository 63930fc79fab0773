use crate::app::App;

mod api;
mod app;
mod components;
mod util;

fn main() {
    yew::Renderer::<App>::new().render();
}
