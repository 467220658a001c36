use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">{ "Made with ❤ for curious kids" }</footer>
    }
}
