use yew::prelude::*;

/// Shown when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h2>{ "Tilly isn't hiding here!" }</h2>
            <p>{ "This page doesn't exist. Let's head back home." }</p>
            <button type="button" onclick={go_home}>{ "Go Home" }</button>
        </section>
    }
}
