use yew::prelude::*;

/// One exit button's worth of data: `(key, display name)`.
pub type Exit = (String, String);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub name: AttrValue,
    pub description: AttrValue,
    pub exits: Vec<Exit>,
    pub on_move: Callback<String>,
    pub on_look: Callback<()>,
}

#[function_component(LocationPanel)]
pub fn location_panel(props: &Props) -> Html {
    let look = {
        let cb = props.on_look.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="location-panel" data-testid="location-panel">
            <h2 class="location-name">{ props.name.clone() }</h2>
            <p class="location-description">{ props.description.clone() }</p>
            <div class="direction-buttons" role="group" aria-label="Places to go">
                { for props.exits.iter().map(|(key, name)| {
                    let on_move = props.on_move.clone();
                    let key = key.clone();
                    let onclick = Callback::from(move |_| on_move.emit(key.clone()));
                    html! {
                        <button type="button" class="direction-btn" {onclick}>
                            { format!("Go to {name}") }
                        </button>
                    }
                }) }
            </div>
            <button type="button" class="look-btn" data-testid="look-btn" onclick={look}>
                { "Look Around" }
            </button>
        </section>
    }
}
