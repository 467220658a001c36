use tilly_game::Difficulty;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_start: Callback<(String, Difficulty)>,
    /// Validation feedback, e.g. after submitting an empty name.
    #[prop_or_default]
    pub error: AttrValue,
}

#[function_component(WelcomePage)]
pub fn welcome_page(props: &Props) -> Html {
    let name = use_state(String::new);
    let difficulty = use_state(Difficulty::default);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let start = {
        let name = name.clone();
        let difficulty = difficulty.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |_| on_start.emit(((*name).clone(), *difficulty)))
    };

    html! {
        <section class="panel welcome-screen" data-testid="welcome-screen">
            <h2>{ "Tilly is hiding!" }</h2>
            <p>{ "Solve puzzles around the house to find her. What's your name?" }</p>
            <input
                type="text"
                class="name-input"
                data-testid="name-input"
                placeholder="Your name"
                value={(*name).clone()}
                oninput={on_name_input}
            />
            <div class="difficulty-picker" role="group" aria-label="Pick your level">
                { for Difficulty::SELECTABLE.iter().map(|tier| {
                    let selected = *difficulty == *tier;
                    let difficulty = difficulty.clone();
                    let tier = *tier;
                    let onclick = Callback::from(move |_| difficulty.set(tier));
                    html! {
                        <button
                            type="button"
                            class={classes!("difficulty-btn", selected.then_some("selected"))}
                            {onclick}
                        >
                            <span class="tier-label">{ tier.label() }</span>
                            <span class="tier-ages">{ tier.age_band() }</span>
                        </button>
                    }
                }) }
            </div>
            { if props.error.is_empty() {
                html! {}
            } else {
                html! { <p class="error-message" role="alert">{ props.error.clone() }</p> }
            } }
            <button type="button" class="start-btn" data-testid="start-btn" onclick={start}>
                { "Start the Hunt!" }
            </button>
        </section>
    }
}
