use tilly_game::Puzzle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub puzzle: Puzzle,
    /// Changes the framing copy when the post-win bonus question is up.
    #[prop_or_default]
    pub is_bonus: bool,
    pub on_answer: Callback<String>,
    pub on_hint: Callback<()>,
}

#[function_component(PuzzleCard)]
pub fn puzzle_card(props: &Props) -> Html {
    let hint = {
        let cb = props.on_hint.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="puzzle-card" data-testid="puzzle-card">
            { if props.is_bonus {
                html! { <h3 class="puzzle-heading bonus">{ "⭐ Bonus Question! ⭐" }</h3> }
            } else {
                html! { <h3 class="puzzle-heading">{ "Solve this puzzle:" }</h3> }
            } }
            <p class="puzzle-question" data-testid="puzzle-question">{ props.puzzle.question.clone() }</p>
            <div class="puzzle-options" role="group" aria-label="Answer choices">
                { for props.puzzle.options.iter().map(|option| {
                    let on_answer = props.on_answer.clone();
                    let selected = option.clone();
                    let onclick = Callback::from(move |_| on_answer.emit(selected.clone()));
                    html! {
                        <button type="button" class="option-btn" {onclick}>
                            { option.clone() }
                        </button>
                    }
                }) }
            </div>
            <button type="button" class="hint-btn" data-testid="hint-btn" onclick={hint}>
                { "Get a Hint" }
            </button>
        </section>
    }
}
