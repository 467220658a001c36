use tilly_game::{Badge, SessionSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: SessionSummary,
    #[prop_or_default]
    pub badges: Vec<Badge>,
    pub on_play_again: Callback<()>,
}

#[function_component(WinPage)]
pub fn win_page(props: &Props) -> Html {
    let play_again = {
        let cb = props.on_play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let summary = &props.summary;

    html! {
        <section class="panel win-screen" data-testid="win-screen">
            <h2>{ "🎉 You found Tilly! 🎉" }</h2>
            <p class="win-flavor">
                { format!("She was hiding in the {}!", summary.tilly_location_name) }
            </p>
            { match summary.bonus_solved {
                Some(true) => html! { <p class="bonus-result">{ "And you aced the bonus question! 🌟" }</p> },
                Some(false) | None => html! {},
            } }
            <ul class="win-stats" data-testid="win-stats">
                <li>{ format!("Puzzles solved: {}", summary.puzzles_solved) }</li>
                <li>{ format!("Moves: {}", summary.moves) }</li>
                <li>{ format!("Hints used: {}", summary.hints_used) }</li>
                <li>{ format!("Best streak: {}", summary.max_streak) }</li>
                { match summary.elapsed_seconds {
                    Some(seconds) => html! { <li>{ format!("Time: {seconds} seconds") }</li> },
                    None => html! {},
                } }
            </ul>
            { if props.badges.is_empty() {
                html! {}
            } else {
                html! {
                    <div class="badge-shelf" data-testid="badge-shelf">
                        <h3>{ "Your badges" }</h3>
                        <ul>
                            { for props.badges.iter().map(|badge| html! {
                                <li class="badge">{ badge.title.clone() }</li>
                            }) }
                        </ul>
                    </div>
                }
            } }
            <button type="button" class="play-again-btn" data-testid="play-again-btn" onclick={play_again}>
                { "Play Again" }
            </button>
        </section>
    }
}
