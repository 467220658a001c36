use tilly_game::LeaderboardEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Already ranked: highest score first.
    pub entries: Vec<LeaderboardEntry>,
    pub on_back: Callback<()>,
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &Props) -> Html {
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel leaderboard-screen" data-testid="leaderboard-screen">
            <h2>{ "Top Puzzle Solvers" }</h2>
            { if props.entries.is_empty() {
                html! { <p>{ "Nobody on the board yet. Be the first!" }</p> }
            } else {
                html! {
                    <ol class="leaderboard-list">
                        { for props.entries.iter().map(|entry| html! {
                            <li class="leaderboard-row">
                                <span class="row-name">{ entry.name.clone() }</span>
                                <span class="row-score">{ entry.score }</span>
                            </li>
                        }) }
                    </ol>
                }
            } }
            <button type="button" class="back-btn" data-testid="back-btn" onclick={back}>
                { "Back to the game" }
            </button>
        </section>
    }
}
