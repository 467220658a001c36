use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Empty until a game has started.
    #[prop_or_default]
    pub player_name: AttrValue,
    pub on_show_leaderboard: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let show_leaderboard = {
        let cb = props.on_show_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header class="app-header">
            <h1 class="app-title">{ "Finding Tilly" }</h1>
            { if props.player_name.is_empty() {
                html! {}
            } else {
                html! { <span class="player-name" data-testid="player-name">{ props.player_name.clone() }</span> }
            } }
            <button type="button" class="leaderboard-btn" data-testid="leaderboard-btn" onclick={show_leaderboard}>
                { "Leaderboard" }
            </button>
        </header>
    }
}
