use tilly_game::{GameSession, SessionPhase};
use yew::prelude::*;

use crate::components::ui::location_panel::LocationPanel;
use crate::components::ui::puzzle_card::PuzzleCard;
use crate::components::ui::stats_bar::StatsBar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: GameSession,
    /// Latest feedback line (encouragement, retry, flavor).
    #[prop_or_default]
    pub message: AttrValue,
    pub on_answer: Callback<String>,
    pub on_move: Callback<String>,
    pub on_hint: Callback<()>,
    pub on_look: Callback<()>,
}

#[function_component(GamePage)]
pub fn game_page(props: &Props) -> Html {
    let session = &props.session;
    let is_bonus = session.phase == SessionPhase::BonusOffered;

    let location = session.location();
    let exits: Vec<(String, String)> = location
        .map(|here| {
            here.exits
                .iter()
                .filter_map(|key| tilly_game::world().get(key))
                .map(|loc| (loc.key.to_string(), loc.name.to_string()))
                .collect()
        })
        .unwrap_or_default();

    html! {
        <section class="panel game-screen" data-testid="game-screen">
            <StatsBar
                puzzles_solved={session.puzzles_solved}
                moves={session.moves}
                hints_used={session.hints_used}
                streak={session.streak}
            />
            { if props.message.is_empty() {
                html! {}
            } else {
                html! { <p class="message-box" data-testid="message-box" aria-live="polite">{ props.message.clone() }</p> }
            } }
            { match location {
                Some(here) if !is_bonus => html! {
                    <LocationPanel
                        name={here.name}
                        description={here.description}
                        exits={exits}
                        on_move={props.on_move.clone()}
                        on_look={props.on_look.clone()}
                    />
                },
                _ => html! {},
            } }
            { match &session.current_puzzle {
                Some(puzzle) => html! {
                    <PuzzleCard
                        puzzle={puzzle.clone()}
                        is_bonus={is_bonus}
                        on_answer={props.on_answer.clone()}
                        on_hint={props.on_hint.clone()}
                    />
                },
                None => html! {},
            } }
        </section>
    }
}
