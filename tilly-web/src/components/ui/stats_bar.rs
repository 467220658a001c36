use yew::prelude::*;

/// Counter strip shown above the game board.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub puzzles_solved: u32,
    pub moves: u32,
    pub hints_used: u32,
    pub streak: u32,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &Props) -> Html {
    html! {
        <div class="stats-bar" data-testid="stats-bar">
            <span class="stat" data-testid="stat-solved">
                { format!("Puzzles: {}", props.puzzles_solved) }
            </span>
            <span class="stat" data-testid="stat-moves">
                { format!("Moves: {}", props.moves) }
            </span>
            <span class="stat" data-testid="stat-hints">
                { format!("Hints: {}", props.hints_used) }
            </span>
            { if props.streak >= 2 {
                html! {
                    <span class="stat stat-streak" data-testid="stat-streak">
                        { format!("Streak: {} 🔥", props.streak) }
                    </span>
                }
            } else {
                html! {}
            } }
        </div>
    }
}
