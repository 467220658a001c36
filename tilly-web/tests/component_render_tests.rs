use futures::executor::block_on;
use tilly_game::{Puzzle, Topic};
use tilly_web::components::footer::Footer;
use tilly_web::components::header::Header;
use tilly_web::components::ui::location_panel::LocationPanel;
use tilly_web::components::ui::puzzle_card::PuzzleCard;
use tilly_web::components::ui::stats_bar::StatsBar;
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn header_shows_title_and_player() {
    let props = tilly_web::components::header::Props {
        player_name: AttrValue::from("Robin"),
        on_show_leaderboard: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Finding Tilly"));
    assert!(html.contains("Robin"));
    assert!(html.contains("leaderboard-btn"));
}

#[test]
fn header_hides_empty_player_name() {
    let props = tilly_web::components::header::Props {
        player_name: AttrValue::default(),
        on_show_leaderboard: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(!html.contains("player-name"));
}

#[test]
fn footer_renders_copy() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
}

#[test]
fn stats_bar_shows_counters_and_optional_streak() {
    let props = tilly_web::components::ui::stats_bar::Props {
        puzzles_solved: 3,
        moves: 7,
        hints_used: 1,
        streak: 3,
    };
    let html = block_on(LocalServerRenderer::<StatsBar>::with_props(props).render());
    assert!(html.contains("Puzzles: 3"));
    assert!(html.contains("Moves: 7"));
    assert!(html.contains("Hints: 1"));
    assert!(html.contains("Streak: 3"));

    let quiet = tilly_web::components::ui::stats_bar::Props {
        puzzles_solved: 0,
        moves: 0,
        hints_used: 0,
        streak: 1,
    };
    let html = block_on(LocalServerRenderer::<StatsBar>::with_props(quiet).render());
    assert!(!html.contains("stat-streak"));
}

#[test]
fn location_panel_lists_exits() {
    let props = tilly_web::components::ui::location_panel::Props {
        name: AttrValue::from("Home"),
        description: AttrValue::from("This is where Tilly lives."),
        exits: vec![
            ("garden".to_string(), "Garden".to_string()),
            ("kitchen".to_string(), "Kitchen".to_string()),
        ],
        on_move: Callback::noop(),
        on_look: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LocationPanel>::with_props(props).render());
    assert!(html.contains("Go to Garden"));
    assert!(html.contains("Go to Kitchen"));
    assert!(html.contains("Look Around"));
}

#[test]
fn puzzle_card_renders_question_and_options() {
    let puzzle = Puzzle::fallback(Topic::Addition);
    let props = tilly_web::components::ui::puzzle_card::Props {
        puzzle: puzzle.clone(),
        is_bonus: false,
        on_answer: Callback::noop(),
        on_hint: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PuzzleCard>::with_props(props).render());
    assert!(html.contains(&puzzle.question));
    for option in &puzzle.options {
        assert!(html.contains(option));
    }
    assert!(html.contains("Get a Hint"));
    assert!(!html.contains("Bonus Question"));
}

#[test]
fn puzzle_card_marks_the_bonus_question() {
    let props = tilly_web::components::ui::puzzle_card::Props {
        puzzle: Puzzle::fallback(Topic::Numbers),
        is_bonus: true,
        on_answer: Callback::noop(),
        on_hint: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PuzzleCard>::with_props(props).render());
    assert!(html.contains("Bonus Question"));
}
