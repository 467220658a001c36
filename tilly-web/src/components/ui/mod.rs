pub mod location_panel;
pub mod puzzle_card;
pub mod stats_bar;
