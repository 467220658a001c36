//! Browser-only mount checks. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use tilly_web::components::footer::Footer;
use tilly_web::components::header::{Header, Props as HeaderProps};
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

#[wasm_bindgen_test]
fn footer_mounts_into_the_document() {
    let root = mount_point();
    yew::Renderer::<Footer>::with_root(root.clone()).render();
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("curious kids"));
}

#[wasm_bindgen_test]
fn header_shows_title_and_player_name() {
    let root = mount_point();
    let props = HeaderProps {
        player_name: "Mia".into(),
        on_show_leaderboard: Callback::noop(),
    };
    yew::Renderer::<Header>::with_root_and_props(root.clone(), props).render();
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("Finding Tilly"));
    assert!(text.contains("Mia"));
}
