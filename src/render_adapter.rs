use serde_json::{json, Value};
use crate::match_engine::{
    principles::{COMPLETION_BANNER, PROMPT, TITLE},
    MatchGame, OutcomeView, PrincipleView,
};

/// One principle button.
fn principle_button(view: &PrincipleView) -> Value {
    json!({
        "name": view.name,
        "icon": view.icon.key(),
        "status": view.status,
    })
}

/// One outcome button; `index` is its slot in the shuffled column.
fn outcome_button(index: usize, view: &OutcomeView) -> Value {
    json!({
        "id": index,
        "text": view.text,
        "status": view.status,
        "disabled": !view.enabled,
    })
}

/// Snapshot of everything a web front end needs to draw the game.
///
/// `banner` is `null` until the session is complete.
pub fn to_render_json(game: &MatchGame) -> Value {
    let state = game.state();
    let principles: Vec<Value> = game.principle_views().iter().map(principle_button).collect();
    let outcomes: Vec<Value> = game
        .outcome_views()
        .iter()
        .enumerate()
        .map(|(i, v)| outcome_button(i, v))
        .collect();
    let banner = state.is_complete.then_some(COMPLETION_BANNER);

    json!({
        "title": TITLE,
        "prompt": format!("{PROMPT} Score: {}", state.score),
        "revision": game.revision(),
        "score": state.score,
        "matched": state.matched,
        "selected_principle": state.selected_principle,
        "selected_outcome": state.selected_outcome,
        "complete": state.is_complete,
        "banner": banner,
        "principles": principles,
        "outcomes": outcomes,
    })
}
