use std::convert::Infallible;
use std::sync::Arc;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::{Stream, StreamExt};
use serde_json::Value;

use crate::AppState;


/// Streams the hero heading's typing frames. Every connection starts its own
/// animation from the empty text; it stops when the client goes away.
pub async fn get_typing(State(state): State<Arc<AppState>>) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    log::debug!("Starting typing stream");
    // JSON strings so that empty frames still carry a data field
    let frames = state.hero.clone().frames()
        .map(|text| Ok(Event::default().data(Value::String(text).to_string())));

    Sse::new(frames).keep_alive(KeepAlive::default())
}
