//! Server-Sent Events support

use crate::wire::StreamEvent;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

/// Bridge a dispatcher channel into an SSE response body.
///
/// Each event becomes one `data: <JSON>\n\n` frame; the body ends when the
/// dispatcher drops its sender. Keep-alive comments are not data frames and
/// decoders skip them.
pub fn sse_stream(
    rx: mpsc::Receiver<StreamEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let frames = ReceiverStream::new(rx)
        .map(|event| Ok(Event::default().data(event.to_json().to_string())));

    Sse::new(frames).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
