//! Signal logger: writes every bus event to the log.

use runtime::{Event, EventBus, Topic};
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Subscribes to every topic and logs events until the bus is dropped.
pub fn spawn_signal_logger(bus: &EventBus, json: bool) -> JoinHandle<()> {
    let mut game = bus.subscribe(Topic::Game);
    let mut turn = bus.subscribe(Topic::Turn);
    tokio::spawn(async move {
        loop {
            let received = tokio::select! {
                event = game.recv() => event,
                event = turn.recv() => event,
            };
            match received {
                Ok(event) => log_event(&event, json),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(target: "signals", skipped, "signal logger fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
        drain(&mut game, json);
        drain(&mut turn, json);
    })
}

fn drain(rx: &mut Receiver<Event>, json: bool) {
    while let Ok(event) = rx.try_recv() {
        log_event(&event, json);
    }
}

fn log_event(event: &Event, json: bool) {
    if json {
        match serde_json::to_string(event) {
            Ok(line) => tracing::info!(target: "signals", "{}", line),
            Err(error) => tracing::warn!(target: "signals", %error, "unserializable event"),
        }
        return;
    }
    match event {
        Event::Game(game) => tracing::info!(target: "signals", kind = game.kind(), "{:?}", game),
        Event::Turn(turn) => tracing::info!(target: "signals", "{:?}", turn),
    }
}
