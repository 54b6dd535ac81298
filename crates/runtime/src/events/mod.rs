//! Topic-based event bus carrying domain and turn events.

mod bus;
mod types;

pub use bus::{BusSink, Event, EventBus, Topic};
pub use types::TurnEvent;
