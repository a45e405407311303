pub mod event;

pub use event::{Event, Listener, ListenerId};
