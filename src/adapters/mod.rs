// Adapters layer: concrete implementations of the domain ports (clipboard, notifications, sources).

pub mod clipboard;
pub mod notify;
pub mod source;
