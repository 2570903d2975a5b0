pub mod event_load_error;
pub mod event_loader;
