pub mod geo;
pub mod logging;
pub mod priority_queue;
