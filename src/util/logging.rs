/// install an `env_logger` subscriber reading `RUST_LOG`, if one is not
/// already installed. safe to call more than once. the library itself
/// never emits to stdout directly and never installs a subscriber on its
/// own; this is an opt-in helper for callers that want the simplest
/// possible one.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
