//! Logger setup for the vuez binary.

/// Installs the global env_logger backend.
///
/// `verbose` switches the filter from `Info` to `Debug`, which exposes the
/// per-directory and per-file trace of a `create` run.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}
