use log::LevelFilter;

/// Routes `log` records to stderr, at debug level when `verbose` is set.
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level(verbose))
        .chain(std::io::stderr())
        .apply()
}

fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
