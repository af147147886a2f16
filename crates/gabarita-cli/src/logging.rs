// Logging setup

use tracing::Level;

/// Log level for the given CLI flags
///
/// `--quiet` wins over `--verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Initialize the tracing subscriber; logs go to stderr so stdout stays clean
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    // A subscriber may already be installed (tests); keep it
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), Level::WARN);
        assert_eq!(level_for(true, false), Level::DEBUG);
        assert_eq!(level_for(false, true), Level::ERROR);
        assert_eq!(level_for(true, true), Level::ERROR);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false, true);
        init_logging(true, false);
    }
}
