use log::LevelFilter;

use crate::error::Error;

/// Installs the global logger, writing timestamped lines to stderr.
pub fn init(level: LevelFilter) -> Result<(), Error> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_an_error() {
        // The first call may succeed or lose to another logger; the second never wins.
        let _ = init(LevelFilter::Off);
        let err = init(LevelFilter::Info).unwrap_err();
        assert!(matches!(err, Error::Logger(_)));
    }
}
