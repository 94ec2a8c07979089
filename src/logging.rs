// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

pub const LEVEL_VAR: &str = "TILEBOT_LOG";

// unset or unparseable means warn.
pub fn level_from(s: Option<&str>) -> log::LevelFilter {
    s.and_then(|s| s.trim().parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn)
}

// stderr at the TILEBOT_LOG level; with a log file, everything down to debug also goes there.
pub fn init(log_file: Option<&str>) -> error::Returns<()> {
    let level = level_from(std::env::var(LEVEL_VAR).ok().as_deref());
    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });
    let log_dispatcher = match log_file {
        Some(log_file) => log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(level.max(log::LevelFilter::Debug))
                    .chain(fern::log_file(log_file)?),
            )
            .chain(fern::Dispatch::new().level(level).chain(std::io::stderr())),
        None => log_dispatcher.level(level).chain(std::io::stderr()),
    };
    if let Err(e) = log_dispatcher.apply() {
        return_error!(format!("cannot set up logging: {}", e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(None), log::LevelFilter::Warn);
        assert_eq!(level_from(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(level_from(Some(" TRACE ")), log::LevelFilter::Trace);
        assert_eq!(level_from(Some("off")), log::LevelFilter::Off);
        assert_eq!(level_from(Some("loud")), log::LevelFilter::Warn);
    }
}
