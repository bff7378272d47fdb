use anyhow::Context;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

static LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} | {({l}):5.5} | {f}:{L} | {m}{n}";

/// Logs go to stderr so they never mix with the result area on stdout.
pub fn setup(output: Option<String>, level: log::LevelFilter) -> anyhow::Result<()> {
    let console_appender = {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        Appender::builder().build("console", Box::new(console))
    };

    let file_appender = match output {
        Some(path) => {
            let logfile = FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build(&path)
                .with_context(|| format!("failed to open log file {}", path))?;
            Some(Appender::builder().build("logfile", Box::new(logfile)))
        }
        None => None,
    };

    let mut config_builder = Config::builder().appender(console_appender);
    let mut root_builder = Root::builder().appender("console");

    if let Some(appender) = file_appender {
        config_builder = config_builder.appender(appender);
        root_builder = root_builder.appender("logfile");
    }

    let config = config_builder
        .build(root_builder.build(level))
        .context("invalid logging configuration")?;

    log4rs::init_config(config)?;

    Ok(())
}

/// Maps the number of `-d` flags to a level. Warnings only by default, the
/// interactive prompt shares the terminal.
pub fn level_for(debug: u8) -> log::LevelFilter {
    match debug {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::max(),
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn raise_level_with_each_debug_flag() {
        assert_eq!(level_for(0), log::LevelFilter::Warn);
        assert_eq!(level_for(1), log::LevelFilter::Info);
        assert_eq!(level_for(2), log::LevelFilter::Debug);
        assert_eq!(level_for(3), log::LevelFilter::Trace);
        assert_eq!(level_for(u8::MAX), log::LevelFilter::Trace);
    }
}
