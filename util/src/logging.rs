use itertools::Itertools;
pub use log::{debug, error, info, trace, warn};

#[derive(Debug)]
pub enum VInitLoggingError {
    HomeDir,
    LevelFilter(String),
    FernLogFile,
    FernSetLoggerError,
}
impl std::fmt::Display for VInitLoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self)
    }
}
impl std::error::Error for VInitLoggingError {}

pub const STR_ENV_LOG_LEVEL : &str = "DOPPELKOPF_LOG";

fn level_filter(ostr_level: Option<&str>) -> Result<log::LevelFilter, VInitLoggingError> {
    match ostr_level {
        None => Ok(if cfg!(debug_assertions) {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        }),
        Some(str_level) => str_level.trim().parse::<log::LevelFilter>()
            .map_err(|_| VInitLoggingError::LevelFilter(str_level.to_string())),
    }
}

/// Logs into `~/<str_log_basename>.log`. The level can be overridden via `DOPPELKOPF_LOG`.
pub fn init_logging(str_log_basename: &str) -> Result<(), VInitLoggingError> {
    let levelfilter = level_filter(std::env::var(STR_ENV_LOG_LEVEL).ok().as_deref())?;
    fern::Dispatch::new()
        .format(|formatcallback, fmtarguments_msg, logrecord| {
            formatcallback.finish(format_args!(
                "[{} {}({:?}) {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                logrecord.target(),
                std::thread::current().id(),
                logrecord.level(),
                fmtarguments_msg,
            ))
        })
        .level(levelfilter)
        .chain(fern::log_file({
            dirs::home_dir()
                .ok_or(VInitLoggingError::HomeDir)?
                .join(format!("{str_log_basename}.log"))
        }).map_err(|_| VInitLoggingError::FernLogFile)?)
        .apply().map_err(|_| VInitLoggingError::FernSetLoggerError)?;
    let fn_panic_handler_original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panicinfo| {
        error!("panic: {}", panicinfo);
        fn_panic_handler_original(panicinfo)
    }));
    info!(
        "Started: {}",
        std::env::args().format_with(/*sep*/ " ", |str_arg, formatter| {
            formatter(&format_args!("\"{}\"", str_arg))
        }),
    );
    Ok(())
}

#[test]
fn test_level_filter() {
    assert_eq!(level_filter(Some("warn")).ok(), Some(log::LevelFilter::Warn));
    assert_eq!(level_filter(Some(" Debug ")).ok(), Some(log::LevelFilter::Debug));
    assert!(matches!(level_filter(Some("loud")), Err(VInitLoggingError::LevelFilter(_))));
    assert!(level_filter(None).is_ok());
}
