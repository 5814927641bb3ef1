//! Convenience macros for logging with format arguments

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr, $($arg:tt)*) => {
        $logger.success(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::LogConfiguration;
    use crate::logger::Logger;
    use crate::runner::TokioTaskRunner;
    use crate::sinks::MemoryConsole;

    #[test]
    fn test_macros_format_arguments() {
        let console = MemoryConsole::new();
        let logger = Logger::builder()
            .with_configuration(LogConfiguration::default().with_console(true, false))
            .with_console_output(Arc::new(console.clone()))
            .with_runner(Arc::new(TokioTaskRunner::new(1).unwrap()))
            .build()
            .unwrap();

        log_info!(logger, "{}+{}", 1, 2).wait_blocking().unwrap();
        log_debug!(logger, "|{}", "d").wait_blocking().unwrap();
        log_warning!(logger, "|{:>3}", 7).wait_blocking().unwrap();
        log_success!(logger, "|ok").wait_blocking().unwrap();
        log_critical!(logger, "|{}", true).wait_blocking().unwrap();

        assert_eq!(console.contents(), "1+2|d|  7|ok|true");
    }
}
