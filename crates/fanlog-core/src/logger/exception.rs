//! Internal failure routing
//!
//! Exceptions are written to every file sink whether or not the active
//! configuration enables it, so a console-only setup still leaves a durable
//! record. The console is never used.

use std::error::Error;
use std::sync::Arc;

use crate::format::compose;
use crate::time::{format_instant, TimeFormatter};
use crate::types::LogLevel;

use super::active::ActiveConfiguration;
use super::dispatch::Dispatcher;
use super::handle::LogHandle;

/// Formats exceptions and fans them out to the file sinks
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionRouter;

impl ExceptionRouter {
    pub fn new() -> Self {
        Self
    }

    /// Message body: `origin: message`, or just `message` without an origin
    pub fn message(origin: &str, message: &str) -> String {
        if origin.is_empty() {
            message.to_string()
        } else {
            format!("{}: {}", origin, message)
        }
    }

    /// An error followed by its `source()` chain
    ///
    /// Causes whose text an outer message already embeds are not repeated.
    pub fn describe(error: &(dyn Error + 'static)) -> String {
        let mut description = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !description.contains(&text) {
                description.push_str(" | caused by: ");
                description.push_str(&text);
            }
            source = cause.source();
        }
        description
    }

    /// Custom files, then the current fragment, then the collectivized file
    pub(crate) fn route(
        &self,
        dispatcher: &Dispatcher,
        clock: &dyn TimeFormatter,
        active: &ActiveConfiguration,
        origin: &str,
        message: &str,
    ) -> LogHandle {
        let configuration = &active.configuration;
        let now = clock.now();
        let timestamp = format_instant(now, &configuration.time_format, configuration.time_zone);
        let line: Arc<str> = compose(
            &Self::message(origin, message),
            LogLevel::Exception,
            &configuration.name,
            &timestamp,
        )
        .into();

        let mut handle = LogHandle::new();
        dispatcher.custom(
            &mut handle,
            configuration.file_custom_output_paths.clone(),
            Arc::clone(&line),
        );
        dispatcher.fragment(&mut handle, active.fragment_target(now), Arc::clone(&line));
        dispatcher.collectivized(&mut handle, active.collectivization_path().clone(), line);
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "could not rotate")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(ExceptionRouter::message("db", "timeout"), "db: timeout");
        assert_eq!(ExceptionRouter::message("", "timeout"), "timeout");
    }

    #[test]
    fn test_describe_walks_source_chain() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(
            ExceptionRouter::describe(&err),
            "could not rotate | caused by: disk full"
        );
    }

    #[test]
    fn test_describe_does_not_repeat_embedded_causes() {
        let err = crate::logger::LogError::sink(
            crate::sinks::SinkKind::Custom,
            crate::sinks::SinkError::io(
                "x.log",
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ),
        );
        let description = ExceptionRouter::describe(&err);

        assert_eq!(description.matches("disk full").count(), 1);
        assert!(!description.contains("caused by"));
        assert!(description.starts_with("custom sink failed: failed to append to x.log"));
    }

    #[test]
    fn test_describe_keeps_causes_missing_from_message() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::Other, "quota"));
        let description = ExceptionRouter::describe(&err);
        assert_eq!(description.matches("quota").count(), 1);
        assert!(description.contains(" | caused by: quota"));
    }
}
