//! A process-wide sink for statistics. Statistics are written as `PREFIX name=value` lines,
//! optionally followed by a closing line once a block of statistics is complete.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use itertools::Itertools;

struct StatisticSink {
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send + Sync>,
}

impl Debug for StatisticSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticSink")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .field("writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_SINK: OnceLock<Mutex<StatisticSink>> = OnceLock::new();

/// Configures where and how statistics are logged.
///
/// Statistic names are re-cased with `casing` if one is given. If no `writer` is provided, stdout
/// is used. Only the first call has an effect; until it is made, statistics are discarded.
pub fn configure_statistic_logging(
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_SINK.get_or_init(|| {
        Mutex::new(StatisticSink {
            prefix,
            postfix,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Logs a single statistic as `PREFIX name=value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(sink) = STATISTIC_SINK.get() else {
        return;
    };
    if let Ok(mut sink) = sink.lock() {
        let name = match sink.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let prefix = sink.prefix;
        let _ = writeln!(sink.writer, "{prefix} {name}={value}");
    }
}

/// Writes the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    let Some(sink) = STATISTIC_SINK.get() else {
        return;
    };
    if let Ok(mut sink) = sink.lock() {
        if let Some(postfix) = sink.postfix {
            let _ = writeln!(sink.writer, "{postfix}");
        }
    }
}

/// Returns whether statistic logging has been configured.
pub fn should_log_statistics() -> bool {
    STATISTIC_SINK.get().is_some()
}

/// Logs statistics under a common name prefix, e.g. all counters of one propagator.
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    name_prefix: String,
}

impl StatisticLogger {
    pub fn new<Input: IntoIterator<Item = impl Display>>(name_prefix: Input) -> Self {
        Self {
            name_prefix: name_prefix.into_iter().join("_"),
        }
    }

    /// Returns a new logger whose prefix is this prefix extended with `addition_to_prefix`.
    pub fn attach_to_prefix(&self, addition_to_prefix: impl Display) -> Self {
        if self.name_prefix.is_empty() {
            return Self {
                name_prefix: addition_to_prefix.to_string(),
            };
        }

        Self {
            name_prefix: format!("{}_{}", self.name_prefix, addition_to_prefix),
        }
    }

    pub fn log_statistic(&self, name: impl Display, value: impl Display) {
        if self.name_prefix.is_empty() {
            log_statistic(name, value);
        } else {
            log_statistic(format!("{}_{}", self.name_prefix, name), value);
        }
    }
}
