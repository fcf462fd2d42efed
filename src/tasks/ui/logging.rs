use crate::FailResult;
use crate::ui::cli_deserialize::CliDeserialize;

use ::clap::{App, Arg, ArgMatches};
use ::log::{Level, LevelFilter};
use ::std::fmt;
use ::std::path::{Path, PathBuf};

/// Crates whose log output gets the `-v` treatment.
const OUR_TARGETS: &[&str] = &["polyreg_tasks", "polyreg_fit", "polyreg_linalg"];

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
}

impl GlobalLogger {
    /// Also write the log to this file (truncating it).
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: u64) -> &mut Self
    {
        self.verbosity = match level {
            0 => Verbosity::Default,
            _ => Verbosity::Loud,
        };
        self
    }

    fn level_for_ours(&self) -> LevelFilter
    {
        match self.verbosity {
            Verbosity::Default => LevelFilter::Debug,
            Verbosity::Loud => LevelFilter::Trace,
        }
    }

    /// NOTE: A second call fails, since the `log` facade only takes one logger.
    pub fn apply(&self) -> FailResult<()>
    {
        use ::std::time::Instant;

        let start = Instant::now();
        let mut fern = ::fern::Dispatch::new()
            .format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Info);

        for &target in OUR_TARGETS {
            fern = fern.level_for(target, self.level_for_ours());
        }
        fern = fern.chain(::std::io::stdout());

        if let Some(path) = self.path.as_ref() {
            fern = fern.chain(::fern::log_file(path)?);
        }

        fern.apply()?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ::ansi_term::Colour;

        let style = match self.0 {
            Level::Error => Colour::Red.bold(),
            Level::Warn  => Colour::Red.normal(),
            Level::Info  => Colour::Cyan.bold(),
            Level::Debug => Colour::Yellow.dimmed(),
            Level::Trace => Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}

impl CliDeserialize for GlobalLogger {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("log")
                .long("log")
                .takes_value(true)
                .value_name("LOGFILE")
                .help("also write the log to this file"),
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("trace-level output from the fitting code"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let mut logger = GlobalLogger::default();
        logger.verbosity(m.occurrences_of("verbose"));
        if let Some(path) = m.value_of("log") {
            logger.path(path);
        }
        Ok(logger)
    }
}
