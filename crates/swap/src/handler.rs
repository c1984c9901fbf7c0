use eyre::EyreHandler;
use std::{error::Error, fmt};

/// Error reporting for the `swapdesk` binary via `eyre`.
///
/// `{}` prints the causes on one line joined by `: `, `{:?}` prints the error followed by a
/// numbered `Caused by:` list. Causes already contained in the message before them are dropped.
pub struct Handler {
    verbose: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    /// A handler that hands `{:?}` reports to `verbose` when one is given.
    pub fn new(verbose: Option<Box<dyn EyreHandler>>) -> Self {
        Self { verbose }
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&causes(error).join(": "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verbose {
            Some(verbose) => verbose.debug(error, f),
            None if f.alternate() => fmt::Debug::fmt(error, f),
            None => write_report(f, &causes(error)),
        }
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(verbose) = &mut self.verbose {
            verbose.track_caller(location);
        }
    }
}

/// The messages of `error` and its sources, skipping each one contained in its predecessor.
fn causes(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes: Vec<String> =
        eyre::Chain::new(error).map(|cause| cause.to_string().trim().to_string()).collect();
    causes.dedup_by(|next, prev| prev.contains(next.as_str()));
    causes
}

fn write_report(out: &mut impl fmt::Write, causes: &[String]) -> fmt::Result {
    let Some((error, sources)) = causes.split_first() else { return Ok(()) };
    out.write_str(error)?;
    if sources.is_empty() {
        return Ok(());
    }
    out.write_str("\n\nCaused by:")?;
    for (i, source) in sources.iter().enumerate() {
        write!(out, "\n  {i}: {source}")?;
    }
    Ok(())
}

/// Installs the [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// `SWAPDESK_DEBUG` switches errors to the verbose color-eyre report. Panics always use it.
pub fn install() {
    let panic_section = "This is a bug. Please report it together with `swapdesk --version`.";
    let (panic_hook, eyre_hook) =
        color_eyre::config::HookBuilder::default().panic_section(panic_section).into_hooks();
    panic_hook.install();
    let eyre_hook = eyre_hook.into_eyre_hook();
    let verbose = std::env::var_os("SWAPDESK_DEBUG").is_some();
    if let Err(err) =
        eyre::set_hook(Box::new(move |e| Box::new(Handler::new(verbose.then(|| eyre_hook(e))))))
    {
        debug!(%err, "failed to install eyre error hook");
    }
}
