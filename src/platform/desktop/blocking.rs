use tracing::debug_span;

/// Runs file work inline on the UI thread inside a named span.
pub fn run_blocking<F, T>(label: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let _span = debug_span!("blocking", task = label).entered();
    f()
}
