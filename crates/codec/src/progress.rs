/// Receives progress notifications from long running stages.
///
/// Reports are advisory. Implementations must not influence control flow.
pub trait ProgressMonitor {
    fn report(&mut self, current: usize, total: usize);
}

/// Monitor that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressMonitor for Silent {
    #[inline]
    fn report(&mut self, _current: usize, _total: usize) {}
}
