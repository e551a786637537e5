use helixfile_codec::ProgressMonitor;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress monitor backed by an `indicatif` bar.
///
/// Every pipeline stage reports against its own total, so the bar length is
/// updated on each report.
pub struct BarMonitor {
    bar: Option<ProgressBar>,
}

impl BarMonitor {
    pub fn new(show: bool) -> Self {
        let bar = show.then(|| {
            let pb = ProgressBar::new(0);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        });
        Self { bar }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
        }
    }
}

impl ProgressMonitor for BarMonitor {
    fn report(&mut self, current: usize, total: usize) {
        if let Some(pb) = &self.bar {
            pb.set_length(total as u64);
            pb.set_position(current as u64);
        }
    }
}
