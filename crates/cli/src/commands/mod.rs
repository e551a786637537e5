pub mod decode;
pub mod encode;
pub mod inspect;

use std::path::Path;

/// Remove a destination left behind by a failed run.
fn discard_output(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), "failed to remove partial output: {e}");
        }
    }
}
