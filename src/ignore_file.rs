//! Loading ignore patterns from a pattern file

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::patterns::PatternList;

/// Default name of the ignore file, looked up inside the scan root.
pub const DEFAULT_IGNORE_FILE: &str = ".ignore";

/// Read glob patterns from `path`, one per line.
///
/// Blank lines and lines starting with `#` are skipped; everything else is
/// trimmed and kept in file order. A missing or unreadable file yields an
/// empty list.
pub fn load_ignore_patterns(path: &Path) -> PatternList {
    let mut patterns = PatternList::new();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            debug!("no ignore patterns loaded from {}: {}", path.display(), e);
            return patterns;
        }
    };

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    "stopped reading ignore file {} after {} patterns: {}",
                    path.display(),
                    patterns.len(),
                    e
                );
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        patterns.push(line);
    }

    debug!(
        "loaded {} ignore patterns from {}",
        patterns.len(),
        path.display()
    );
    patterns
}
