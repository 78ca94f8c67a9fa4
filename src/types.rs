use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Patched { path: PathBuf, occurrences: usize },
    NotFound { path: PathBuf },
}

impl Outcome {
    pub fn is_patched(&self) -> bool {
        matches!(self, Outcome::Patched { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Patched { path, occurrences } => write!(
                f,
                "Patched {}: replaced {} occurrence(s) of the signup responsive block",
                path.display(),
                occurrences
            ),
            Outcome::NotFound { path } => write!(
                f,
                "Pattern not found in {}; file left unchanged",
                path.display()
            ),
        }
    }
}
