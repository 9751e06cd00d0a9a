use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// The extension Apate uses by default to disguise masked files
pub const DEFAULT_DISGUISE_SUFFIX: &str = "mp4";

/// File extension that marks a file as masked, for example `mp4`.
///
/// A leading dot is optional, `".mp4"` and `"mp4"` are the same suffix.
/// Matching is ASCII case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisguiseSuffix(String);

impl DisguiseSuffix {
    pub fn new(suffix: impl AsRef<str>) -> Self {
        Self(suffix.as_ref().trim_start_matches('.').to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// true if the file name of `path` ends with this suffix and has a stem in front of it
    pub fn matches(&self, path: &Path) -> bool {
        self.stem_len(path).is_some()
    }

    /// Removes this suffix from the file name of `path`, or returns `path` unchanged
    /// when it does not carry the suffix.
    pub fn strip(&self, path: &Path) -> PathBuf {
        let Some(stem_len) = self.stem_len(path) else {
            return path.to_path_buf();
        };
        // stem_len is only Some for valid UTF-8 names
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return path.to_path_buf();
        };

        path.with_file_name(&name[..stem_len])
    }

    /// length of the file name in front of `.suffix`
    fn stem_len(&self, path: &Path) -> Option<usize> {
        if self.0.is_empty() {
            return None;
        }
        let name = path.file_name()?.to_str()?;
        let tail_len = self.0.len() + 1;
        if name.len() <= tail_len {
            return None;
        }

        let split = name.len() - tail_len;
        if !name.is_char_boundary(split) {
            return None;
        }
        let (stem, tail) = name.split_at(split);
        let ext = tail.strip_prefix('.')?;

        (!stem.is_empty() && ext.eq_ignore_ascii_case(&self.0)).then_some(split)
    }
}

impl Default for DisguiseSuffix {
    fn default() -> Self {
        Self::new(DEFAULT_DISGUISE_SUFFIX)
    }
}

impl Display for DisguiseSuffix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.0)
    }
}

impl From<&str> for DisguiseSuffix {
    fn from(suffix: &str) -> Self {
        Self::new(suffix)
    }
}

impl From<String> for DisguiseSuffix {
    fn from(suffix: String) -> Self {
        Self::new(suffix)
    }
}

/// Strips the disguise `suffix` off `path`, e.g. `a/b.zip.mp4` becomes `a/b.zip`.
///
/// Paths that do not end with the suffix are returned unchanged.
pub fn strip_disguise_suffix(path: impl AsRef<Path>, suffix: impl Into<DisguiseSuffix>) -> PathBuf {
    suffix.into().strip(path.as_ref())
}
