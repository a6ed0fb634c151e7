//! Path helpers for configuration values.

use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
///
/// The home directory comes from `$HOME`. When it is unset the path is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use folio_catalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/catalog.json").to_str(), Some("/srv/catalog.json"));
/// assert_eq!(expand_tilde("data/catalog.json").to_str(), Some("data/catalog.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_with_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
