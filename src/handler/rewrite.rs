//! Path rewrite rules
//!
//! Maps a request path to a filesystem path through a fixed, ordered set of
//! prefix rules. Resolution is pure and deterministic: the same path always
//! resolves to the same file.

use std::path::{Component, Path, PathBuf};

/// Resolve a request path to a filesystem path.
///
/// Rules, first match wins:
/// 1. `/` is treated as `/index.html`.
/// 2. `/demo/...` is served from the root directory.
/// 3. `/../x` is served as `<root>/x`. Some client builds request top-level
///    assets (favicon and friends) with a literal `/../` segment; only that
///    single leading segment is honored.
/// 4. `/dist/...` is served from the root directory.
/// 5. `/assets/...` is served from the root directory.
/// 6. `/favicon.ico` is served from the root directory.
/// 7. Everything else is served from the default app directory.
///
/// Returns `None` when the rewritten path still contains a `..` component,
/// which would escape the serving root.
pub fn resolve(root: &Path, demo_dir: &Path, pathname: &str) -> Option<PathBuf> {
    let pathname = if pathname == "/" { "/index.html" } else { pathname };

    let resolved = if pathname.starts_with("/demo/") {
        root.join(&pathname[1..])
    } else if let Some(rest) = pathname.strip_prefix("/../") {
        root.join(rest)
    } else if pathname.starts_with("/dist/") {
        root.join(&pathname[1..])
    } else if pathname.starts_with("/assets/") {
        root.join(&pathname[1..])
    } else if pathname == "/favicon.ico" {
        root.join("favicon.ico")
    } else {
        demo_dir.join(pathname.trim_start_matches('/'))
    };

    if resolved
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    Some(resolved)
}
