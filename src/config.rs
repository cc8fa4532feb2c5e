//! Build-time configuration.
//!
//! The deployment base path is baked in at compile time so the same bundle
//! can be served from `/` locally and from `/<repo>/` on a hosted-pages site.

use std::sync::OnceLock;
use std::time::Duration;

/// How long the navigation popup stays up after the pointer leaves it.
pub const HOVER_CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Vertical gap between a navigation button and its popup, in CSS pixels.
pub const POPUP_OFFSET_PX: f64 = 8.0;

static BASE_PATH: OnceLock<String> = OnceLock::new();

/// Explicit base path override. `VITE_BASE_PATH` takes precedence over
/// `BASE_PATH`; blank values count as unset.
fn explicit_base_path(
    vite: Option<&'static str>,
    plain: Option<&'static str>,
) -> Option<&'static str> {
    [vite, plain]
        .into_iter()
        .flatten()
        .find(|path| !path.trim().is_empty())
}

/// Resolve the base path from the build environment.
///
/// Outside CI the site is always served from `/`. In CI an explicit
/// override wins, then `/<repo>/` taken from `GITHUB_REPOSITORY`
/// (`owner/repo`), then `/`.
pub fn resolve_base_path(ci: bool, explicit: Option<&str>, repository: Option<&str>) -> String {
    if !ci {
        return "/".to_string();
    }
    if let Some(path) = explicit.map(str::trim).filter(|p| !p.is_empty()) {
        return normalize(path);
    }
    repository
        .and_then(|repo| repo.split('/').nth(1))
        .filter(|name| !name.is_empty())
        .map(normalize)
        .unwrap_or_else(|| "/".to_string())
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// Base path this build was compiled for, always with leading and trailing `/`.
pub fn base_path() -> &'static str {
    BASE_PATH.get_or_init(|| {
        resolve_base_path(
            option_env!("CI").is_some(),
            explicit_base_path(option_env!("VITE_BASE_PATH"), option_env!("BASE_PATH")),
            option_env!("GITHUB_REPOSITORY"),
        )
    })
}

/// Base path as a router pattern: `/` or `/<repo>` without the trailing slash.
pub fn route_path() -> &'static str {
    route_pattern(base_path())
}

fn route_pattern(base: &str) -> &str {
    match base.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Prefix a local asset path (e.g. `images/foo.png`) with the base path.
pub fn asset_url(relative: &str) -> String {
    join_base(base_path(), relative)
}

fn join_base(base: &str, relative: &str) -> String {
    format!("{}{}", base, relative.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_pattern_drops_trailing_slash() {
        assert_eq!(route_pattern("/"), "/");
        assert_eq!(route_pattern("/site/"), "/site");
    }

    #[test]
    fn test_base_path_outside_ci_is_root() {
        assert_eq!(resolve_base_path(false, Some("/docs/"), Some("me/site")), "/");
    }

    #[test]
    fn test_explicit_base_path_wins_in_ci() {
        assert_eq!(resolve_base_path(true, Some("custom"), Some("me/site")), "/custom/");
        assert_eq!(resolve_base_path(true, Some("/custom/"), None), "/custom/");
    }

    #[test]
    fn test_vite_base_path_is_accepted() {
        assert_eq!(explicit_base_path(Some("/pages/"), Some("/other/")), Some("/pages/"));
        assert_eq!(explicit_base_path(None, Some("/other/")), Some("/other/"));
        assert_eq!(explicit_base_path(Some(" "), Some("/other/")), Some("/other/"));
        assert_eq!(explicit_base_path(None, None), None);
        assert_eq!(
            resolve_base_path(true, explicit_base_path(Some("site"), None), Some("a/b")),
            "/site/"
        );
    }

    #[test]
    fn test_base_path_from_repository_name() {
        assert_eq!(
            resolve_base_path(true, None, Some("hospital/medicina-nuclear")),
            "/medicina-nuclear/"
        );
        // Blank override falls through to the repository
        assert_eq!(resolve_base_path(true, Some("  "), Some("a/b")), "/b/");
    }

    #[test]
    fn test_base_path_fallback_is_root() {
        assert_eq!(resolve_base_path(true, None, None), "/");
        assert_eq!(resolve_base_path(true, None, Some("no-slash")), "/");
        assert_eq!(resolve_base_path(true, Some("///"), None), "/");
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("/", "images/a.png"), "/images/a.png");
        assert_eq!(join_base("/repo/", "/images/a.png"), "/repo/images/a.png");
    }
}
