//! Effective film resolution for a window.

use crate::model::{Film, Window};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tier a film id was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmSource {
    Window,
    Section,
    Global,
}

impl std::fmt::Display for FilmSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilmSource::Window => write!(f, "window override"),
            FilmSource::Section => write!(f, "section override"),
            FilmSource::Global => write!(f, "quote default"),
        }
    }
}

/// Outcome of walking the precedence chain.
#[derive(Debug, Clone, Default)]
pub struct Resolution<'a> {
    /// Winning film and the tier it came from.
    pub film: Option<(&'a Film, FilmSource)>,
    /// Ids that were set but missing from the catalog, in the order tried.
    pub missing: Vec<(FilmSource, String)>,
}

impl<'a> Resolution<'a> {
    pub fn film(&self) -> Option<&'a Film> {
        self.film.map(|(film, _)| film)
    }

    pub fn source(&self) -> Option<FilmSource> {
        self.film.map(|(_, source)| source)
    }
}

/// Resolve a window's film: window override, then section override, then
/// the quote default. Ids absent from the catalog are skipped.
pub fn resolve_film_detailed<'a>(
    window: &Window,
    section_film_id: Option<&str>,
    global_film_id: Option<&str>,
    films: &HashMap<&str, &'a Film>,
) -> Resolution<'a> {
    let mut resolution = Resolution::default();
    let candidates = [
        (FilmSource::Window, window.film_id.as_deref()),
        (FilmSource::Section, section_film_id),
        (FilmSource::Global, global_film_id),
    ];

    for (source, id) in candidates {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            continue;
        };
        match films.get(id) {
            Some(film) => {
                resolution.film = Some((*film, source));
                break;
            }
            None => {
                tracing::debug!("Film '{}' ({}) not in catalog, falling through", id, source);
                resolution.missing.push((source, id.to_string()));
            }
        }
    }

    resolution
}

/// Resolve a window's effective film, or `None` when no tier yields a catalog film.
pub fn resolve_film<'a>(
    window: &Window,
    section_film_id: Option<&str>,
    global_film_id: Option<&str>,
    films: &HashMap<&str, &'a Film>,
) -> Option<&'a Film> {
    resolve_film_detailed(window, section_film_id, global_film_id, films).film()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::film_index;

    fn films() -> Vec<Film> {
        vec![
            Film::new("window", "Window Film", 9.0),
            Film::new("section", "Section Film", 7.0),
            Film::new("global", "Global Film", 5.0),
        ]
    }

    #[test]
    fn test_window_override_wins() {
        let films = films();
        let index = film_index(&films);
        let window = Window::new("w1", 10.0, 10.0).with_film("window");
        let resolution = resolve_film_detailed(&window, Some("section"), Some("global"), &index);
        assert_eq!(resolution.film().map(|f| f.id.as_str()), Some("window"));
        assert_eq!(resolution.source(), Some(FilmSource::Window));
    }

    #[test]
    fn test_section_before_global() {
        let films = films();
        let index = film_index(&films);
        let window = Window::new("w1", 10.0, 10.0);
        let film = resolve_film(&window, Some("section"), Some("global"), &index);
        assert_eq!(film.map(|f| f.id.as_str()), Some("section"));
    }

    #[test]
    fn test_global_fallback() {
        let films = films();
        let index = film_index(&films);
        let window = Window::new("w1", 10.0, 10.0);
        let film = resolve_film(&window, None, Some("global"), &index);
        assert_eq!(film.map(|f| f.id.as_str()), Some("global"));
    }

    #[test]
    fn test_missing_ids_fall_through() {
        let films = films();
        let index = film_index(&films);
        let window = Window::new("w1", 10.0, 10.0).with_film("gone");
        let resolution = resolve_film_detailed(&window, Some("also-gone"), Some("global"), &index);
        assert_eq!(resolution.film().map(|f| f.id.as_str()), Some("global"));
        assert_eq!(
            resolution.missing,
            vec![
                (FilmSource::Window, "gone".to_string()),
                (FilmSource::Section, "also-gone".to_string()),
            ]
        );
    }

    #[test]
    fn test_nothing_resolves() {
        let films = films();
        let index = film_index(&films);
        let window = Window::new("w1", 10.0, 10.0);
        assert!(resolve_film(&window, None, Some("nope"), &index).is_none());
        assert!(resolve_film(&window, Some(""), None, &index).is_none());
    }
}
