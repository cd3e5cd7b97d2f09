use std::fmt;

/// Front-end routes
///
/// ```text
/// /          → List
/// /add       → Add
/// /edit/:id  → Edit(id)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Add,
    Edit(String),
}

impl Route {
    /// Resolve a path, returning `None` for unknown paths
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(Route::List),
            "/add" => Some(Route::Add),
            _ => {
                let id = trimmed.strip_prefix("/edit/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::Edit(id.to_string()))
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Add => "/add".to_string(),
            Route::Edit(id) => format!("/edit/{}", id),
        }
    }

    /// Name of the view mounted for this route
    pub fn view_name(&self) -> &'static str {
        match self {
            Route::List => "Item list",
            Route::Add => "Add New Item",
            Route::Edit(_) => "Edit Item",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse("/add"), Some(Route::Add));
        assert_eq!(Route::parse("/add/"), Some(Route::Add));
        assert_eq!(
            Route::parse("/edit/0190c7b4"),
            Some(Route::Edit("0190c7b4".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/edit"), None);
        assert_eq!(Route::parse("/edit/"), None);
        assert_eq!(Route::parse("/edit/a/b"), None);
        assert_eq!(Route::parse("/items"), None);
        assert_eq!(Route::parse("add"), None);
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        for route in [Route::List, Route::Add, Route::Edit("abc".to_string())] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
