//! Client Routes
//!
//! Navigable views and the location (path + query) they are addressed by.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Contact,
    ProjectCreate,
    ProjectDetail(String),
    ProjectEdit(String),
    ProjectTeam(String),
    Profile,
    ProfilePassword,
    Login,
    Register,
    ConfirmAccount,
    RequestCode,
    ForgotPassword,
    NewPassword,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Dashboard,
            ["contact"] => Route::Contact,
            ["projects", "create"] => Route::ProjectCreate,
            ["projects", id] => Route::ProjectDetail(decode(id)),
            ["projects", id, "edit"] => Route::ProjectEdit(decode(id)),
            ["projects", id, "team"] => Route::ProjectTeam(decode(id)),
            ["profile"] => Route::Profile,
            ["profile", "password"] => Route::ProfilePassword,
            ["auth", "login"] => Route::Login,
            ["auth", "register"] => Route::Register,
            ["auth", "confirm-account"] => Route::ConfirmAccount,
            ["auth", "request-code"] => Route::RequestCode,
            ["auth", "forgot-password"] => Route::ForgotPassword,
            ["auth", "new-password"] => Route::NewPassword,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::ProjectCreate => "/projects/create".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{}", encode(id)),
            Route::ProjectEdit(id) => format!("/projects/{}/edit", encode(id)),
            Route::ProjectTeam(id) => format!("/projects/{}/team", encode(id)),
            Route::Profile => "/profile".to_string(),
            Route::ProfilePassword => "/profile/password".to_string(),
            Route::Login => "/auth/login".to_string(),
            Route::Register => "/auth/register".to_string(),
            Route::ConfirmAccount => "/auth/confirm-account".to_string(),
            Route::RequestCode => "/auth/request-code".to_string(),
            Route::ForgotPassword => "/auth/forgot-password".to_string(),
            Route::NewPassword => "/auth/new-password".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Auth and error pages render without the app chrome
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login
                | Route::Register
                | Route::ConfirmAccount
                | Route::RequestCode
                | Route::ForgotPassword
                | Route::NewPassword
                | Route::NotFound
        )
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn decode(value: &str) -> String {
    percent_decode_str(&value.replace('+', " ")).decode_utf8_lossy().into_owned()
}

/// Current path and query string (without `?`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    /// Parse `/path?query`; a fragment is dropped
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let path = if path.is_empty() { "/" } else { path };
        Self { path: path.to_string(), query: query.to_string() }
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.path)
    }

    /// Decoded value of a query parameter; empty values count as absent
    pub fn param(&self, name: &str) -> Option<String> {
        self.query
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| decode(key) == name)
            .map(|(_, value)| decode(value))
            .filter(|value| !value.is_empty())
    }

    /// Same path with a single query parameter
    pub fn with_param(&self, name: &str, value: &str) -> String {
        format!("{}?{}={}", self.path, encode(name), encode(value))
    }

    /// Same path, no query
    pub fn without_query(&self) -> String {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_parse_and_format() {
        let routes = vec![
            Route::Dashboard,
            Route::Contact,
            Route::ProjectCreate,
            Route::ProjectDetail("663a1f".into()),
            Route::ProjectEdit("663a1f".into()),
            Route::ProjectTeam("663a1f".into()),
            Route::Profile,
            Route::ProfilePassword,
            Route::Login,
            Route::Register,
            Route::ConfirmAccount,
            Route::RequestCode,
            Route::ForgotPassword,
            Route::NewPassword,
            Route::NotFound,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/projects/p1/tasks"), Route::NotFound);
        assert_eq!(Route::parse("/nowhere"), Route::NotFound);
        assert_eq!(Route::parse("/projects/p1/"), Route::ProjectDetail("p1".into()));
    }

    #[test]
    fn test_location_params() {
        let location = Location::parse("/projects/p1?viewTask=t2&x=");
        assert_eq!(location.route(), Route::ProjectDetail("p1".into()));
        assert_eq!(location.param("viewTask"), Some("t2".into()));
        assert_eq!(location.param("x"), None);
        assert_eq!(location.param("editTask"), None);
    }

    #[test]
    fn test_location_open_and_close() {
        let location = Location::parse("/projects/p1");
        let open = Location::parse(&location.with_param("editTask", "t 1"));
        assert_eq!(open.param("editTask"), Some("t 1".into()));
        assert_eq!(open.without_query(), "/projects/p1");
        assert_eq!(Location::parse("").path, "/");
    }
}
