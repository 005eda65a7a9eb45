use std::fmt;

use super::PostId;

/// Client-side routes the controllers redirect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/community/{id}`
    PostDetail(PostId),
    /// `/my-page`
    MyPage,
    /// `/`
    Home,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::PostDetail(id) => format!("/community/{id}"),
            Route::MyPage => "/my-page".to_string(),
            Route::Home => "/".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
