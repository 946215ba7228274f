use std::fmt;

/// 所有頁面路由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Guide,
    Login,
    Assistant,
    Dashboard,
    ModeSelection,
    Interview,
    InterviewPractice,
    Analysis,
    Ielts,
    IeltsAssessment,
    Report,
}

pub const ROUTES: &[Route] = &[
    Route::Home,
    Route::Guide,
    Route::Login,
    Route::Assistant,
    Route::Dashboard,
    Route::ModeSelection,
    Route::Interview,
    Route::InterviewPractice,
    Route::Analysis,
    Route::Ielts,
    Route::IeltsAssessment,
    Route::Report,
];

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Guide => "/guide",
            Route::Login => "/login",
            Route::Assistant => "/assistant",
            Route::Dashboard => "/dashboard",
            Route::ModeSelection => "/mode",
            Route::Interview => "/interview",
            Route::InterviewPractice => "/interview-practice",
            Route::Analysis => "/analysis",
            Route::Ielts => "/ielts",
            Route::IeltsAssessment => "/ielts-assessment",
            Route::Report => "/report",
        }
    }

    /// 需要登入才能進入的頁面
    pub const fn is_protected(self) -> bool {
        !matches!(
            self,
            Route::Home | Route::Guide | Route::Login | Route::Assistant
        )
    }

    /// 忽略查詢字串、片段與結尾斜線
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        ROUTES.iter().copied().find(|r| r.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// 導航的結果：直接顯示、轉址到登入頁、或找不到頁面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect { to: Route, replace: bool },
    NotFound(String),
}

impl Navigation {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirect { .. })
    }
}

pub fn dispatch(path: &str, authenticated: bool) -> Navigation {
    match Route::from_path(path) {
        Some(route) if route.is_protected() && !authenticated => {
            tracing::debug!("Route {} requires sign-in, redirecting to login", route);
            Navigation::Redirect {
                to: Route::Login,
                replace: true,
            }
        }
        Some(route) => Navigation::Render(route),
        None => {
            tracing::debug!("No route matches {}", path);
            Navigation::NotFound(path.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub route: Route,
    /// 文本資源中的標籤鍵
    pub label_key: &'static str,
}

const fn item(route: Route, label_key: &'static str) -> MenuItem {
    MenuItem { route, label_key }
}

const SIGNED_IN_MENU: &[MenuItem] = &[
    item(Route::Home, "nav.home"),
    item(Route::Assistant, "nav.assistant"),
    item(Route::Dashboard, "nav.dashboard"),
    item(Route::ModeSelection, "nav.interview"),
    item(Route::Ielts, "nav.ielts"),
    item(Route::Report, "nav.report"),
];

const ANONYMOUS_MENU: &[MenuItem] = &[
    item(Route::Home, "nav.home"),
    item(Route::Assistant, "nav.assistant"),
    item(Route::Guide, "nav.guide"),
];

/// 導覽列上可見的項目
pub fn menu(authenticated: bool) -> &'static [MenuItem] {
    if authenticated {
        SIGNED_IN_MENU
    } else {
        ANONYMOUS_MENU
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::domain::model::SUPPORTED_LOCALES;

    #[test]
    fn test_public_routes_always_render() {
        for path in ["/", "/guide", "/login", "/assistant"] {
            let route = Route::from_path(path).unwrap();
            assert_eq!(dispatch(path, false), Navigation::Render(route));
            assert_eq!(dispatch(path, true), Navigation::Render(route));
        }
    }

    #[test]
    fn test_protected_routes_redirect_when_anonymous() {
        for route in ROUTES.iter().filter(|r| r.is_protected()) {
            assert_eq!(
                dispatch(route.path(), false),
                Navigation::Redirect {
                    to: Route::Login,
                    replace: true
                }
            );
            assert_eq!(dispatch(route.path(), true), Navigation::Render(*route));
        }
        assert_eq!(ROUTES.iter().filter(|r| r.is_protected()).count(), 8);
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(Route::from_path("/report/"), Some(Route::Report));
        assert_eq!(Route::from_path("/mode?lang=en"), Some(Route::ModeSelection));
        assert_eq!(Route::from_path("/ielts#part2"), Some(Route::Ielts));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/questions"), None);
        assert_eq!(
            dispatch("/questions", true),
            Navigation::NotFound("/questions".to_string())
        );
    }

    #[test]
    fn test_menu_labels_exist_in_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(menu(false).len(), 3);
        assert_eq!(menu(true).len(), 6);
        assert!(menu(false).iter().all(|i| !i.route.is_protected()));

        for locale in SUPPORTED_LOCALES {
            for item in menu(true).iter().chain(menu(false)) {
                assert!(catalog.contains(*locale, item.label_key), "{}", item.label_key);
            }
        }
    }
}
