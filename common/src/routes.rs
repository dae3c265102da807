/// Navigation targets the dashboard hands to the surrounding router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Profile(String),
    JobDetail(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Profile(id) => format!("/profile/{id}"),
            Route::JobDetail(id) => format!("/jobs/{id}"),
        }
    }
}
