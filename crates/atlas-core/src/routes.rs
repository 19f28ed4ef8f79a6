//! Storefront page routes.

/// A page the storefront can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/products`
    Products,
    /// `/products/:id`
    ProductDetails { id: String },
}

impl Route {
    /// Matches a URL path against the route table. Query strings, fragments,
    /// and a trailing slash are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Home),
            ["products"] => Some(Route::Products),
            ["products", id] => Some(Route::ProductDetails {
                id: (*id).to_string(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductDetails { id } => format!("/products/{id}"),
        }
    }

    /// Route name used by links that navigate by name rather than path.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Route::ProductDetails { .. } => Some("ProductDetails"),
            Route::Home | Route::Products => None,
        }
    }
}
