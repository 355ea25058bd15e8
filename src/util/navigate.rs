//! Navigation seam between session logic and the router.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use leptos_router::NavigateOptions;

/// Something that can move the app to a route path.
///
/// Implemented for any `Fn(&str, NavigateOptions)`, which is the shape
/// returned by `leptos_router::hooks::use_navigate`.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, path: &str) {
        self(path, NavigateOptions::default());
    }
}
