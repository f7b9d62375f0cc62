//! Static route table.
//!
//! Every protected route must be registered here; nothing is discovered at
//! runtime. Auth-flow pages are an exact-match allow-list. Everything else is
//! resolved by the longest segment-aligned prefix, falling back to `Public`.

/// Access policy attached to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    Public,
    RequiresAuth,
    RequiresAdmin,
    RequiresDelivery,
    RequiresSeller,
    AuthFlow,
}

impl RoutePolicy {
    /// Whether the global header and footer render around this route.
    #[must_use]
    pub fn shows_chrome(self) -> bool {
        matches!(self, Self::Public | Self::RequiresAuth)
    }
}

/// Prefix table plus the auth-flow allow-list.
#[derive(Debug)]
pub struct RouteTable {
    prefixes: &'static [(&'static str, RoutePolicy)],
    auth_flow: &'static [&'static str],
}

/// The storefront's route registry.
pub static ROUTES: RouteTable = RouteTable {
    prefixes: &[
        ("/admin", RoutePolicy::RequiresAdmin),
        ("/delivery", RoutePolicy::RequiresDelivery),
        ("/seller", RoutePolicy::RequiresSeller),
        ("/profile", RoutePolicy::RequiresAuth),
        ("/orders", RoutePolicy::RequiresAuth),
        ("/favorites", RoutePolicy::RequiresAuth),
        ("/checkout", RoutePolicy::RequiresAuth),
    ],
    auth_flow: &["/login", "/signup", "/verify-email", "/auth/success"],
};

impl RouteTable {
    #[must_use]
    pub const fn new(
        prefixes: &'static [(&'static str, RoutePolicy)],
        auth_flow: &'static [&'static str],
    ) -> Self {
        Self { prefixes, auth_flow }
    }

    /// Resolve the single policy governing `path`.
    #[must_use]
    pub fn classify(&self, path: &str) -> RoutePolicy {
        let path = normalize(path);
        if self.auth_flow.iter().any(|p| normalize(p) == path) {
            return RoutePolicy::AuthFlow;
        }
        self.prefixes
            .iter()
            .filter(|(prefix, _)| prefix_matches(normalize(prefix), path))
            .max_by_key(|(prefix, _)| normalize(prefix).len())
            .map_or(RoutePolicy::Public, |(_, policy)| *policy)
    }

    #[must_use]
    pub fn shows_chrome(&self, path: &str) -> bool {
        self.classify(path).shows_chrome()
    }
}

/// Drop query, fragment and trailing slash so `/admin/?x=1` reads as `/admin`.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
