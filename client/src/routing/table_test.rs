use super::*;

#[test]
fn unregistered_paths_are_public() {
    assert_eq!(ROUTES.classify("/"), RoutePolicy::Public);
    assert_eq!(ROUTES.classify("/products/kale"), RoutePolicy::Public);
    assert_eq!(ROUTES.classify("/cart"), RoutePolicy::Public);
}

#[test]
fn role_dashboards_are_classified() {
    assert_eq!(ROUTES.classify("/admin"), RoutePolicy::RequiresAdmin);
    assert_eq!(ROUTES.classify("/admin/orders/7"), RoutePolicy::RequiresAdmin);
    assert_eq!(ROUTES.classify("/delivery/route"), RoutePolicy::RequiresDelivery);
    assert_eq!(ROUTES.classify("/seller"), RoutePolicy::RequiresSeller);
}

#[test]
fn prefixes_match_whole_segments_only() {
    assert_eq!(ROUTES.classify("/administrator"), RoutePolicy::Public);
    assert_eq!(ROUTES.classify("/sellers-guide"), RoutePolicy::Public);
}

#[test]
fn query_fragment_and_trailing_slash_are_ignored() {
    assert_eq!(ROUTES.classify("/admin/"), RoutePolicy::RequiresAdmin);
    assert_eq!(ROUTES.classify("/profile?tab=address"), RoutePolicy::RequiresAuth);
    assert_eq!(ROUTES.classify("/login#top"), RoutePolicy::AuthFlow);
}

#[test]
fn auth_flow_pages_match_exactly() {
    assert_eq!(ROUTES.classify("/login"), RoutePolicy::AuthFlow);
    assert_eq!(ROUTES.classify("/verify-email"), RoutePolicy::AuthFlow);
    assert_eq!(ROUTES.classify("/auth/success"), RoutePolicy::AuthFlow);
    assert_eq!(ROUTES.classify("/login/help"), RoutePolicy::Public);
}

#[test]
fn longest_prefix_wins() {
    static TABLE: RouteTable = RouteTable::new(
        &[("/shop", RoutePolicy::RequiresAuth), ("/shop/admin", RoutePolicy::RequiresAdmin)],
        &[],
    );
    assert_eq!(TABLE.classify("/shop/basket"), RoutePolicy::RequiresAuth);
    assert_eq!(TABLE.classify("/shop/admin/users"), RoutePolicy::RequiresAdmin);
}

#[test]
fn auth_flow_allow_list_beats_prefixes() {
    static TABLE: RouteTable =
        RouteTable::new(&[("/account", RoutePolicy::RequiresAuth)], &["/account/login"]);
    assert_eq!(TABLE.classify("/account/login"), RoutePolicy::AuthFlow);
    assert_eq!(TABLE.classify("/account/settings"), RoutePolicy::RequiresAuth);
}

#[test]
fn chrome_hidden_on_auth_flow_and_dashboards() {
    assert!(ROUTES.shows_chrome("/"));
    assert!(ROUTES.shows_chrome("/profile"));
    assert!(!ROUTES.shows_chrome("/login"));
    assert!(!ROUTES.shows_chrome("/admin"));
    assert!(!ROUTES.shows_chrome("/delivery"));
    assert!(!ROUTES.shows_chrome("/seller/products"));
}
