/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const API_VERSION_COMPONENT: &str = "v1";
pub const API_VERSION_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", API_VERSION_COMPONENT);

pub const PROXY_ROUTE_COMPONENT: &str = "proxy";
pub const PROXY_ROUTE_PREFIX: &str =
    const_str::concat!(API_VERSION_PREFIX, "/", PROXY_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";

/// Media type of served calendar feeds
pub const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// `User-Agent` sent to upstream feed servers unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = concat!("icsfix/", env!("CARGO_PKG_VERSION"));
