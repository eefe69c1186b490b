//! Refresh token cookie construction.
//!
//! The opaque refresh token only ever travels inside this httpOnly cookie;
//! client-side script cannot read it, and the JSON bodies never carry it.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};

use ah_shared::config::CookieConfig;

/// Build the refresh cookie carrying a newly issued token
pub fn refresh_cookie(config: &CookieConfig, value: String) -> Cookie<'static> {
    Cookie::build(config.name.clone(), value)
        .http_only(true)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .max_age(Duration::seconds(config.max_age))
        .path(config.path.clone())
        .finish()
}

/// Build an expired cookie that removes the refresh token from the browser
pub fn clear_refresh_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(config.name.clone(), "")
        .http_only(true)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .max_age(Duration::ZERO)
        .path(config.path.clone())
        .finish()
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_lowercase().as_str() {
        "none" => SameSite::None,
        "strict" => SameSite::Strict,
        _ => SameSite::Lax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ah_shared::config::Environment;

    #[test]
    fn test_refresh_cookie_attributes() {
        let config = CookieConfig::for_environment(Environment::Development);
        let cookie = refresh_cookie(&config, "opaque".to_string());

        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.value(), "opaque");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn test_production_cookie_is_cross_site() {
        let config = CookieConfig::for_environment(Environment::Production);
        let cookie = refresh_cookie(&config, "opaque".to_string());

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let config = CookieConfig::for_environment(Environment::Development);
        let cookie = clear_refresh_cookie(&config);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
