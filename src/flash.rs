use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

use crate::models::Notice;

const FLASH_COOKIE: &str = "topreel_flash";

pub fn set(jar: SignedCookieJar, notice: Notice) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, notice.as_code()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(5));
    jar.add(cookie)
}

/// Reads and clears the pending notice. Cookies with a bad signature are
/// invisible to the jar and yield `None`.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let notice = Notice::from_code(cookie.value());
    (jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/")), notice)
}
