// Session key carried by HTTP clients in a cookie.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

use crate::modules::work_sessions::core::open_session::SessionKey;

pub const SESSION_COOKIE: &str = "work_timer_session";

pub fn read_session_key(headers: &HeaderMap) -> Option<SessionKey> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| SessionKey::new(value))
}

pub fn session_cookie(key: &SessionKey) -> String {
    format!("{SESSION_COOKIE}={key}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod session_cookie_tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    fn headers_with_cookie(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[rstest]
    #[case("work_timer_session=abc")]
    #[case("theme=dark; work_timer_session=abc")]
    #[case("theme=dark;work_timer_session=abc; lang=en")]
    fn it_should_read_the_session_key_among_other_cookies(#[case] cookie: &'static str) {
        assert_eq!(
            read_session_key(&headers_with_cookie(cookie)),
            Some(SessionKey::new("abc"))
        );
    }

    #[rstest]
    #[case("theme=dark")]
    #[case("work_timer_session=")]
    #[case("work_timer_session")]
    fn it_should_not_find_a_session_key(#[case] cookie: &'static str) {
        assert_eq!(read_session_key(&headers_with_cookie(cookie)), None);
    }

    #[rstest]
    fn it_should_not_find_a_session_key_without_cookies() {
        assert_eq!(read_session_key(&HeaderMap::new()), None);
    }

    #[rstest]
    fn it_should_build_a_cookie_that_reads_back() {
        let key = SessionKey::new("abc");
        let cookie = session_cookie(&key);
        assert_eq!(cookie, "work_timer_session=abc; Path=/; HttpOnly; SameSite=Lax");
    }
}
