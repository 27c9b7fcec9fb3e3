use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynIdentityService, errors::HttpError};

/// Pulls the token from the `token` cookie, or from the `Authorization`
/// header with or without a `Bearer ` prefix.
fn extract_token(cookie_jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .map(|auth_value| {
                    auth_value
                        .strip_prefix("Bearer ")
                        .unwrap_or(auth_value)
                        .trim()
                        .to_string()
                })
        })
        .filter(|token| !token.is_empty())
}

pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(identity): Extension<DynIdentityService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = extract_token(&cookie_jar, &req).ok_or_else(|| {
        HttpError::Unauthorized("You are not logged in, please provide token".to_string())
    })?;

    let user = identity.authenticate(&token).await?;

    req.extensions_mut().insert(user.id.clone());
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn request_with_auth(value: &str) -> Request<Body> {
        let mut req = Request::new(Body::empty());
        req.headers_mut()
            .insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        req
    }

    #[test]
    fn header_token_with_and_without_bearer() {
        let jar = CookieJar::new();
        assert_eq!(
            extract_token(&jar, &request_with_auth("Bearer abc")).as_deref(),
            Some("abc")
        );
        assert_eq!(
            extract_token(&jar, &request_with_auth("abc")).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn cookie_wins_over_header() {
        let jar = CookieJar::new().add(axum_extra::extract::cookie::Cookie::new("token", "cookie"));
        assert_eq!(
            extract_token(&jar, &request_with_auth("Bearer header")).as_deref(),
            Some("cookie")
        );
    }

    #[test]
    fn blank_header_is_no_token() {
        let jar = CookieJar::new();
        assert!(extract_token(&jar, &request_with_auth("Bearer ")).is_none());
        assert!(extract_token(&jar, &Request::new(Body::empty())).is_none());
    }
}
