use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::database::repositories::AdminRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// Bearer-token gate for admin routes. Only existence of the admin is
/// checked; the identity is not attached to the request.
pub async fn admin_auth_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("Authorization header missing or malformed"))?;

    let claims = auth::validate_jwt(&token)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

    let pool = DatabaseManager::pool().await?;
    let admin = AdminRepository::new(pool).find_by_id(claims.sub).await?;

    if admin.is_none() {
        return Err(ApiError::forbidden("Admin not found."));
    }

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    if token.trim().is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_yields_no_token() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_none());
    }

    #[test]
    fn non_bearer_scheme_is_malformed() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert!(extract_bearer_token(&headers).is_none());
    }

    #[test]
    fn empty_bearer_token_is_malformed() {
        let headers = headers_with_auth("Bearer ");
        assert!(extract_bearer_token(&headers).is_none());
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
    }
}
