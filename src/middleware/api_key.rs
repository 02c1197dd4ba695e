use axum::{
    extract::{OriginalUri, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Local, LocalResult, NaiveTime, TimeZone, Utc};

use crate::database::models::User;
use crate::database::repositories::{UsageRepository, UserRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// Gate A: resolve the `x-api-key` header to a user and attach it to the
/// request. Missing header is 401, unknown key 403.
pub async fn api_key_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let api_key = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("API key missing"))?;

    let pool = DatabaseManager::pool().await?;
    let user = UserRepository::new(pool)
        .find_by_api_key(api_key)
        .await?
        .ok_or_else(|| ApiError::forbidden("Invalid API key"))?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Gate B: enforce the resolved user's daily quota. Runs after Gate A.
///
/// Count-then-insert is deliberately not transactional: concurrent requests
/// from one user can overshoot a soft daily cap by the number in flight.
pub async fn rate_limit_middleware(
    OriginalUri(uri): OriginalUri,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<User>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("API key missing"))?;

    let Some(limit) = user.plan.daily_limit() else {
        // Unlimited plan: no counting, no usage record.
        return Ok(next.run(request).await);
    };

    let pool = DatabaseManager::pool().await?;
    let usage = UsageRepository::new(pool);

    let count = usage.count_since(user.id, start_of_today()).await?;
    if count >= limit {
        return Err(ApiError::too_many_requests("Daily API limit exceeded"));
    }

    // The rejected path above writes nothing; an admitted request is
    // recorded before the handler runs.
    usage.insert(user.id, &uri.to_string()).await?;

    Ok(next.run(request).await)
}

/// Midnight of the current day in the server's local timezone. A DST gap at
/// midnight falls back to the current instant.
fn start_of_today() -> DateTime<Utc> {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn start_of_today_is_in_the_past_day() {
        let start = start_of_today();
        let now = Utc::now();
        assert!(start <= now);
        // Never more than a (DST-stretched) day behind.
        assert!(now - start <= Duration::hours(25));
    }

    #[test]
    fn start_of_today_is_local_midnight() {
        let start = start_of_today().with_timezone(&Local);
        assert_eq!(start.time(), NaiveTime::MIN);
    }
}
