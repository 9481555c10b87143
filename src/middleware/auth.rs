use crate::core::AppError;
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use sqlx::PgPool;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

/// Account id of the authenticated session, stored in request extensions by
/// `SessionAuth` and extracted by handlers.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req.extensions().get::<UserId>().copied();
        ready(user_id.ok_or_else(|| Error::from(AppError::unauthorized("No active session"))))
    }
}

/// Session token authentication middleware.
///
/// Every route except the public ones requires a bearer token issued by
/// `POST /auth/login`. Valid sessions put the owning account id into the
/// request extensions; expired or unknown tokens get a 401.
pub struct SessionAuth {
    pool: PgPool,
}

impl SessionAuth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            pool: self.pool.clone(),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    pool: PgPool,
}

fn is_public_path(path: &str) -> bool {
    matches!(path, "/" | "/health" | "/auth/login")
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let pool = self.pool.clone();

        Box::pin(async move {
            if is_public_path(req.path()) {
                return svc.call(req).await;
            }

            let token = bearer_token(&req)
                .ok_or_else(|| Error::from(AppError::unauthorized("Missing bearer token")))?;

            let session = validate_session(&pool, &token).await.map_err(Error::from)?;

            req.extensions_mut().insert(UserId(session.account_id));

            svc.call(req).await
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct SessionRecord {
    account_id: Uuid,
    expires_at: DateTime<Utc>,
}

async fn validate_session(pool: &PgPool, token: &str) -> crate::core::Result<SessionRecord> {
    let token = Uuid::parse_str(token)
        .map_err(|_| AppError::unauthorized("Invalid session token"))?;

    let session = sqlx::query_as::<_, SessionRecord>(
        r#"
        SELECT account_id, expires_at
        FROM sessions
        WHERE token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Database)?
    .ok_or_else(|| AppError::unauthorized("Invalid session token"))?;

    if session.expires_at <= Utc::now() {
        return Err(AppError::unauthorized("Session expired"));
    }

    Ok(session)
}
