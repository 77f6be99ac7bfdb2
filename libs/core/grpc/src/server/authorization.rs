//! Bearer-token authorization gate for inbound gRPC calls.
//!
//! Every call is classified by its full method path (`/package.Service/Method`):
//!
//! - **public** methods pass through without any credential,
//! - **admin** methods need a valid token whose role is `admin` (any case),
//! - everything else needs a valid token with any role.
//!
//! Rejected calls are answered with a gRPC status and never reach the service.

use core_auth::{Claims, TokenCodec};
use futures::future::BoxFuture;
use http::{Request, Response};
use std::collections::HashSet;
use std::sync::Arc;
use std::task::{Context, Poll};
use tonic::Status;
use tonic::metadata::MetadataMap;
use tower::{Layer, Service};
use tracing::{debug, warn};

const AUTHORIZATION: &str = "authorization";
const BEARER_PREFIX: &str = "bearer ";

/// How a method is gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodClass {
    Public,
    Authenticated,
    Admin,
}

/// Immutable access rules: the token codec plus the public and admin method sets.
#[derive(Debug)]
pub struct AccessPolicy {
    codec: TokenCodec,
    public: HashSet<String>,
    admin: HashSet<String>,
}

impl AccessPolicy {
    pub fn builder(codec: TokenCodec) -> AccessPolicyBuilder {
        AccessPolicyBuilder {
            codec,
            public: HashSet::new(),
            admin: HashSet::new(),
        }
    }

    pub fn classify(&self, method: &str) -> MethodClass {
        if self.public.contains(method) {
            MethodClass::Public
        } else if self.admin.contains(method) {
            MethodClass::Admin
        } else {
            MethodClass::Authenticated
        }
    }

    /// Decide whether a call to `method` carrying `metadata` may proceed.
    ///
    /// Returns `Ok(None)` for public methods, `Ok(Some(claims))` for admitted
    /// authenticated calls and the rejection status otherwise.
    ///
    /// `metadata` is `None` only for callers outside the HTTP/2 transport; the
    /// layer always passes the request headers.
    pub fn authorize(
        &self,
        method: &str,
        metadata: Option<&MetadataMap>,
    ) -> Result<Option<Claims>, Status> {
        let class = self.classify(method);
        if class == MethodClass::Public {
            return Ok(None);
        }

        let metadata = metadata.ok_or_else(|| Status::unauthenticated("metadata missing"))?;

        let raw = metadata
            .get(AUTHORIZATION)
            .map(|value| value.to_str().map_err(|_| Status::unauthenticated("invalid token")))
            .transpose()?
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Status::unauthenticated("token missing"))?;

        let claims = self
            .codec
            .verify(strip_bearer(raw))
            .map_err(|_| Status::unauthenticated("invalid token"))?;

        if class == MethodClass::Admin && !claims.is_admin() {
            return Err(Status::permission_denied(
                "access denied: admin role required",
            ));
        }

        Ok(Some(claims))
    }
}

/// Strip a case-insensitive `Bearer ` prefix when something follows it.
fn strip_bearer(value: &str) -> &str {
    match value.get(..BEARER_PREFIX.len()) {
        Some(prefix)
            if value.len() > BEARER_PREFIX.len() && prefix.eq_ignore_ascii_case(BEARER_PREFIX) =>
        {
            &value[BEARER_PREFIX.len()..]
        }
        _ => value,
    }
}

pub struct AccessPolicyBuilder {
    codec: TokenCodec,
    public: HashSet<String>,
    admin: HashSet<String>,
}

impl AccessPolicyBuilder {
    /// Methods callable without a credential.
    pub fn public<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public.extend(methods.into_iter().map(Into::into));
        self
    }

    /// Methods restricted to the `admin` role.
    pub fn admin<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin.extend(methods.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> AccessPolicy {
        AccessPolicy {
            codec: self.codec,
            public: self.public,
            admin: self.admin,
        }
    }
}

/// Tower layer applying an [`AccessPolicy`] to every call of the wrapped server.
#[derive(Clone, Debug)]
pub struct AuthorizationLayer {
    policy: Arc<AccessPolicy>,
}

impl AuthorizationLayer {
    pub fn new(policy: AccessPolicy) -> Self {
        Self::from_arc(Arc::new(policy))
    }

    pub fn from_arc(policy: Arc<AccessPolicy>) -> Self {
        Self { policy }
    }
}

impl<S> Layer<S> for AuthorizationLayer {
    type Service = AuthorizationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthorizationService {
            inner,
            policy: Arc::clone(&self.policy),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthorizationService<S> {
    inner: S,
    policy: Arc<AccessPolicy>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for AuthorizationService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let method = req.uri().path();
        let metadata = MetadataMap::from_headers(req.headers().clone());

        match self.policy.authorize(method, Some(&metadata)) {
            Ok(Some(claims)) => {
                debug!(method, subject = %claims.email, role = %claims.role, "call authorized");
            }
            Ok(None) => {}
            Err(status) => {
                warn!(
                    method,
                    code = ?status.code(),
                    reason = status.message(),
                    "call rejected"
                );
                return Box::pin(futures::future::ready(Ok(status.into_http())));
            }
        }

        Box::pin(self.inner.call(req))
    }
}
