// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::hit::ClientAddress,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{ConnectInfo, FromRequest, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

/// JSON request body; rejections use the API error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct QueryParams<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct PathParam<T>(pub T);

/// Best-effort visitor address. Behind a trusted proxy this is the first
/// `X-Forwarded-For` entry, then `X-Real-IP`; otherwise, and as the fallback,
/// the socket peer. Forwarding headers from any other peer are ignored.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub Option<ClientAddress>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

async fn authenticate(state: &HttpState, token: &str) -> Result<AuthenticatedUser, HttpError> {
    state
        .services
        .user_queries
        .authenticate(token)
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        authenticate(&app_state, header.token()).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => authenticate(&app_state, header.token())
                .await
                .map(|user| Self(Some(user))),
            None => Ok(Self(None)),
        }
    }
}

fn header_address(headers: &HeaderMap, name: &str) -> Option<ClientAddress> {
    let value = headers.get(name)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    ClientAddress::parse(first).ok()
}

impl ClientIp {
    pub fn from_parts(
        headers: &HeaderMap,
        peer: Option<SocketAddr>,
        trusted_proxies: &[IpAddr],
    ) -> Self {
        let peer = peer.map(|addr| ClientAddress::new(addr.ip()));
        let behind_proxy = peer.is_some_and(|p| trusted_proxies.contains(&p.ip()));
        if !behind_proxy {
            return Self(peer);
        }
        let address = header_address(headers, "x-forwarded-for")
            .or_else(|| header_address(headers, "x-real-ip"))
            .or(peer);
        Self(address)
    }
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        let trusted = parts
            .extensions
            .get::<HttpState>()
            .map(|state| state.trusted_proxies.clone())
            .unwrap_or_else(|| Arc::from(Vec::<IpAddr>::new()));
        Ok(Self::from_parts(&parts.headers, peer, &trusted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn loopback() -> Vec<IpAddr> {
        crate::config::loopback_proxies()
    }

    fn forwarded() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        headers
    }

    #[test]
    fn trusted_proxy_forwarded_for_takes_precedence() {
        let peer: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        let ClientIp(address) = ClientIp::from_parts(&forwarded(), Some(peer), &loopback());
        assert_eq!(address.unwrap().to_string(), "203.0.113.7");
    }

    #[test]
    fn trusted_proxy_falls_back_to_real_ip_then_peer() {
        let peer: SocketAddr = "[::1]:9000".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        let ClientIp(address) = ClientIp::from_parts(&headers, Some(peer), &loopback());
        assert_eq!(address.unwrap().to_string(), "198.51.100.2");

        let ClientIp(address) = ClientIp::from_parts(&HeaderMap::new(), Some(peer), &loopback());
        assert_eq!(address.unwrap().to_string(), "::1");
    }

    #[test]
    fn untrusted_peer_cannot_spoof_its_address() {
        let peer: SocketAddr = "192.0.2.50:5000".parse().unwrap();
        let ClientIp(address) = ClientIp::from_parts(&forwarded(), Some(peer), &loopback());
        assert_eq!(address.unwrap().to_string(), "192.0.2.50");
    }

    #[test]
    fn headers_without_a_peer_are_ignored() {
        let ClientIp(address) = ClientIp::from_parts(&forwarded(), None, &loopback());
        assert!(address.is_none());
    }

    #[test]
    fn garbage_headers_fall_back_to_the_peer() {
        let peer: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("unknown"));
        let ClientIp(address) = ClientIp::from_parts(&headers, Some(peer), &loopback());
        assert_eq!(address.unwrap().to_string(), "127.0.0.1");
    }
}
