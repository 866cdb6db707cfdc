use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, net::IpAddr};

/// Network address of a visitor, used to count each reader once per article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientAddress(IpAddr);

impl ClientAddress {
    pub fn new(addr: IpAddr) -> Self {
        // store IPv4-mapped IPv6 peers in their IPv4 form
        let addr = match addr {
            IpAddr::V6(v6) => v6
                .to_ipv4_mapped()
                .map(IpAddr::V4)
                .unwrap_or(IpAddr::V6(v6)),
            v4 => v4,
        };
        Self(addr)
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        value
            .trim()
            .parse::<IpAddr>()
            .map(Self::new)
            .map_err(|_| DomainError::Validation(format!("'{value}' is not an IP address")))
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
