// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::net::IpAddr;
use tokio::net::lookup_host;
use url::{Host, Url};

use crate::engines::traits::FetchError;

/// 验证调用方提供的 URL
///
/// 只允许 http/https。`block_private_hosts` 为真时解析主机名，
/// 并拒绝环回、私有、链路本地和组播地址 (防止 SSRF)
pub async fn validate_url(url_str: &str, block_private_hosts: bool) -> Result<Url, FetchError> {
    let url = Url::parse(url_str.trim()).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "unsupported scheme: {}",
            url.scheme()
        )));
    }

    let host = url
        .host()
        .ok_or_else(|| FetchError::InvalidUrl("missing host".to_string()))?;

    if !block_private_hosts {
        return Ok(url);
    }

    let addrs: Vec<IpAddr> = match host {
        Host::Ipv4(ip) => vec![IpAddr::V4(ip)],
        Host::Ipv6(ip) => vec![IpAddr::V6(ip)],
        Host::Domain(domain) => {
            if domain.eq_ignore_ascii_case("localhost") {
                return Err(FetchError::Blocked("localhost is not allowed".to_string()));
            }
            let port = url.port_or_known_default().unwrap_or(80);
            lookup_host((domain, port))
                .await
                .map_err(|e| FetchError::InvalidUrl(format!("cannot resolve {}: {}", domain, e)))?
                .map(|addr| addr.ip())
                .collect()
        }
    };

    if let Some(ip) = addrs.into_iter().find(|ip| is_private_ip(*ip)) {
        return Err(FetchError::Blocked(format!(
            "private address is not allowed: {}",
            ip
        )));
    }

    Ok(url)
}

fn is_private_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4) => {
            ipv4.is_private()
                || ipv4.is_loopback()
                || ipv4.is_link_local()
                || ipv4.is_multicast()
                || ipv4.is_unspecified()
        }
        IpAddr::V6(ipv6) => {
            let first = ipv6.segments()[0];
            ipv6.is_loopback()
                || ipv6.is_unspecified()
                // Unique Local Address (fc00::/7)
                || (first & 0xfe00) == 0xfc00
                // Link-local (fe80::/10)
                || (first & 0xffc0) == 0xfe80
                // Multicast (ff00::/8)
                || (first & 0xff00) == 0xff00
        }
    }
}
