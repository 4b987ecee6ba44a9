// COS Rust Library for Tencent Cloud Object Storage Compatible Services
// Copyright 2025 the cos-rs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! URL definitions for service endpoints and request targets

use crate::cos::error::Error;
use crate::cos::multimap_ext::{Multimap, MultimapExt};
use crate::cos::utils::match_hostname;
use http::Method;
use http::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // Service endpoint of the form cos.<region>.myqcloud.com
    static ref COS_ENDPOINT_REGEX: Regex =
        Regex::new(r"^cos\.([a-z\d][a-z\d-]*)\.myqcloud\.com$").unwrap();
}

/// Represents an HTTP URL
#[derive(Clone, Debug)]
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            write!(f, "{}:{}", self.host, self.port)?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Checks whether the host is a COS service endpoint and returns the region
/// encoded in it.
pub fn match_cos_endpoint(host: &str) -> Option<String> {
    if !match_hostname(host) {
        return None;
    }
    COS_ENDPOINT_REGEX
        .captures(host.to_lowercase().as_str())
        .map(|c| c[1].to_string())
}

/// Represents the base URL of a service endpoint
#[derive(Clone, Debug)]
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Region encoded in the endpoint host, empty when the host carries none.
    pub region: String,
    pub virtual_style: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: String::from("127.0.0.1"),
            port: 9000,
            region: String::new(),
            virtual_style: false,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    /// Convert a string to a BaseUrl.
    ///
    /// Enables use of the [`str::parse`] method to create a [`BaseUrl`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cos_rs::cos::http::BaseUrl;
    /// use std::str::FromStr;
    ///
    /// // Get base URL from a service endpoint; the region is taken from the host
    /// let base_url = "https://cos.ap-guangzhou.myqcloud.com".parse::<BaseUrl>().unwrap();
    /// // Get base URL from host:port
    /// let base_url: BaseUrl = "localhost:9000".parse().unwrap();
    /// // Get base URL from IPv6 address
    /// let base_url: BaseUrl = "[0:0:0:0:0:ffff:c0a8:7c3f]:9000".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(Error::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) => h,
            _ => {
                return Err(Error::InvalidBaseUrl("valid host must be provided".into()));
            }
        };

        let ipv6host = "[".to_string() + host + "]";
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = &ipv6host;
        }

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(Error::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(Error::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let region = match_cos_endpoint(host).unwrap_or_default();
        let virtual_style = !region.is_empty();

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
            region,
            virtual_style,
        })
    }
}

impl BaseUrl {
    /// Checks whether the base URL is a COS service endpoint
    pub fn is_cos_host(&self) -> bool {
        !self.region.is_empty()
    }

    /// Builds the target URL of a request from the base URL for the given
    /// bucket and query parameters.
    pub fn build_url(
        &self,
        _method: &Method,
        query: &Multimap,
        bucket_name: Option<&str>,
    ) -> Result<Url, Error> {
        let mut url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        };

        let bucket: &str = match bucket_name {
            None => return Ok(url),
            Some(v) => v,
        };

        // A '.' in the bucket name breaks wildcard TLS certificate
        // validation, so fall back to path style over HTTPS.
        let enforce_path_style = bucket.contains('.') && self.https;

        let mut host = String::from(&url.host);
        let mut path = String::new();

        if enforce_path_style || !self.virtual_style {
            path.push('/');
            path.push_str(bucket);
        } else {
            host = format!("{}.{}", bucket, url.host);
        }

        if path.is_empty() {
            path.push('/');
        }

        url.host = host;
        url.path = path;

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_region_extraction() {
        let base_url = "https://cos.ap-guangzhou.myqcloud.com"
            .parse::<BaseUrl>()
            .unwrap();
        assert_eq!(base_url.region, "ap-guangzhou");
        assert!(base_url.virtual_style);
        assert!(base_url.is_cos_host());

        let base_url = "http://localhost:9000".parse::<BaseUrl>().unwrap();
        assert_eq!(base_url.region, "");
        assert!(!base_url.virtual_style);
        assert!(!base_url.is_cos_host());
    }

    #[test]
    fn test_base_url_rejects_bad_input() {
        assert!("ftp://cos.ap-guangzhou.myqcloud.com".parse::<BaseUrl>().is_err());
        assert!("https://cos.ap-guangzhou.myqcloud.com/some/path"
            .parse::<BaseUrl>()
            .is_err());
        assert!("https://cos.ap-guangzhou.myqcloud.com?foo=bar"
            .parse::<BaseUrl>()
            .is_err());
    }

    #[test]
    fn test_base_url_default_ports_dropped() {
        let base_url = "https://cos.ap-guangzhou.myqcloud.com:443"
            .parse::<BaseUrl>()
            .unwrap();
        let url = base_url
            .build_url(&Method::GET, &Multimap::new(), None)
            .unwrap();
        assert_eq!(url.host_header_value(), "cos.ap-guangzhou.myqcloud.com");
    }

    #[test]
    fn test_build_url_virtual_style() {
        let base_url = "https://cos.ap-guangzhou.myqcloud.com"
            .parse::<BaseUrl>()
            .unwrap();
        let mut query = Multimap::new();
        query.add("cors", "");
        let url = base_url
            .build_url(&Method::GET, &query, Some("examplebucket-1250000000"))
            .unwrap();
        assert_eq!(
            url.to_string(),
            "https://examplebucket-1250000000.cos.ap-guangzhou.myqcloud.com/?cors="
        );
    }

    #[test]
    fn test_build_url_without_bucket_is_root() {
        let base_url = "https://cos.ap-guangzhou.myqcloud.com"
            .parse::<BaseUrl>()
            .unwrap();
        let mut query = Multimap::new();
        query.add("uploads", "");
        let url = base_url.build_url(&Method::GET, &query, None).unwrap();
        assert_eq!(url.path, "/");
        assert_eq!(
            url.to_string(),
            "https://cos.ap-guangzhou.myqcloud.com/?uploads="
        );
    }

    #[test]
    fn test_build_url_path_style() {
        let base_url = "http://localhost:9000".parse::<BaseUrl>().unwrap();
        let url = base_url
            .build_url(
                &Method::GET,
                &Multimap::new(),
                Some("examplebucket-1250000000"),
            )
            .unwrap();
        assert_eq!(
            url.to_string(),
            "http://localhost:9000/examplebucket-1250000000"
        );
    }

    #[test]
    fn test_build_url_dotted_bucket_uses_path_style() {
        let base_url = "https://cos.ap-guangzhou.myqcloud.com"
            .parse::<BaseUrl>()
            .unwrap();
        let url = base_url
            .build_url(&Method::GET, &Multimap::new(), Some("my.bucket"))
            .unwrap();
        assert_eq!(url.host, "cos.ap-guangzhou.myqcloud.com");
        assert_eq!(url.path, "/my.bucket");
    }
}
