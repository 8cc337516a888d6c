//! Stateless builders for the two fixed requests.
//!
//! # Design
//! `AbbyClient` holds only the two origins and carries no mutable state
//! between calls. Each `build_*` method produces a complete `HttpRequest`
//! whose headers and body are exactly the captured ones; only the token and
//! the payload are left to the operator.

use crate::error::ConfigError;
use crate::http::{HttpMethod, HttpRequest};

pub const PLANT_BASE_URL: &str = "https://www.beheyabby.com:9330";
pub const PLANT_INFO_PATH: &str = "/abby/plant/plantInfo";
pub const PLANT_HOST: &str = "www.beheyabby.com:9330";

pub const GCL_BASE_URL: &str = "https://api-fd.dutils.com";
pub const GCL_PATH: &str = "/v5/gcl";

pub const GCL_USER_IDENTITY: &str = "APP/com.cl.Abby;2 SYS/iOS;17.1 \
SDI/78f31ab2bf09e1ac3e97160acfd73687a4eaf366 FM/APPLE;iPhone14%2C3 NE/5g;313100 \
Lang/en-US CLV/30248 SDK/SHARESDK;40413;0 P/ TZ_America/New_York";
pub const GCL_USER_AGENT: &str = "UniversalApp/2 CFNetwork/1485 Darwin/23.1.0";

/// Synchronous, stateless client for the plant-info and GCL endpoints.
#[derive(Debug, Clone)]
pub struct AbbyClient {
    plant_base_url: String,
    gcl_base_url: String,
}

impl Default for AbbyClient {
    fn default() -> Self {
        Self {
            plant_base_url: PLANT_BASE_URL.to_string(),
            gcl_base_url: GCL_BASE_URL.to_string(),
        }
    }
}

impl AbbyClient {
    pub fn new(plant_base_url: &str, gcl_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            plant_base_url: normalize_base_url(plant_base_url)?,
            gcl_base_url: normalize_base_url(gcl_base_url)?,
        })
    }

    pub fn build_plant_info(&self, token: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{PLANT_INFO_PATH}", self.plant_base_url),
            headers: header_list(&[
                ("Host", PLANT_HOST),
                ("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8"),
                ("Content-Length", "0"),
                ("Connection", "keep-alive"),
                ("Accept", "*/*"),
                ("Accept-Language", "en-US;q=1"),
                ("token", token),
                ("Accept-Encoding", "gzip, deflate, br"),
            ]),
            body: None,
        }
    }

    /// The payload is sent verbatim: it is already a URL-encoded form body.
    pub fn build_gcl(&self, payload: &str) -> HttpRequest {
        let content_length = payload.len().to_string();
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{GCL_PATH}", self.gcl_base_url),
            headers: header_list(&[
                ("Content-Type", "application/x-www-form-urlencoded"),
                ("User-Identity", GCL_USER_IDENTITY),
                ("Accept", "*/*"),
                ("Accept-Language", "en-US,en;q=0.9"),
                ("Content-Length", &content_length),
                ("Accept-Encoding", "gzip, deflate"),
                ("User-Agent", GCL_USER_AGENT),
            ]),
            body: Some(payload.to_string()),
        }
    }
}

fn header_list(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::InvalidBaseUrl { url: url.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(req: &HttpRequest) -> Vec<&str> {
        req.headers.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn default_client_targets_production_hosts() {
        let client = AbbyClient::default();
        assert_eq!(
            client.build_plant_info("t").url,
            "https://www.beheyabby.com:9330/abby/plant/plantInfo"
        );
        assert_eq!(client.build_gcl("").url, "https://api-fd.dutils.com/v5/gcl");
    }

    #[test]
    fn plant_info_has_fixed_headers_in_order() {
        let req = AbbyClient::default().build_plant_info("abc123");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            names(&req),
            vec![
                "Host",
                "Content-Type",
                "Content-Length",
                "Connection",
                "Accept",
                "Accept-Language",
                "token",
                "Accept-Encoding",
            ]
        );
        assert_eq!(req.header("host"), Some("www.beheyabby.com:9330"));
        assert_eq!(
            req.header("content-type"),
            Some("application/x-www-form-urlencoded;charset=UTF-8")
        );
        assert_eq!(req.header("content-length"), Some("0"));
        assert_eq!(req.header("accept-language"), Some("en-US;q=1"));
        assert_eq!(req.header("token"), Some("abc123"));
        assert_eq!(req.header("accept-encoding"), Some("gzip, deflate, br"));
        assert!(req.body.is_none());
    }

    #[test]
    fn plant_info_sends_empty_token_verbatim() {
        let req = AbbyClient::default().build_plant_info("");
        assert_eq!(req.header("token"), Some(""));
    }

    #[test]
    fn gcl_has_fixed_headers_and_verbatim_body() {
        let payload = "m=QUJD%2Bx%3D%3D&appkey=2f1c";
        let req = AbbyClient::default().build_gcl(payload);
        assert_eq!(
            names(&req),
            vec![
                "Content-Type",
                "User-Identity",
                "Accept",
                "Accept-Language",
                "Content-Length",
                "Accept-Encoding",
                "User-Agent",
            ]
        );
        assert_eq!(req.header("content-type"), Some("application/x-www-form-urlencoded"));
        assert_eq!(
            req.header("user-identity"),
            Some(
                "APP/com.cl.Abby;2 SYS/iOS;17.1 SDI/78f31ab2bf09e1ac3e97160acfd73687a4eaf366 \
                 FM/APPLE;iPhone14%2C3 NE/5g;313100 Lang/en-US CLV/30248 SDK/SHARESDK;40413;0 \
                 P/ TZ_America/New_York"
            )
        );
        assert_eq!(
            req.header("user-agent"),
            Some("UniversalApp/2 CFNetwork/1485 Darwin/23.1.0")
        );
        assert_eq!(req.body.as_deref(), Some(payload));
        assert_eq!(req.body_bytes(), payload.as_bytes());
    }

    #[test]
    fn gcl_content_length_counts_bytes() {
        let payload = "x".repeat(481);
        let req = AbbyClient::default().build_gcl(&payload);
        assert_eq!(req.header("content-length"), Some("481"));

        let req = AbbyClient::default().build_gcl("é");
        assert_eq!(req.header("content-length"), Some("2"));
    }

    #[test]
    fn overridden_base_urls_keep_fixed_paths_and_host() {
        let client = AbbyClient::new("http://127.0.0.1:4000/", "http://127.0.0.1:4001").unwrap();
        let plant = client.build_plant_info("t");
        assert_eq!(plant.url, "http://127.0.0.1:4000/abby/plant/plantInfo");
        assert_eq!(plant.header("host"), Some(PLANT_HOST));
        assert_eq!(client.build_gcl("").url, "http://127.0.0.1:4001/v5/gcl");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        for bad in ["", "ftp://example.com", "example.com", "http://", "http://a b"] {
            let err = AbbyClient::new(bad, GCL_BASE_URL).unwrap_err();
            assert_eq!(err, ConfigError::InvalidBaseUrl { url: bad.to_string() });
        }
    }
}
