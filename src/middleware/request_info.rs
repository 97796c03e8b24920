use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use super::request_id::RequestIdExt;

/// Client details recorded next to audit entries
#[derive(Clone, Debug)]
pub struct RequestInfo {
    pub user_agent: String,
    pub ip_address: String,
    pub method: String,
    pub path: String,
    pub correlation_id: Option<String>,
}

impl RequestInfo {
    pub fn from_http_request(req: &HttpRequest) -> Self {
        RequestInfo {
            user_agent: req
                .headers()
                .get("user-agent")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("unknown")
                .to_string(),
            ip_address: req
                .connection_info()
                .realip_remote_addr()
                .unwrap_or("unknown")
                .to_string(),
            method: req.method().to_string(),
            path: req.path().to_string(),
            correlation_id: req.correlation_id(),
        }
    }
}

impl FromRequest for RequestInfo {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(RequestInfo::from_http_request(req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_info_reads_headers() {
        let req = TestRequest::put()
            .uri("/api/leaves/1")
            .insert_header(("user-agent", "ems-tests"))
            .insert_header(("x-forwarded-for", "10.0.0.7"))
            .to_http_request();

        let info = RequestInfo::from_http_request(&req);

        assert_eq!(info.user_agent, "ems-tests");
        assert_eq!(info.ip_address, "10.0.0.7");
        assert_eq!(info.method, "PUT");
        assert_eq!(info.path, "/api/leaves/1");
    }
}
