use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::RequestBuilder;
use std::time::{SystemTime, UNIX_EPOCH};

const REQUEST_ID: &str = "x-request-id";

/// Correlation id for one backend call, e.g. `pm-get_market-1700000000-42`.
pub fn request_id(op: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("pm-{op}-{}-{}", now.as_secs(), now.subsec_nanos())
}

/// Headers every CLOB request carries.
pub fn tag_request(builder: RequestBuilder, request_id: &str) -> RequestBuilder {
    builder
        .header(REQUEST_ID, request_id)
        .header(ACCEPT, "application/json")
        .header(USER_AGENT, concat!("polymarket-mcp/", env!("CARGO_PKG_VERSION")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_name_the_operation() {
        assert!(request_id("get_markets").starts_with("pm-get_markets-"));
    }

    #[test]
    fn tags_outgoing_requests() {
        let client = reqwest::Client::new();
        let req = tag_request(client.get("http://localhost/"), "abc").build().unwrap();
        assert_eq!(req.headers()[REQUEST_ID], "abc");
        assert_eq!(req.headers()[ACCEPT], "application/json");
        assert!(req.headers()[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("polymarket-mcp/"));
    }
}
