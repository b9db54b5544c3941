use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, USER_AGENT,
};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_0) \
    AppleWebKit/535.11 (KHTML, like Gecko) Chrome/17.0.963.56 Safari/535.11";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_ENCODING: &str = "gzip,deflate,sdch";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// Same header set for every call to the control plane.
pub fn http_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(4);
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_ENCODING,
        HeaderValue::from_static(BROWSER_ACCEPT_ENCODING),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_the_four_browser_headers() {
        let headers = http_headers();
        assert_eq!(headers.len(), 4);
        assert!(headers[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("Mozilla/5.0"));
        assert_eq!(headers[ACCEPT_ENCODING], "gzip,deflate,sdch");
        assert_eq!(headers[ACCEPT_LANGUAGE], "en-US,en;q=0.5");
    }
}
