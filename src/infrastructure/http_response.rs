// HTTP response utilities for HTML pages with optional Brotli encoding
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use async_compression::tokio::bufread::BrotliEncoder;
use tokio::io::AsyncReadExt;

/// True when the client lists `br` in Accept-Encoding with a non-zero weight
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(|entry| encoding_accepted(entry, "br")))
        .unwrap_or(false)
}

// Entry form: `name[;q=weight]`, a missing or unparsable weight counts as 1
fn encoding_accepted(entry: &str, encoding: &str) -> bool {
    let mut parts = entry.split(';');
    let name = parts.next().unwrap_or("").trim();
    if !name.eq_ignore_ascii_case(encoding) {
        return false;
    }

    let weight = parts
        .filter_map(|param| param.trim().strip_prefix("q="))
        .find_map(|q| q.trim().parse::<f32>().ok())
        .unwrap_or(1.0);

    weight > 0.0
}

/// Build an HTML response, compressing the body with Brotli if requested
pub async fn html_response(html: String, compress: bool) -> Result<Response<Body>, StatusCode> {
    let raw = html.into_bytes();

    let (body_bytes, content_encoding) = if compress {
        let cursor = std::io::Cursor::new(raw.as_slice());
        let mut encoder = BrotliEncoder::new(cursor);
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!("Compressed page: {} → {} bytes", raw.len(), compressed.len());
        (compressed, Some("br"))
    } else {
        (raw, None)
    };

    let content_length = HeaderValue::from_str(&body_bytes.len().to_string())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CONTENT_LENGTH, content_length)
        .header(header::VARY, "accept-encoding");

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        assert!(accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        assert!(!accepts_brotli(&headers));
    }

    #[test]
    fn test_accepts_brotli_respects_weight() {
        let mut headers = HeaderMap::new();

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, br;q=0"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("br; q=0.0, gzip;q=1"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip;q=1.0, br;q=0.5"));
        assert!(accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("brotli-ish"));
        assert!(!accepts_brotli(&headers));
    }

    #[tokio::test]
    async fn test_html_response_headers() {
        let plain = html_response("<p>East Ham</p>".to_string(), false).await.unwrap();
        assert_eq!(plain.headers()[header::CONTENT_LENGTH], "15");
        assert!(plain.headers().get(header::CONTENT_ENCODING).is_none());

        let compressed = html_response("<p>East Ham</p>".repeat(50), true).await.unwrap();
        assert_eq!(compressed.headers()[header::CONTENT_ENCODING], "br");
        assert_eq!(
            compressed.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }
}
