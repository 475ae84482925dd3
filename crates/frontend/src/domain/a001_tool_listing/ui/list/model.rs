use contracts::domain::a001_tool_listing::ListingResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// GET /api/tools
pub async fn fetch_listing() -> Result<ListingResponse, String> {
    let response = Request::get(&api_url("/api/tools"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .json::<ListingResponse>()
        .await
        .map_err(|e| e.to_string());

    into_listing(ok, status, body)
}

/// A 500 carries a listing-shaped body with `error` set; that is an `Err` too,
/// as is a non-2xx status or an unreadable body.
fn into_listing(
    ok: bool,
    status: u16,
    body: Result<ListingResponse, String>,
) -> Result<ListingResponse, String> {
    let data = body.map_err(|e| format!("Failed to parse response (HTTP {}): {}", status, e))?;

    if data.is_error() {
        return Err(format!(
            "HTTP {}: {}",
            status,
            data.error.unwrap_or_default()
        ));
    }
    if !ok {
        return Err(format!("HTTP error: {}", status));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_tool_listing::ToolRecord;

    #[test]
    fn test_ok_body_is_the_listing() {
        let body = ListingResponse::new(
            vec![ToolRecord {
                tool: "ToolX".into(),
                ..Default::default()
            }],
            vec!["AI".into()],
        );
        let listing = into_listing(true, 200, Ok(body.clone())).unwrap();
        assert_eq!(listing, body);
    }

    #[test]
    fn test_error_body_is_a_failure() {
        let body = ListingResponse::failed("Sheets API returned status 503");
        let err = into_listing(false, 500, Ok(body)).unwrap_err();
        assert_eq!(err, "HTTP 500: Sheets API returned status 503");
    }

    #[test]
    fn test_unreadable_body_is_a_failure() {
        let err = into_listing(true, 200, Err("expected value at line 1".into())).unwrap_err();
        assert!(err.starts_with("Failed to parse response (HTTP 200)"));
    }

    #[test]
    fn test_bad_status_without_error_text_is_a_failure() {
        let err = into_listing(false, 502, Ok(ListingResponse::empty())).unwrap_err();
        assert_eq!(err, "HTTP error: 502");
    }
}
