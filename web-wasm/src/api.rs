//! REST client for the sentiment analysis backend.
//!
//! Four endpoints: list all documents, fetch one by id, submit a press
//! release, delete one by id. Read endpoints answer with the
//! `{"data": [...]}` envelope; for submit and delete only the HTTP status
//! matters.

use sentimatic_common::{validate_submission, Document, DocumentList, SubmitRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const API_BASE_URL: &str = "http://127.0.0.1:5000";

fn all_url() -> String {
    format!("{}/all", API_BASE_URL)
}

fn document_url(id: &str) -> String {
    format!("{}/?_id={}", API_BASE_URL, id)
}

fn submit_url() -> String {
    format!("{}/submit", API_BASE_URL)
}

fn delete_url(id: &str) -> String {
    format!("{}/delete?_id={}", API_BASE_URL, id)
}

/// Issues one request and hands back the response once the status checks out.
async fn send_request(url: &str, method: &str, body: Option<&str>) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    Ok(resp)
}

async fn read_envelope(resp: Response) -> Result<DocumentList, JsValue> {
    let json = JsFuture::from(resp.json()?).await?;
    let list: DocumentList = serde_wasm_bindgen::from_value(json)?;
    Ok(list)
}

/// Fetches the complete submission history.
pub async fn fetch_all_documents() -> Result<Vec<Document>, JsValue> {
    let resp = send_request(&all_url(), "GET", None).await?;
    let list = read_envelope(resp).await?;
    Ok(list.data)
}

/// Fetches one document by id. The backend wraps the result in the same
/// envelope as `/all`; an unknown id comes back as an empty list.
pub async fn fetch_document(id: &str) -> Result<Option<Document>, JsValue> {
    let resp = send_request(&document_url(id), "GET", None).await?;
    let list = read_envelope(resp).await?;
    Ok(list.data.into_iter().next())
}

/// Submits a press release for analysis. Blank text is rejected here,
/// before any request leaves the browser.
pub async fn submit_text(text: &str) -> Result<(), JsValue> {
    let text = validate_submission(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let body = serde_json::to_string(&SubmitRequest {
        text: text.to_string(),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    send_request(&submit_url(), "POST", Some(&body)).await?;
    Ok(())
}

/// Deletes one document by id.
pub async fn delete_document(id: &str) -> Result<(), JsValue> {
    send_request(&delete_url(id), "GET", None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_url() {
        assert_eq!(all_url(), "http://127.0.0.1:5000/all");
    }

    #[test]
    fn test_document_url_carries_id_parameter() {
        assert_eq!(
            document_url("65a1f0c2b7e4d90017c3a8f1"),
            "http://127.0.0.1:5000/?_id=65a1f0c2b7e4d90017c3a8f1"
        );
    }

    #[test]
    fn test_submit_url() {
        assert_eq!(submit_url(), "http://127.0.0.1:5000/submit");
    }

    #[test]
    fn test_delete_url_carries_id_parameter() {
        assert_eq!(delete_url("abc123"), "http://127.0.0.1:5000/delete?_id=abc123");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_submit_rejects_blank_text_before_any_request() {
        assert!(submit_text("").await.is_err());
        assert!(submit_text("  \n\t ").await.is_err());
    }
}
