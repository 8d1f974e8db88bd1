//! One-shot client for the generative-language API.
//!
//! Each operation is a single best-effort round trip with no retry. Any
//! failure (missing credential, network error, bad response shape) is
//! logged and mapped to the fixed fallback, never surfaced to the screen.

use tourestea_common::insight::{
    self, GenerateContentRequest, GenerateContentResponse, SentimentJudgment, INSIGHT_MODEL,
    SUMMARY_EMPTY, SUMMARY_FALLBACK,
};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// API credential baked in at build time.
fn api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|k| !k.is_empty())
}

/// One-sentence summary of a review.
pub async fn summarize(review: &str) -> String {
    let request = GenerateContentRequest::text(insight::summary_prompt(review));
    match generate(&request).await {
        Ok(text) if text.trim().is_empty() => SUMMARY_EMPTY.to_string(),
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("summary request failed: {err}");
            SUMMARY_FALLBACK.to_string()
        }
    }
}

/// Structured Good/Bad judgment of a piece of review text.
pub async fn classify_sentiment(text: &str) -> SentimentJudgment {
    let request = GenerateContentRequest::json(insight::sentiment_prompt(text));
    let raw = match generate(&request).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("sentiment request failed: {err}");
            return SentimentJudgment::fallback();
        }
    };
    match insight::parse_sentiment_response(&raw) {
        Ok(judgment) => judgment,
        Err(err) => {
            tracing::warn!("sentiment response rejected: {err}");
            SentimentJudgment::fallback()
        }
    }
}

/// Run one generateContent round trip and pull out the text payload.
async fn generate(request: &GenerateContentRequest) -> Result<String, String> {
    let key = api_key().ok_or("no API credential configured")?;
    let url = format!("{API_BASE}/{INSIGHT_MODEL}:generateContent?key={key}");
    let body = serde_json::to_string(request).map_err(|e| e.to_string())?;
    let raw = post_json(&url, &body).await?;
    let response: GenerateContentResponse =
        serde_json::from_str(&raw).map_err(|e| format!("bad response body: {e}"))?;
    response
        .first_text()
        .map(str::to_string)
        .ok_or_else(|| "response carried no text".to_string())
}

// ─── HTTP helper (WASM) ──────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn post_json(url: &str, body: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web_sys::RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let window = web_sys::window().ok_or("No window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "Response is not a Response object".to_string())?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| format!("Failed to get text: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to read body: {:?}", e))?;

    let text_str = text
        .as_string()
        .ok_or("Response body is not a string".to_string())?;

    let status = resp.status();
    if status >= 400 {
        return Err(format!("HTTP {} from the insight API: {}", status, text_str));
    }

    Ok(text_str)
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn post_json(_url: &str, _body: &str) -> Result<String, String> {
    Err("Insight client only available in WASM".to_string())
}
