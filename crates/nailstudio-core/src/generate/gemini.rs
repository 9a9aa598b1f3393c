//! Gemini `generateContent` client.
//!
//! Sends the photo as an inline-data part followed by the prompt text, and
//! returns the first inline image found in the first candidate.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::GeneratorConfig;
use crate::design::NailDesign;
use crate::error::{NailStudioError, Result};
use crate::io::{ImageMime, ImageRef};
use crate::prompt::build_prompt;

use super::NailArtGenerator;

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    status: Option<String>,
}

/// Request body: the photo, then the instruction.
pub fn build_request(source: &ImageRef, prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    inline_data: Some(InlineData {
                        mime_type: source.mime().as_str().to_string(),
                        data: source.to_base64(),
                    }),
                    text: None,
                },
                Part {
                    inline_data: None,
                    text: Some(prompt.to_string()),
                },
            ],
        }],
    }
}

/// Extract the generated image from a successful response body.
pub fn parse_response(body: &str) -> Result<ImageRef> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .filter(|p| !p.is_empty())
        .ok_or(NailStudioError::NoContent)?;

    if let Some(inline) = parts
        .iter()
        .filter_map(|p| p.inline_data.as_ref())
        .find(|d| !d.data.is_empty())
    {
        let mime = ImageMime::from_mime(&inline.mime_type).unwrap_or(ImageMime::Png);
        return ImageRef::from_base64(&inline.data, mime);
    }

    let text: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    let text = (!text.is_empty()).then(|| text.join(" ").trim().to_string());
    Err(NailStudioError::NoImageData(text))
}

/// Map a non-2xx response to an error, preferring the service's own message.
pub fn api_error(status: u16, body: &str) -> NailStudioError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) if !envelope.error.message.is_empty() => {
                format!("{code}: {}", envelope.error.message)
            }
            _ => envelope.error.message,
        },
        Err(_) => body.trim().chars().take(200).collect(),
    };
    NailStudioError::Api { status, message }
}

pub struct GeminiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client, resolving the API key from config or environment.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: &GeneratorConfig, api_key: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl NailArtGenerator for GeminiClient {
    fn generate(&self, source: &ImageRef, design: &NailDesign) -> Result<ImageRef> {
        let prompt = build_prompt(design);
        let request = build_request(source, &prompt);
        let start = Instant::now();
        info!(model = %self.model, bytes = source.len(), "requesting nail art");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let err = api_error(status.as_u16(), &body);
            error!(model = %self.model, "generation failed: {err}");
            return Err(err);
        }

        let image = parse_response(&body).inspect_err(|e| {
            error!(model = %self.model, "generation returned no image: {e}");
        })?;
        info!(
            model = %self.model,
            bytes = image.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "nail art generated"
        );
        Ok(image)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
