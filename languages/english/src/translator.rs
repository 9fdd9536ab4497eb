use async_trait::async_trait;
use lexiscope_translator::{LanguageCode, TranslateError, Translation, Translator};

/// DeepL HTTP translation provider
#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    async fn request(&self, params: &[(&str, &str)]) -> Result<serde_json::Value, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })
    }
}

/// DeepL wants upper-case primary tags ("EN", "RU")
fn deepl_code(code: &str) -> String {
    code.split(['-', '_'])
        .next()
        .unwrap_or(code)
        .to_uppercase()
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let source = deepl_code(&from);
        let target = deepl_code(&to);
        let params = [
            ("text", text),
            ("source_lang", source.as_str()),
            ("target_lang", target.as_str()),
        ];

        let json = self.request(&params).await?;

        let translated_text = json["translations"]
            .get(0)
            .and_then(|t| t["text"].as_str())
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        // Unchanged output means the provider could not place the text in `from`
        if translated_text.trim() == text.trim() {
            tracing::debug!("DeepL returned the input unchanged ({} -> {})", from, to);
            return Err(TranslateError::NotDetermined);
        }

        Ok(Translation {
            text: translated_text.to_string(),
            from,
            to,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let params = [("text", text), ("target_lang", "EN")];

        let json = self.request(&params).await?;

        let detected = json["translations"]
            .get(0)
            .and_then(|t| t["detected_source_language"].as_str())
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or(TranslateError::NotDetermined)?;

        Ok(detected.to_lowercase())
    }
}
