use reqwest::Url;

use crate::error::EsploraError;

/// Validate the explorer base URL and normalise it for path concatenation.
///
/// Only `http` and `https` are accepted. A trailing slash is dropped so
/// that `<base><path>` never produces `//`.
pub(super) fn parse_base_url(base_url: &str) -> Result<String, EsploraError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| {
        EsploraError::InvalidUrl(format!("`{base_url}`: expected HTTP(S) URL ({e})"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_owned()),
        other => Err(EsploraError::InvalidUrl(format!(
            "unsupported scheme `{other}`; expected http or https"
        ))),
    }
}
