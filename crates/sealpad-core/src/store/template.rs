//! Self-contained HTML vault documents.
//!
//! The envelope JSON lives inside a single marker element:
//!
//! ```html
//! <script id="vault-data" type="text/encrypted-json">{...}</script>
//! ```
//!
//! An empty element means the document has never been saved.

use crate::error::{Result, SealpadError};

/// Opening tag of the element that carries the envelope.
pub const VAULT_DATA_OPEN: &str = r#"<script id="vault-data" type="text/encrypted-json">"#;

const VAULT_DATA_CLOSE: &str = "</script>";

/// Minimal document used when a new HTML vault is written from scratch.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sealpad vault</title>
</head>
<body>
<p>This file is an encrypted Sealpad vault. Open it with <code>sealpad show</code>.</p>
<script id="vault-data" type="text/encrypted-json"></script>
</body>
</html>
"#;

/// Byte range of the marker element's body.
fn body_range(document: &str) -> Result<(usize, usize)> {
    let open = document.find(VAULT_DATA_OPEN).ok_or_else(|| {
        SealpadError::Format("Document has no vault-data element".to_string())
    })?;
    let start = open + VAULT_DATA_OPEN.len();
    let len = document[start..].find(VAULT_DATA_CLOSE).ok_or_else(|| {
        SealpadError::Format("Vault-data element is not closed".to_string())
    })?;
    Ok((start, start + len))
}

/// Return the embedded envelope JSON, or `None` for a never-saved document.
pub fn extract_envelope(document: &str) -> Result<Option<&str>> {
    let (start, end) = body_range(document)?;
    let body = document[start..end].trim();
    if body.is_empty() {
        Ok(None)
    } else {
        Ok(Some(body))
    }
}

/// Return a copy of `document` with the marker element's body set to `envelope_json`.
///
/// Everything outside the element is preserved byte for byte.
pub fn embed_envelope(document: &str, envelope_json: &str) -> Result<String> {
    if envelope_json.contains(VAULT_DATA_CLOSE) {
        return Err(SealpadError::Format(
            "Envelope JSON cannot contain a closing script tag".to_string(),
        ));
    }
    let (start, end) = body_range(document)?;
    let mut out = String::with_capacity(document.len() + envelope_json.len());
    out.push_str(&document[..start]);
    out.push_str(envelope_json);
    out.push_str(&document[end..]);
    Ok(out)
}
