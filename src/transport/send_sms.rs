use crate::domain::{KnownStatusCode, MessageText, Recipients, SendRequest};

const FIELD_DELIMITER: char = '|';

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response body has no status token")]
    MissingStatusToken,

    #[error("status token {token:?} is not an unsigned integer")]
    InvalidStatusToken { token: String },
}

/// `|`-delimited gateway reply split into the status token and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReply {
    /// Leading field, trimmed; ASCII digits only.
    pub status_token: String,
    pub extra_fields: Vec<String>,
}

impl SendReply {
    /// Table entry for the token. Only the canonical spelling of a code matches, so
    /// `01101` is unknown while `1101` is `Success`.
    pub fn known_status(&self) -> Option<KnownStatusCode> {
        if self.status_token.len() > 1 && self.status_token.starts_with('0') {
            return None;
        }
        self.status_token
            .parse::<i32>()
            .ok()
            .and_then(KnownStatusCode::from_code)
    }
}

pub fn encode_send_form(request: &SendRequest) -> Vec<(String, String)> {
    vec![
        (
            Recipients::FIELD.to_owned(),
            request.numbers().as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
    ]
}

pub fn decode_send_response(body: &str) -> Result<SendReply, TransportError> {
    let mut fields = body.split(FIELD_DELIMITER);
    let token = fields.next().unwrap_or_default().trim();
    if token.is_empty() {
        return Err(TransportError::MissingStatusToken);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TransportError::InvalidStatusToken {
            token: token.to_owned(),
        });
    }

    Ok(SendReply {
        status_token: token.to_owned(),
        extra_fields: fields.map(str::to_owned).collect(),
    })
}
