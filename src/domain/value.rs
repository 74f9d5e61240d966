use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient number(s) for a single send (`number`).
///
/// The value is opaque: several numbers may be packed into one field in whatever
/// format the gateway accepts (usually comma-separated). Empty values are allowed and
/// forwarded; the gateway reports them with status `1002`.
pub struct Recipients(String);

impl Recipients {
    /// Form field name used by the gateway (`number`).
    pub const FIELD: &'static str = "number";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the recipients exactly as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Not validated on the client; the gateway answers `1003` for empty or invalid text.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by the gateway (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway account user name (`username`).
pub struct Username(String);

impl Username {
    /// Form field name used by the gateway (`username`).
    pub const FIELD: &'static str = "username";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Gateway account password (`password`).
///
/// `Debug` output is redacted.
pub struct Password(String);

impl Password {
    /// Form field name used by the gateway (`password`).
    pub const FIELD: &'static str = "password";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Absolute `http`/`https` URL of the gateway send endpoint.
///
/// Invariant: parses as a URL with an `http` or `https` scheme.
pub struct GatewayUrl(url::Url);

impl GatewayUrl {
    /// Configuration key name (`url`).
    pub const FIELD: &'static str = "url";

    /// Parse and validate a gateway URL.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = url::Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
            input: trimmed.to_owned(),
            reason: err.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self(parsed)),
            other => Err(ValidationError::InvalidUrl {
                input: trimmed.to_owned(),
                reason: format!("unsupported scheme {other}"),
            }),
        }
    }

    /// Borrow the normalized URL string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for GatewayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status code returned by the gateway as the first `|`-delimited token.
///
/// This value is preserved as-is even when unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as returned by the gateway.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Human-readable description from the status table, if the code is known.
    pub fn description(self) -> Option<&'static str> {
        self.known().map(KnownStatusCode::description)
    }

    /// Returns `true` only for the gateway's success code (`1101`).
    pub fn is_success(self) -> bool {
        self.known() == Some(KnownStatusCode::Success)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The gateway's documented status codes.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    InvalidCredentials,
    EmptyNumber,
    InvalidMessage,
    InvalidNumber,
    AllNumbersInvalid,
    InsufficientBalance,
    InactiveAccount,
    MaxNumberLimitExceeded,
    Success,
}

impl KnownStatusCode {
    /// Every documented code, in ascending numeric order.
    pub const ALL: [Self; 9] = [
        Self::InvalidCredentials,
        Self::EmptyNumber,
        Self::InvalidMessage,
        Self::InvalidNumber,
        Self::AllNumbersInvalid,
        Self::InsufficientBalance,
        Self::InactiveAccount,
        Self::MaxNumberLimitExceeded,
        Self::Success,
    ];

    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1000 => Self::InvalidCredentials,
            1002 => Self::EmptyNumber,
            1003 => Self::InvalidMessage,
            1004 => Self::InvalidNumber,
            1005 => Self::AllNumbersInvalid,
            1006 => Self::InsufficientBalance,
            1009 => Self::InactiveAccount,
            1010 => Self::MaxNumberLimitExceeded,
            1101 => Self::Success,
            _ => return None,
        })
    }

    /// Integer code as sent by the gateway.
    pub fn code(self) -> i32 {
        match self {
            Self::InvalidCredentials => 1000,
            Self::EmptyNumber => 1002,
            Self::InvalidMessage => 1003,
            Self::InvalidNumber => 1004,
            Self::AllNumbersInvalid => 1005,
            Self::InsufficientBalance => 1006,
            Self::InactiveAccount => 1009,
            Self::MaxNumberLimitExceeded => 1010,
            Self::Success => 1101,
        }
    }

    /// Result description for this code.
    ///
    /// The strings are returned verbatim, including the trailing spaces on `1005` and
    /// `1006`; callers comparing against them should not trim.
    pub fn description(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid user or Password",
            Self::EmptyNumber => "Empty Number",
            Self::InvalidMessage => "Invalid message or empty message",
            Self::InvalidNumber => "Invalid number",
            Self::AllNumbersInvalid => "All Number is Invalid ",
            Self::InsufficientBalance => "insufficient Balance ",
            Self::InactiveAccount => "Inactive Account",
            Self::MaxNumberLimitExceeded => "Max number limit exceeded",
            Self::Success => "Success",
        }
    }
}

impl From<KnownStatusCode> for StatusCode {
    fn from(value: KnownStatusCode) -> Self {
        Self(value.code())
    }
}
