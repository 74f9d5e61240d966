use crate::domain::value::{MessageText, Recipients};

/// One send: the recipient field and the message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    numbers: Recipients,
    text: MessageText,
}

impl SendRequest {
    pub fn new(numbers: impl Into<Recipients>, text: impl Into<MessageText>) -> Self {
        Self {
            numbers: numbers.into(),
            text: text.into(),
        }
    }

    pub fn numbers(&self) -> &Recipients {
        &self.numbers
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}
