use serde::Serialize;

/// Response body shared by every API endpoint
///
/// `data` is left out of the JSON entirely when there is nothing to return,
/// e.g. after an update or delete, or on errors.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn data(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope() {
        let json = serde_json::to_string(&Envelope::data("post added", 42)).unwrap();
        assert_eq!(json, r#"{"error":false,"message":"post added","data":42}"#);
    }

    #[test]
    fn test_message_envelope_omits_data() {
        let json = serde_json::to_string(&Envelope::message("post updated")).unwrap();
        assert_eq!(json, r#"{"error":false,"message":"post updated"}"#);
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_string(&Envelope::error("post not found")).unwrap();
        assert_eq!(json, r#"{"error":true,"message":"post not found"}"#);
    }

    #[test]
    fn test_empty_list_is_kept() {
        let json = serde_json::to_string(&Envelope::data("", Vec::<u64>::new())).unwrap();
        assert_eq!(json, r#"{"error":false,"message":"","data":[]}"#);
    }
}
