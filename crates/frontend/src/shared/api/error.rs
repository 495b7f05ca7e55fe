use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("Erreur réseau: {0}")]
    Network(String),
    /// Non-2xx response; `body` is the raw response text
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },
    #[error("Réponse invalide: {0}")]
    Decode(String),
    #[error("Requête invalide: {0}")]
    Serialize(String),
    /// The view that issued the request went away
    #[error("Requête annulée")]
    Cancelled,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_message(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        // Spring-style error bodies carry a `message` field
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(v) => match v.get("message").and_then(|m| m.as_str()) {
                Some(m) => format!("HTTP {}: {}", status, m),
                None => format!("HTTP {}: {}", status, body),
            },
            Err(_) => format!("HTTP {}: {}", status, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let e = ApiError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(e.to_string(), "HTTP 500");
        assert_eq!(e.status(), Some(500));

        let e = ApiError::Status {
            status: 400,
            body: r#"{"message": "Fonds insuffisants"}"#.into(),
        };
        assert_eq!(e.to_string(), "HTTP 400: Fonds insuffisants");

        let e = ApiError::Status {
            status: 404,
            body: "introuvable".into(),
        };
        assert_eq!(e.to_string(), "HTTP 404: introuvable");
    }

    #[test]
    fn test_cancelled() {
        assert!(ApiError::Cancelled.is_cancelled());
        assert!(!ApiError::Network("x".into()).is_cancelled());
        assert_eq!(ApiError::Cancelled.status(), None);
    }
}
