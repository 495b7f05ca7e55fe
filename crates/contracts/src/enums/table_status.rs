use serde::{Deserialize, Serialize};

/// Availability of a dining table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    Available,
    NotAvailable,
}

impl TableStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TableStatus::Available => "AVAILABLE",
            TableStatus::NotAvailable => "NOT_AVAILABLE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TableStatus::Available => "disponible",
            TableStatus::NotAvailable => "non disponible",
        }
    }

    /// Case-insensitive parse of the backend code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "AVAILABLE" => Some(TableStatus::Available),
            "NOT_AVAILABLE" => Some(TableStatus::NotAvailable),
            _ => None,
        }
    }
}

/// Label shown for a raw status code; unknown codes get a generic label
pub fn table_status_label(code: &str) -> &'static str {
    TableStatus::from_code(code)
        .map(|s| s.display_name())
        .unwrap_or("statut inconnu")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(table_status_label("AVAILABLE"), "disponible");
        assert_eq!(table_status_label("not_available"), "non disponible");
        assert_eq!(table_status_label("BROKEN"), "statut inconnu");
    }

    #[test]
    fn test_serde_code() {
        let s: TableStatus = serde_json::from_str(r#""NOT_AVAILABLE""#).unwrap();
        assert_eq!(s, TableStatus::NotAvailable);
        assert_eq!(s.code(), "NOT_AVAILABLE");
    }
}
