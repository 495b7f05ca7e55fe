use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use serde::{Deserialize, Serialize};

/// Dining table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub number: i64,
    pub capacity: i64,
    pub status: String,
}

impl DiningTable {
    /// Substring search over number, capacity and status
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.number.to_string().contains(&term)
            || self.capacity.to_string().contains(&term)
            || self.status.to_lowercase().contains(&term)
    }
}

impl Resource for DiningTable {
    type Form = DiningTableDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/tables/all",
            collection: "/tables",
            update: UpdateStyle::PostCollection,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Table"
    }

    fn list_name() -> &'static str {
        "Liste des tables"
    }

    fn to_form(&self) -> DiningTableDto {
        DiningTableDto {
            id: Some(self.id),
            number: self.number,
            capacity: self.capacity,
            status: Some(self.status.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiningTableDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub number: i64,
    pub capacity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DiningTableDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.number <= 0 {
            return Err("Le numéro de table doit être positif".into());
        }
        if self.capacity <= 0 {
            return Err("La capacité doit être positive".into());
        }
        Ok(())
    }
}

/// `GET` lists the status codes, `PUT` changes one table's status
pub const TABLE_STATUS_PATH: &str = "/tables/status";

/// Body of `PUT /tables/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub id: i64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DiningTable {
        DiningTable {
            id: 1,
            number: 12,
            capacity: 4,
            status: "AVAILABLE".into(),
        }
    }

    #[test]
    fn test_matches_any_column() {
        let t = table();
        assert!(t.matches("12"));
        assert!(t.matches("4"));
        assert!(t.matches("avail"));
        assert!(!t.matches("reserved"));
    }

    #[test]
    fn test_validate() {
        assert!(table().to_form().validate().is_ok());
        assert!(DiningTableDto::default().validate().is_err());
    }
}
