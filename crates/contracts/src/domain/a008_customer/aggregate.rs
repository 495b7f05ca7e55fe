use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+?\d{1,4}[-.\s]?)?(\d{10})$").expect("valid phone pattern"));

/// Restaurant customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
}

impl Resource for Customer {
    type Form = CustomerDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/customers",
            collection: "/customers",
            update: UpdateStyle::PutById,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Client"
    }

    fn list_name() -> &'static str {
        "Liste des clients"
    }

    fn to_form(&self) -> CustomerDto {
        CustomerDto {
            id: Some(self.id),
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub phone_number: String,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().chars().count() < 2 {
            return Err("Le prénom doit comporter au moins 2 caractères".into());
        }
        if !PHONE_RE.is_match(self.phone_number.trim()) {
            return Err("Numéro de téléphone invalide".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, phone: &str) -> CustomerDto {
        CustomerDto {
            id: None,
            name: name.into(),
            phone_number: phone.into(),
        }
    }

    #[test]
    fn test_phone_formats() {
        assert!(dto("Rakoto", "0341234567").validate().is_ok());
        assert!(dto("Rakoto", "+261 0341234567").validate().is_ok());
        assert!(dto("Rakoto", "+261-0341234567").validate().is_ok());
        assert!(dto("Rakoto", "034123").validate().is_err());
        assert!(dto("Rakoto", "03412345ab").validate().is_err());
    }

    #[test]
    fn test_name_min_length() {
        assert_eq!(
            dto("R", "0341234567").validate(),
            Err("Le prénom doit comporter au moins 2 caractères".to_string())
        );
    }
}
