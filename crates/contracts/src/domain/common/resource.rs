use serde::de::DeserializeOwned;
use serde::Serialize;

/// How a resource accepts updates of an existing row.
///
/// The backend is not uniform here, so every resource declares its own style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStyle {
    /// `PUT {collection}/{id}`
    PutById,
    /// `PUT {collection}` with the id carried in the body
    PutCollection,
    /// `POST {collection}` acting as an upsert
    PostCollection,
}

/// REST paths of a resource, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// Path returning the full list (`GET`)
    pub list: &'static str,
    /// Collection path used for create and as the prefix for `/{id}`
    pub collection: &'static str,
    pub update: UpdateStyle,
}

impl Endpoints {
    pub fn list_path(&self) -> String {
        self.list.to_string()
    }

    pub fn create_path(&self) -> String {
        self.collection.to_string()
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.collection, id)
    }

    /// Method and path for an update of row `id`
    pub fn update_request(&self, id: i64) -> (&'static str, String) {
        match self.update {
            UpdateStyle::PutById => ("PUT", self.item_path(id)),
            UpdateStyle::PutCollection => ("PUT", self.collection.to_string()),
            UpdateStyle::PostCollection => ("POST", self.collection.to_string()),
        }
    }

    pub fn delete_path(&self, id: i64) -> String {
        self.item_path(id)
    }
}

/// A CRUD resource exposed by the backend.
pub trait Resource: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Create/update form sent to the backend
    type Form: Serialize + Clone + Default + Send + Sync + 'static;

    fn endpoints() -> Endpoints;

    fn id(&self) -> i64;

    /// Singular label, e.g. "Catégorie"
    fn element_name() -> &'static str;

    /// Page title, e.g. "Liste des catégories"
    fn list_name() -> &'static str;

    /// Prefill a form from an existing row
    fn to_form(&self) -> Self::Form;
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOORS: Endpoints = Endpoints {
        list: "/floors",
        collection: "/floors",
        update: UpdateStyle::PutById,
    };

    const UNITS: Endpoints = Endpoints {
        list: "/units/all",
        collection: "/units",
        update: UpdateStyle::PutCollection,
    };

    #[test]
    fn test_item_paths() {
        assert_eq!(FLOORS.list_path(), "/floors");
        assert_eq!(FLOORS.create_path(), "/floors");
        assert_eq!(FLOORS.delete_path(7), "/floors/7");
        assert_eq!(UNITS.list_path(), "/units/all");
    }

    #[test]
    fn test_update_request_by_style() {
        assert_eq!(FLOORS.update_request(3), ("PUT", "/floors/3".to_string()));
        assert_eq!(UNITS.update_request(3), ("PUT", "/units".to_string()));

        let categories = Endpoints {
            list: "/categories/all",
            collection: "/categories",
            update: UpdateStyle::PostCollection,
        };
        assert_eq!(
            categories.update_request(3),
            ("POST", "/categories".to_string())
        );
    }
}
