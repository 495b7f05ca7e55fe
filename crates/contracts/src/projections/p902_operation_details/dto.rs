use serde::{Deserialize, Serialize};

/// Path of the operations summary of one stock entry
pub fn operation_details_path(stock_id: i64) -> String {
    format!("/operations/details/{}", stock_id)
}

/// Stock movement (purchase, consumption…)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockOperation {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationDetail {
    // The backend spells it "ingredienId"
    #[serde(alias = "ingredienId")]
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub operations: Vec<StockOperation>,
}

impl OperationDetail {
    /// Newest operation first
    pub fn sorted_operations(&self) -> Vec<StockOperation> {
        let mut ops = self.operations.clone();
        ops.sort_by(|a, b| b.id.cmp(&a.id));
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_spelling_and_order() {
        let json = r#"{"ingredienId": 4, "ingredientName": "Farine", "operations": [
            {"id": 1, "type": "PURCHASE", "date": "2024-03-01T08:00:00", "description": "achat"},
            {"id": 3, "type": "CONSUMPTION", "date": "2024-03-03T08:00:00", "description": "vente"}
        ]}"#;
        let detail: OperationDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.ingredient_id, 4);
        let ops = detail.sorted_operations();
        assert_eq!(ops[0].id, 3);
        assert_eq!(ops[0].kind, "CONSUMPTION");
    }
}
