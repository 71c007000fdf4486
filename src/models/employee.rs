use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub salary: f64,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_expected_field_names() {
        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            salary: 5000.0,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["salary"], 5000.0);
        assert!(value.get("id").is_some());
        assert!(value.get("created_at").is_some());
        assert!(value.get("updated_at").is_some());
    }
}
