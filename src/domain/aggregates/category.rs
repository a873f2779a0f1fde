//! Category Entity

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::{InventoryError, Result};

/// Product classification. Immutable once built; identity is the `id` alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord")]
pub struct Category {
    id: i64,
    name: String,
    description: Option<String>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, description: Option<String>) -> Result<Self> {
        let name = name.into();
        if id < 0 {
            return Err(InventoryError::invalid("Category id must be greater than or equal to 0."));
        }
        if name.trim().is_empty() {
            return Err(InventoryError::invalid("Category name must not be null or blank."));
        }
        Ok(Self { id, name, description })
    }

    pub fn id(&self) -> i64 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
}

/// Unvalidated wire shape; deserialization goes through `Category::new`.
#[derive(Deserialize)]
struct CategoryRecord {
    id: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = InventoryError;
    fn try_from(r: CategoryRecord) -> Result<Self> { Self::new(r.id, r.name, r.description) }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) { self.id.hash(state); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_create() {
        let c = Category::new(1, "Produce", Some("Fresh produce.".into())).unwrap();
        assert_eq!(c.id(), 1);
        assert_eq!(c.name(), "Produce");
        assert_eq!(c.description(), Some("Fresh produce."));
    }

    #[test]
    fn test_category_validation() {
        let err = Category::new(-1, "Produce", None).unwrap_err();
        assert_eq!(err.to_string(), "Category id must be greater than or equal to 0.");
        let err = Category::new(0, "   ", None).unwrap_err();
        assert_eq!(err.to_string(), "Category name must not be null or blank.");
        assert!(Category::new(0, "Bakery", None).is_ok());
    }

    #[test]
    fn test_category_identity_is_id_only() {
        let a = Category::new(1, "Produce", Some("...".into())).unwrap();
        let b = Category::new(1, "Vegetables", None).unwrap();
        let c = Category::new(2, "Produce", Some("...".into())).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_category_deserialize_validates() {
        let err = serde_json::from_str::<Category>(r#"{"id":-1,"name":"Produce","description":null}"#).unwrap_err();
        assert!(err.to_string().contains("Category id must be greater than or equal to 0."));
        let err = serde_json::from_str::<Category>(r#"{"id":1,"name":"  "}"#).unwrap_err();
        assert!(err.to_string().contains("Category name must not be null or blank."));
        let c: Category = serde_json::from_str(r#"{"id":2,"name":"Dairy"}"#).unwrap();
        assert_eq!((c.id(), c.name(), c.description()), (2, "Dairy", None));
    }
}
