use serde::{Deserialize, Serialize};

use crate::{document::Document, patch};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Vendor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPatch {
    #[serde(default, deserialize_with = "patch::present")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub last_name: Option<Option<String>>,
}

impl Document for Vendor {
    type Patch = VendorPatch;

    const COLLECTION: &'static str = "vendors";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn apply_patch(&mut self, patch: VendorPatch) -> bool {
        // `|=` keeps evaluating later fields after an earlier change
        let mut changed = false;
        changed |= patch::apply_field(&mut self.first_name, patch.first_name);
        changed |= patch::apply_field(&mut self.last_name, patch.last_name);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(json: &str) -> VendorPatch {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn camel_case_json() {
        let v = Vendor::new("Mike", "Wazowski").with_id("v1");
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            serde_json::json!({"id": "v1", "firstName": "Mike", "lastName": "Wazowski"})
        );
    }

    #[test]
    fn single_field_patch_keeps_other_field() {
        let mut v = Vendor::new("Favio", "Posca");
        assert!(v.apply_patch(patch(r#"{"firstName": "Fabio"}"#)));
        assert_eq!(v, Vendor::new("Fabio", "Posca"));
    }

    #[test]
    fn both_fields_inspected_after_first_change() {
        let mut v = Vendor::new("Favio", "Posa");
        assert!(v.apply_patch(patch(r#"{"firstName": "Fabio", "lastName": "Posca"}"#)));
        assert_eq!(v, Vendor::new("Fabio", "Posca"));
    }

    #[test]
    fn equal_or_absent_fields_are_no_change() {
        let mut v = Vendor::new("Favio", "Posca");
        assert!(!v.apply_patch(patch("{}")));
        assert!(!v.apply_patch(patch(r#"{"lastName": "Posca"}"#)));
        assert_eq!(v, Vendor::new("Favio", "Posca"));
    }

    #[test]
    fn explicit_null_clears_field() {
        let mut v = Vendor::new("Favio", "Posca");
        assert!(v.apply_patch(patch(r#"{"lastName": null}"#)));
        assert_eq!(v.first_name.as_deref(), Some("Favio"));
        assert_eq!(v.last_name, None);
    }
}
