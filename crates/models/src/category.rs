use serde::{Deserialize, Serialize};

use crate::{document::Document, patch};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    pub fn new(description: impl Into<String>) -> Self {
        Self { id: None, description: Some(description.into()) }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryPatch {
    #[serde(default, deserialize_with = "patch::present")]
    pub description: Option<Option<String>>,
}

impl Document for Category {
    type Patch = CategoryPatch;

    const COLLECTION: &'static str = "categories";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn apply_patch(&mut self, patch: CategoryPatch) -> bool {
        patch::apply_field(&mut self.description, patch.description)
    }
}
