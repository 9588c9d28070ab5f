use crate::SectionId;
use serde::{Deserialize, Serialize};

/// Raised after every completed section transition.
///
/// Serializes as `{"section": "<id>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationChanged {
    pub section: SectionId,
}

impl NavigationChanged {
    pub fn new(section: SectionId) -> Self {
        Self { section }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let event = NavigationChanged::new(SectionId::new("assets-liabilities"));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({ "section": "assets-liabilities" }));
    }
}
