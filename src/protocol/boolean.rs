use serde::{Deserialize, Serialize};

/// Result of a mutating operation: `{"boolean": true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanResult {
    pub boolean: bool,
}

impl From<BooleanResult> for bool {
    fn from(result: BooleanResult) -> Self {
        result.boolean
    }
}
