//! Fruit record type.

use serde::{Deserialize, Serialize};

use super::Record;

/// A fruit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u64,
    pub name: String,
    pub color: String,
}

impl Record for Fruit {
    const RESOURCE: &'static str = "Fruit";

    fn id(&self) -> u64 {
        self.id
    }
}
