//! Domain model for a single recorded spend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Expense {
    pub fn new(amount: f64, description: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            timestamp,
        }
    }

    /// Replaces the editable fields. The creation timestamp is left untouched.
    pub fn revise(&mut self, amount: f64, description: impl Into<String>) {
        self.amount = amount;
        self.description = description.into();
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}
