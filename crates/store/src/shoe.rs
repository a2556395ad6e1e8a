use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use soletrack_core::{Brand, ShoeId};

/// Stored shoe record.
///
/// Brand-scoping rules decide who may see/mutate a record; the record itself
/// carries no authorization state beyond its brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    pub id: ShoeId,
    pub name: String,
    pub brand: Brand,
    /// Non-negative; validated at the request boundary.
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
