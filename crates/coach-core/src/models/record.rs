//! Common behavior of backend records: identity and recency ordering.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A backend record with an `_id` and an optional creation time.
pub trait Record {
    fn id(&self) -> &str;

    fn created_at(&self) -> Option<Timestamp>;

    /// Creation time, falling back to the time embedded in an ObjectId.
    fn sort_key(&self) -> Option<Timestamp> {
        self.created_at()
            .or_else(|| object_id_timestamp(self.id()))
    }
}

/// Extracts the creation second from a 24-hex-digit ObjectId.
pub fn object_id_timestamp(id: &str) -> Option<Timestamp> {
    if id.len() != 24 || !id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let seconds = i64::from_str_radix(&id[..8], 16).ok()?;
    Timestamp::from_second(seconds).ok()
}

/// Sorts newest first. Records with no usable time sort last and keep their
/// relative order.
pub fn sort_newest_first<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
}

/// Untyped record, for collections whose fields are not modeled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "super::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn created_at(&self) -> Option<Timestamp> {
                    self.created_at
                }
            }
        )+
    };
}

impl_record!(
    RawRecord,
    super::Category,
    super::Exercise,
    super::Meal,
    super::Supplement,
    super::UserMealPlan,
    super::WorkoutPlan,
    super::PersonalizedWorkoutPlan,
    super::Booking,
);
