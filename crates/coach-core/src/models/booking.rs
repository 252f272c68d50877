//! Coaching session bookings.

use std::fmt;

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::timestamp::{parse_flexible, utc_date};

/// Image shown for users without a profile picture.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// How the session takes place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingType {
    Video,
    InPerson,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::InPerson => "in-person",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking, flattened from the backend's meeting record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "MeetingRecord")]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_image: String,
    pub time: String,
    pub location: String,
    pub booking_type: BookingType,
    /// Raw date string as sent by the backend
    pub raw_date: Option<String>,
    /// UTC calendar day of the session, when the date parses
    pub date: Option<Date>,
    pub created_at: Option<Timestamp>,
}

impl Booking {
    pub fn is_on(&self, day: Date) -> bool {
        self.date == Some(day)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeetingUser {
    #[serde(default)]
    fullname: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, alias = "profilePicture")]
    profile_image: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeetingRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default, rename = "userId")]
    user: Option<MeetingUser>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, deserialize_with = "super::timestamp::optional")]
    created_at: Option<Timestamp>,
}

impl From<MeetingRecord> for Booking {
    fn from(record: MeetingRecord) -> Self {
        let (name, email, profile_image) = match record.user {
            Some(user) => (user.fullname, user.email, user.profile_image),
            None => (None, None, None),
        };
        let location = record.location.unwrap_or_default();
        let booking_type = if location == "Zoom" {
            BookingType::Video
        } else {
            BookingType::InPerson
        };
        let date = record
            .date
            .as_deref()
            .and_then(parse_flexible)
            .map(utc_date);

        Self {
            id: record.id,
            name: name.filter(|s| !s.is_empty()).unwrap_or_else(|| "Unknown".to_string()),
            email: email.filter(|s| !s.is_empty()).unwrap_or_else(|| "Unknown".to_string()),
            profile_image: profile_image
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            time: record.time.unwrap_or_default(),
            location,
            booking_type,
            raw_date: record.date,
            date,
            created_at: record.created_at,
        }
    }
}
