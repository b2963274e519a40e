//! Shared domain enums
//!
//! Both enums are stored as their display labels in TEXT columns, so the
//! sqlx impls delegate to `str` instead of deriving a named Postgres type.

use serde::{Deserialize, Serialize};
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
    Decode, Encode, Postgres, Type,
};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// Maintenance request type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RequestType {
    Corrective,
    Preventive,
}

impl RequestType {
    /// All request types, in display order
    pub const ALL: [RequestType; 2] = [RequestType::Corrective, RequestType::Preventive];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Corrective => "Corrective",
            RequestType::Preventive => "Preventive",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == label)
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Type<Postgres> for RequestType {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for RequestType {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        <&str as Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for RequestType {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let label = <&str as Decode<Postgres>>::decode(value)?;
        Self::from_label(label)
            .ok_or_else(|| format!("unknown request type: {}", label).into())
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Maintenance request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStatus {
    /// All statuses, in display order
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::New,
        RequestStatus::InProgress,
        RequestStatus::Repaired,
        RequestStatus::Scrap,
    ];

    /// Statuses counted as "active" on the dashboard
    pub const ACTIVE: [RequestStatus; 2] = [RequestStatus::New, RequestStatus::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::New => "New",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Repaired => "Repaired",
            RequestStatus::Scrap => "Scrap",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Type<Postgres> for RequestStatus {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for RequestStatus {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        <&str as Encode<Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for RequestStatus {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let label = <&str as Decode<Postgres>>::decode(value)?;
        Self::from_label(label)
            .ok_or_else(|| format!("unknown request status: {}", label).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_display_labels() {
        for status in RequestStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.to_string()));
        }
    }

    #[test]
    fn in_progress_round_trips_with_space() {
        let status: RequestStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, RequestStatus::InProgress);
    }

    #[test]
    fn enums_map_to_the_text_column_type() {
        let text = <String as Type<Postgres>>::type_info();
        assert_eq!(<RequestStatus as Type<Postgres>>::type_info(), text);
        assert_eq!(<RequestType as Type<Postgres>>::type_info(), text);
        assert!(<RequestStatus as Type<Postgres>>::compatible(&text));
        assert!(<RequestType as Type<Postgres>>::compatible(&text));
    }

    #[test]
    fn labels_round_trip_through_from_label() {
        for status in RequestStatus::ALL {
            assert_eq!(RequestStatus::from_label(status.as_str()), Some(status));
        }
        for request_type in RequestType::ALL {
            assert_eq!(RequestType::from_label(request_type.as_str()), Some(request_type));
        }
        assert_eq!(RequestStatus::from_label("Pending"), None);
    }

    #[test]
    fn active_statuses_are_new_and_in_progress() {
        assert!(RequestStatus::ACTIVE.contains(&RequestStatus::New));
        assert!(RequestStatus::ACTIVE.contains(&RequestStatus::InProgress));
        assert_eq!(RequestStatus::ACTIVE.len(), 2);
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(serde_json::from_str::<RequestType>("\"Predictive\"").is_err());
    }
}
