//! Data models for GearGuard

pub mod chat;
pub mod enums;
pub mod equipment;
pub mod request;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use chat::ChatHistory;
pub use enums::{RequestStatus, RequestType};
pub use equipment::Equipment;
pub use request::MaintenanceRequest;
pub use team::{MaintenanceTeam, TeamWithMembers};
pub use user::User;
