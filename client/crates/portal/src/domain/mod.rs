//! Domain Layer - Portal records and their contracts
//!
//! This layer contains:
//! - Records as served by the backend (Member, Scheme, Application, ...)
//! - Drafts sent on create/update and the scheme application form
//! - Value objects (SchemeMode, NotificationKind, ApplicationStatus)
//! - Payload validation shared by every collection
//! - API traits (interfaces) implemented in the infra layer

pub mod drafts;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
