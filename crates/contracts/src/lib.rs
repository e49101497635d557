//! Shared DTOs between the business registration frontend and the backend API.

pub mod domain;
