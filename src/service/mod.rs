pub mod application_service;
pub mod auth;
pub mod chat_service;
pub mod offer_service;
pub mod search_service;
