pub mod auth;
pub mod documents;
pub mod guest;
pub mod mou;
pub mod notification;
pub mod reports;
pub mod translation_certificate;
pub mod translation_request;
pub mod users;
pub mod visa_application;
pub mod visa_extension;
