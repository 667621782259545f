pub mod domain;
pub mod infra;
pub mod mailer;
pub mod media;
pub mod observability;
pub mod payments;
