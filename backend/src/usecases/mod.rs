pub mod auth;
pub mod caregiver_registration;
pub mod farewell_cover;
pub mod healthy_elders_club;
pub mod partner_registration;
pub mod paystack_webhook;
pub mod pricing;
pub mod renewal;
pub mod subscriptions;
pub mod transactions;
pub mod waitlist;
