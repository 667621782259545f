pub mod auth;
pub mod caregivers;
pub mod farewell_cover;
pub mod healthy_elders_club;
pub mod partners;
pub mod paystack_webhook;
pub mod subscriptions;
pub mod transactions;
pub mod waitlist;
