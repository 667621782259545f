pub mod custom_ids;
pub mod enums;
pub mod farewell_cover;
pub mod healthy_elders;
pub mod paystack_webhook;
pub mod registrations;
