pub mod caregivers;
pub mod farewell_covers;
pub mod healthy_elders_clubs;
pub mod partners;
pub mod payment_events;
pub mod super_admins;
pub mod users;
pub mod waitlist_entries;
