pub mod caregivers;
pub mod farewell_covers;
pub mod healthy_elders_clubs;
pub mod mailer;
pub mod media_storage;
pub mod partners;
pub mod payment_events;
pub mod payment_gateway;
pub mod super_admins;
pub mod users;
pub mod waitlist_entries;

/// Result of the conditional activation update on a subscription record.
/// `AlreadyActive` means another delivery of the same event got there first;
/// the state is correct and notification must not be repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    Activated,
    AlreadyActive,
    NotFound,
}
