pub mod auto_renewal;
pub mod caregiver_roles;
pub mod farewell_plans;
pub mod partner_kinds;
pub mod service_durations;
pub mod subscription_statuses;
pub mod user_statuses;
