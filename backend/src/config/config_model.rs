use crates::domain::value_objects::enums::{
    farewell_plans::FarewellPlan, service_durations::ServiceDuration,
};

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub backend_server: BackendServer,
    pub database: Database,
    pub paystack: Paystack,
    pub zeptomail: ZeptoMail,
    pub cloudinary: Cloudinary,
}

#[derive(Debug, Clone)]
pub struct BackendServer {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Paystack {
    pub secret_key: String,
    pub healthy_elders_plan_code: String,
    pub farewell_plan_codes: FarewellPlanCodes,
}

/// Recurring plan codes registered with Paystack, one per tier and billing
/// frequency.
#[derive(Debug, Clone)]
pub struct FarewellPlanCodes {
    pub pink_quarterly: String,
    pub pink_biannual: String,
    pub pink_annual: String,
    pub blue_quarterly: String,
    pub blue_biannual: String,
    pub blue_annual: String,
    pub red_quarterly: String,
    pub red_biannual: String,
    pub red_annual: String,
}

impl FarewellPlanCodes {
    pub fn code_for(&self, plan: FarewellPlan, duration: ServiceDuration) -> &str {
        match (plan, duration) {
            (FarewellPlan::PinkDiamond, ServiceDuration::Quarterly) => &self.pink_quarterly,
            (FarewellPlan::PinkDiamond, ServiceDuration::BiAnnual) => &self.pink_biannual,
            (FarewellPlan::PinkDiamond, ServiceDuration::Annual) => &self.pink_annual,
            (FarewellPlan::BlueDiamond, ServiceDuration::Quarterly) => &self.blue_quarterly,
            (FarewellPlan::BlueDiamond, ServiceDuration::BiAnnual) => &self.blue_biannual,
            (FarewellPlan::BlueDiamond, ServiceDuration::Annual) => &self.blue_annual,
            (FarewellPlan::RedDiamond, ServiceDuration::Quarterly) => &self.red_quarterly,
            (FarewellPlan::RedDiamond, ServiceDuration::BiAnnual) => &self.red_biannual,
            (FarewellPlan::RedDiamond, ServiceDuration::Annual) => &self.red_annual,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZeptoMail {
    pub token: String,
    pub from_address: String,
    pub from_name: String,
    pub welcome_template: String,
    pub referral_code_template: String,
    pub login_notification_template: String,
    pub caregiver_welcome_template: String,
    pub subscription_template: String,
}

#[derive(Debug, Clone)]
pub struct Cloudinary {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone)]
pub struct JwtSecret {
    pub secret: String,
    pub refresh_secret: String,
    pub expires_in_seconds: i64,
    pub refresh_expires_in_seconds: i64,
}
