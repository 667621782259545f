use anyhow::{Ok, Result};

use super::config_model::{
    BackendServer, Cloudinary, Database, DotEnvyConfig, FarewellPlanCodes, JwtSecret, Paystack,
    ZeptoMail,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: std::env::var("SERVER_PORT_BACKEND")
            .expect("SERVER_PORT_BACKEND is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let paystack = Paystack {
        secret_key: std::env::var("PAYSTACK_SECRET_KEY").expect("PAYSTACK_SECRET_KEY is invalid"),
        healthy_elders_plan_code: std::env::var("PAYSTACK_HEALTHY_ELDERS_PLAN_CODE")
            .expect("PAYSTACK_HEALTHY_ELDERS_PLAN_CODE is invalid"),
        farewell_plan_codes: FarewellPlanCodes {
            pink_quarterly: std::env::var("PAYSTACK_FAREWELL_PINK_DIAMOND_QUARTERLY_PLAN")
                .expect("PAYSTACK_FAREWELL_PINK_DIAMOND_QUARTERLY_PLAN is invalid"),
            pink_biannual: std::env::var("PAYSTACK_FAREWELL_PINK_DIAMOND_BIANNUAL_PLAN")
                .expect("PAYSTACK_FAREWELL_PINK_DIAMOND_BIANNUAL_PLAN is invalid"),
            pink_annual: std::env::var("PAYSTACK_FAREWELL_PINK_DIAMOND_ANNUAL_PLAN")
                .expect("PAYSTACK_FAREWELL_PINK_DIAMOND_ANNUAL_PLAN is invalid"),
            blue_quarterly: std::env::var("PAYSTACK_FAREWELL_BLUE_DIAMOND_QUARTERLY_PLAN")
                .expect("PAYSTACK_FAREWELL_BLUE_DIAMOND_QUARTERLY_PLAN is invalid"),
            blue_biannual: std::env::var("PAYSTACK_FAREWELL_BLUE_DIAMOND_BIANNUAL_PLAN")
                .expect("PAYSTACK_FAREWELL_BLUE_DIAMOND_BIANNUAL_PLAN is invalid"),
            blue_annual: std::env::var("PAYSTACK_FAREWELL_BLUE_DIAMOND_ANNUAL_PLAN")
                .expect("PAYSTACK_FAREWELL_BLUE_DIAMOND_ANNUAL_PLAN is invalid"),
            red_quarterly: std::env::var("PAYSTACK_FAREWELL_RED_DIAMOND_QUARTERLY_PLAN")
                .expect("PAYSTACK_FAREWELL_RED_DIAMOND_QUARTERLY_PLAN is invalid"),
            red_biannual: std::env::var("PAYSTACK_FAREWELL_RED_DIAMOND_BIANNUAL_PLAN")
                .expect("PAYSTACK_FAREWELL_RED_DIAMOND_BIANNUAL_PLAN is invalid"),
            red_annual: std::env::var("PAYSTACK_FAREWELL_RED_DIAMOND_ANNUAL_PLAN")
                .expect("PAYSTACK_FAREWELL_RED_DIAMOND_ANNUAL_PLAN is invalid"),
        },
    };

    let zeptomail = ZeptoMail {
        token: std::env::var("ZEPTOMAIL_TOKEN").expect("ZEPTOMAIL_TOKEN is invalid"),
        from_address: std::env::var("ZEPTOMAIL_FROM_ADDRESS")
            .unwrap_or_else(|_| "paul@solace.com.ng".to_string()),
        from_name: std::env::var("ZEPTOMAIL_FROM_NAME")
            .unwrap_or_else(|_| "Solace".to_string()),
        welcome_template: std::env::var("ZEPTOMAIL_WELCOME_MAIL_TEMPLATE")
            .expect("ZEPTOMAIL_WELCOME_MAIL_TEMPLATE is invalid"),
        referral_code_template: std::env::var("ZEPTOMAIL_REFERRAL_CODE_MAIL_TEMPLATE")
            .expect("ZEPTOMAIL_REFERRAL_CODE_MAIL_TEMPLATE is invalid"),
        login_notification_template: std::env::var("ZEPTOMAIL_LOGIN_NOTIFICATION_MAIL_TEMPLATE")
            .expect("ZEPTOMAIL_LOGIN_NOTIFICATION_MAIL_TEMPLATE is invalid"),
        caregiver_welcome_template: std::env::var("ZEPTOMAIL_CAREGIVER_WELCOME_MAIL_TEMPLATE")
            .expect("ZEPTOMAIL_CAREGIVER_WELCOME_MAIL_TEMPLATE is invalid"),
        subscription_template: std::env::var("ZEPTOMAIL_SUBSCRIPTION_MAIL_TEMPLATE")
            .expect("ZEPTOMAIL_SUBSCRIPTION_MAIL_TEMPLATE is invalid"),
    };

    let cloudinary = Cloudinary {
        cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME")
            .expect("CLOUDINARY_CLOUD_NAME is invalid"),
        api_key: std::env::var("CLOUDINARY_API_KEY").expect("CLOUDINARY_API_KEY is invalid"),
        api_secret: std::env::var("CLOUDINARY_API_SECRET")
            .expect("CLOUDINARY_API_SECRET is invalid"),
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        paystack,
        zeptomail,
        cloudinary,
    })
}

pub fn get_jwt_secret() -> Result<JwtSecret> {
    dotenvy::dotenv().ok();

    Ok(JwtSecret {
        secret: std::env::var("JWT_SECRET").expect("JWT_SECRET is invalid"),
        refresh_secret: std::env::var("JWT_REFRESH_SECRET")
            .expect("JWT_REFRESH_SECRET is invalid"),
        expires_in_seconds: std::env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()?,
        refresh_expires_in_seconds: std::env::var("JWT_REFRESH_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()?,
    })
}
