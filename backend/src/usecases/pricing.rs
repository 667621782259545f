use crates::domain::value_objects::enums::{
    farewell_plans::FarewellPlan, service_durations::ServiceDuration,
};

/// Fixed club pricing: the annual total and the one-off membership fee
/// included in it.
pub const HEALTHY_ELDERS_TOTAL_AMOUNT: i32 = 12000;
pub const HEALTHY_ELDERS_MEMBERSHIP_FEE: i32 = 1000;

/// Farewell Cover price table in naira. The charge is always derived from
/// this table server-side; a client-submitted amount is ignored.
pub fn farewell_subscription_amount(plan: FarewellPlan, duration: ServiceDuration) -> i32 {
    match (plan, duration) {
        (FarewellPlan::PinkDiamond, ServiceDuration::Quarterly) => 3000,
        (FarewellPlan::PinkDiamond, ServiceDuration::BiAnnual) => 60000,
        (FarewellPlan::PinkDiamond, ServiceDuration::Annual) => 90000,
        (FarewellPlan::BlueDiamond, ServiceDuration::Quarterly) => 60000,
        (FarewellPlan::BlueDiamond, ServiceDuration::BiAnnual) => 90000,
        (FarewellPlan::BlueDiamond, ServiceDuration::Annual) => 150000,
        (FarewellPlan::RedDiamond, ServiceDuration::Quarterly) => 90000,
        (FarewellPlan::RedDiamond, ServiceDuration::BiAnnual) => 150000,
        (FarewellPlan::RedDiamond, ServiceDuration::Annual) => 250000,
    }
}

/// Paystack charges in kobo.
pub fn amount_to_kobo(naira: i32) -> i64 {
    i64::from(naira) * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_table_is_exact_for_all_combinations() {
        let cases = [
            (FarewellPlan::PinkDiamond, ServiceDuration::Quarterly, 3000),
            (FarewellPlan::PinkDiamond, ServiceDuration::BiAnnual, 60000),
            (FarewellPlan::PinkDiamond, ServiceDuration::Annual, 90000),
            (FarewellPlan::BlueDiamond, ServiceDuration::Quarterly, 60000),
            (FarewellPlan::BlueDiamond, ServiceDuration::BiAnnual, 90000),
            (FarewellPlan::BlueDiamond, ServiceDuration::Annual, 150000),
            (FarewellPlan::RedDiamond, ServiceDuration::Quarterly, 90000),
            (FarewellPlan::RedDiamond, ServiceDuration::BiAnnual, 150000),
            (FarewellPlan::RedDiamond, ServiceDuration::Annual, 250000),
        ];

        for (plan, duration, expected) in cases {
            assert_eq!(
                farewell_subscription_amount(plan, duration),
                expected,
                "{} / {}",
                plan,
                duration
            );
        }
    }

    #[test]
    fn kobo_conversion_multiplies_by_hundred() {
        assert_eq!(amount_to_kobo(90000), 9_000_000);
        assert_eq!(amount_to_kobo(HEALTHY_ELDERS_TOTAL_AMOUNT), 1_200_000);
    }

    #[test]
    fn unknown_plan_strings_do_not_parse() {
        assert!(FarewellPlan::from_str("Green Diamond Plan").is_none());
        assert!(ServiceDuration::from_str("per weekly").is_none());
    }
}
