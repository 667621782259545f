use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Months, Utc};
use crates::domain::value_objects::enums::service_durations::ServiceDuration;

/// Next renewal for a Farewell Cover plan: quarterly +3 months, bi-annual +6,
/// annual +12, counted from the moment the payment was confirmed.
pub fn farewell_cover_renewal_date(
    from: DateTime<Utc>,
    duration: ServiceDuration,
) -> Result<DateTime<Utc>> {
    from.checked_add_months(Months::new(duration.months()))
        .context("failed to compute farewell cover renewal date")
}

/// Healthy Elders Club renews on a fixed 365-day cadence.
pub fn healthy_elders_renewal_date(from: DateTime<Utc>) -> Result<DateTime<Utc>> {
    from.checked_add_signed(Duration::days(365))
        .context("failed to compute healthy elders renewal date")
}
