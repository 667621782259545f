use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use crates::domain::repositories::payment_gateway::PaymentGateway;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum TransactionsError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl TransactionsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            TransactionsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, TransactionsError>;

/// Reporting starts the day Paystack went live for this platform.
const INFLOW_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 9, 30) {
    Some(date) => date,
    None => panic!("invalid inflow start date"),
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashInflow {
    pub transaction_volume: i64,
    pub total_transactions: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Admin-dashboard figure: total NGN volume collected since launch.
pub struct TransactionsUseCase<P>
where
    P: PaymentGateway + Send + Sync + 'static,
{
    payment_gateway: Arc<P>,
}

impl<P> TransactionsUseCase<P>
where
    P: PaymentGateway + Send + Sync + 'static,
{
    pub fn new(payment_gateway: Arc<P>) -> Self {
        Self { payment_gateway }
    }

    pub async fn fetch_total_cash_inflow(&self) -> UseCaseResult<CashInflow> {
        let end_date = Utc::now().date_naive();

        let totals = self
            .payment_gateway
            .fetch_transaction_totals(INFLOW_START_DATE, end_date)
            .await
            .map_err(|err| {
                error!(error = ?err, "transactions: failed to fetch totals from paystack");
                TransactionsError::Internal(err)
            })?;

        let inflow = CashInflow {
            transaction_volume: totals.volume_for("NGN"),
            total_transactions: totals.total_transactions,
            start_date: INFLOW_START_DATE,
            end_date,
        };

        info!(
            transaction_volume = inflow.transaction_volume,
            total_transactions = inflow.total_transactions,
            "transactions: cash inflow loaded"
        );

        Ok(inflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::repositories::payment_gateway::MockPaymentGateway;
    use crates::payments::paystack_client::TransactionTotals;

    #[tokio::test]
    async fn inflow_reports_ngn_volume_only() {
        let mut gateway = MockPaymentGateway::new();

        gateway
            .expect_fetch_transaction_totals()
            .withf(|from, _| *from == NaiveDate::from_ymd_opt(2024, 9, 30).unwrap())
            .returning(|_, _| {
                Box::pin(async {
                    Ok(serde_json::from_value::<TransactionTotals>(serde_json::json!({
                        "total_transactions": 12,
                        "total_volume_by_currency": [
                            { "currency": "NGN", "amount": 3_600_000 },
                            { "currency": "USD", "amount": 70 }
                        ]
                    }))
                    .unwrap())
                })
            });

        let usecase = TransactionsUseCase::new(Arc::new(gateway));
        let inflow = usecase.fetch_total_cash_inflow().await.unwrap();

        assert_eq!(inflow.transaction_volume, 3_600_000);
        assert_eq!(inflow.total_transactions, 12);
    }
}
