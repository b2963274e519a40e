//! Dashboard aggregation service

use sqlx::Row;

use crate::{
    api::dashboard::DashboardStats,
    error::AppResult,
    models::enums::{RequestStatus, RequestType},
    repository::Repository,
};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Aggregate counts for the dashboard. Breakdowns always contain every
    /// enum value, zero counts included, so the buckets sum to the totals.
    pub async fn get_stats(&self) -> AppResult<DashboardStats> {
        let pool = &self.repository.pool;

        let total_equipment: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment")
            .fetch_one(pool)
            .await?;

        let total_requests: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_requests")
            .fetch_one(pool)
            .await?;

        let teams_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_teams")
            .fetch_one(pool)
            .await?;

        // Zero-seed the breakdowns so every enum value is present
        let mut requests_by_status: indexmap::IndexMap<String, i64> = RequestStatus::ALL
            .iter()
            .map(|s| (s.to_string(), 0))
            .collect();
        let mut requests_by_type: indexmap::IndexMap<String, i64> = RequestType::ALL
            .iter()
            .map(|t| (t.to_string(), 0))
            .collect();

        let status_rows = sqlx::query(
            "SELECT status, COUNT(*) as count FROM maintenance_requests GROUP BY status",
        )
        .fetch_all(pool)
        .await?;
        for row in status_rows {
            let status: String = row.get("status");
            let count: i64 = row.get("count");
            if let Some(bucket) = requests_by_status.get_mut(&status) {
                *bucket = count;
            }
        }

        let type_rows = sqlx::query(
            "SELECT request_type, COUNT(*) as count FROM maintenance_requests GROUP BY request_type",
        )
        .fetch_all(pool)
        .await?;
        for row in type_rows {
            let request_type: String = row.get("request_type");
            let count: i64 = row.get("count");
            if let Some(bucket) = requests_by_type.get_mut(&request_type) {
                *bucket = count;
            }
        }

        // Active = New + In Progress, computed from the same buckets so the
        // response stays internally consistent
        let active_requests = RequestStatus::ACTIVE
            .iter()
            .filter_map(|s| requests_by_status.get(&s.to_string()))
            .sum();

        Ok(DashboardStats {
            total_equipment,
            total_requests,
            active_requests,
            teams_count,
            requests_by_status,
            requests_by_type,
        })
    }
}
