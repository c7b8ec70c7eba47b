use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::session::Session;
use crate::features::reports::dtos::{ReportDto, UpdateReportStatusDto};
use crate::features::reports::models::Report;
use crate::features::statuses::ReportStatus;

/// Report lifecycle operations performed on fetched records
#[derive(Debug, Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Validate raw API records, dropping the ones that fail.
    ///
    /// Returns the valid reports in their original order.
    pub fn accept_all(&self, dtos: Vec<ReportDto>) -> Vec<Report> {
        dtos.into_iter()
            .filter_map(|dto| {
                let id = dto.id;
                match Report::try_from(dto) {
                    Ok(report) => Some(report),
                    Err(e) => {
                        tracing::warn!("Dropping invalid report {}: {}", id, e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Move a report to another status (admin moderation).
    ///
    /// Setting the status a report already has returns it unchanged.
    pub fn transition_status(
        &self,
        mut report: Report,
        dto: &UpdateReportStatusDto,
        session: &Session,
    ) -> Result<Report> {
        if !session.is_admin() {
            return Err(AppError::Forbidden(
                "Only admins can change report status".to_string(),
            ));
        }

        dto.validate()?;

        let target = ReportStatus::from_id(dto.status_id).ok_or_else(|| {
            AppError::Validation(format!("Unknown status id {}", dto.status_id))
        })?;

        if report.status_id == target.id() {
            tracing::debug!("Report {} already has status {}", report.id, target);
            return Ok(report);
        }

        let previous = report.status_id;
        report.status_id = target.id();

        tracing::info!(
            report_id = report.id,
            from = previous,
            to = %target,
            admin_id = session.user_id,
            "Report status changed"
        );

        Ok(report)
    }
}
