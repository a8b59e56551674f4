//! Moderation states for videos and location reports.
//!
//! Both entities start out `pending` and are moved to `approved` or
//! `rejected` by an admin. Video decisions can be re-issued (an admin may
//! flip an approved clip to rejected) but nothing ever returns to pending.
//! Location reports are decided exactly once, because approval copies the
//! suggested coordinates onto the video.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// Moderation status of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Pending,
    Approved,
    Rejected,
}

impl VideoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Approved => STATUS_APPROVED,
            Self::Rejected => STATUS_REJECTED,
        }
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_APPROVED => Ok(Self::Approved),
            STATUS_REJECTED => Ok(Self::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid video status '{other}'. Must be one of: pending, approved, rejected"
            ))),
        }
    }
}

/// Moderation status of a location report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Approved => STATUS_APPROVED,
            Self::Rejected => STATUS_REJECTED,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_APPROVED => Ok(Self::Approved),
            STATUS_REJECTED => Ok(Self::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid report status '{other}'. Must be one of: pending, approved, rejected"
            ))),
        }
    }
}

/// An admin's verdict on a pending item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn video_status(self) -> VideoStatus {
        match self {
            Self::Approve => VideoStatus::Approved,
            Self::Reject => VideoStatus::Rejected,
        }
    }

    pub fn report_status(self) -> ReportStatus {
        match self {
            Self::Approve => ReportStatus::Approved,
            Self::Reject => ReportStatus::Rejected,
        }
    }
}

impl TryFrom<VideoStatus> for Decision {
    type Error = CoreError;

    /// `pending` is not a decision.
    fn try_from(status: VideoStatus) -> Result<Self, Self::Error> {
        match status {
            VideoStatus::Approved => Ok(Self::Approve),
            VideoStatus::Rejected => Ok(Self::Reject),
            VideoStatus::Pending => Err(CoreError::Validation(
                "A video cannot be moved back to pending".into(),
            )),
        }
    }
}

/// Check that a location report can still be decided.
pub fn ensure_report_pending(current: ReportStatus) -> Result<(), CoreError> {
    if current == ReportStatus::Pending {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Location report has already been {current}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn video_status_round_trips_through_str() {
        for status in [VideoStatus::Pending, VideoStatus::Approved, VideoStatus::Rejected] {
            assert_eq!(status.as_str().parse::<VideoStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_video_status_is_validation_error() {
        assert_matches!("deleted".parse::<VideoStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn decision_from_target_status() {
        assert_eq!(Decision::try_from(VideoStatus::Approved).unwrap(), Decision::Approve);
        assert_eq!(Decision::try_from(VideoStatus::Rejected).unwrap(), Decision::Reject);
        assert_matches!(
            Decision::try_from(VideoStatus::Pending),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn decision_targets() {
        assert_eq!(Decision::Approve.video_status(), VideoStatus::Approved);
        assert_eq!(Decision::Reject.report_status(), ReportStatus::Rejected);
    }

    #[test]
    fn decided_report_conflicts() {
        assert!(ensure_report_pending(ReportStatus::Pending).is_ok());
        assert_matches!(
            ensure_report_pending(ReportStatus::Approved),
            Err(CoreError::Conflict(msg)) if msg.contains("approved")
        );
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&VideoStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
