//! Project models.
//!
//! This module contains the [`ProjectData`] and [`ProjectPlan`] types that
//! define the work being quoted. A plan holds every project the company is
//! running (the monthly overhead schedule spans all of them) plus a
//! reference to the project currently being priced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The minimum allowed project duration, in months.
pub const MIN_PROJECT_DURATION_MONTHS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// A single project with its direct costs and calendar duration.
///
/// # Example
///
/// ```
/// use quote_engine::models::ProjectData;
/// use rust_decimal::Decimal;
///
/// let project = ProjectData {
///     id: "prj_001".to_string(),
///     name: "Website redesign".to_string(),
///     direct_costs: Decimal::new(500, 0),
///     duration_months: Decimal::new(15, 1), // 1.5 months
/// };
/// assert!(project.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    /// Unique identifier for the project.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Direct costs charged to the project as-is, not subject to overhead.
    #[serde(default)]
    pub direct_costs: Decimal,
    /// Project duration in calendar months. Fractional values are allowed,
    /// with a minimum of 0.5.
    pub duration_months: Decimal,
}

impl ProjectData {
    /// Checks the duration invariant.
    ///
    /// Returns `InvalidProject` when the duration is below
    /// [`MIN_PROJECT_DURATION_MONTHS`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.duration_months < MIN_PROJECT_DURATION_MONTHS {
            return Err(EngineError::InvalidProject {
                project_id: self.id.clone(),
                message: format!(
                    "duration_months is {}, must be at least {}",
                    self.duration_months, MIN_PROJECT_DURATION_MONTHS
                ),
            });
        }
        Ok(())
    }
}

/// An ordered collection of projects plus the active one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPlan {
    /// Every project in the plan, in display order.
    pub projects: Vec<ProjectData>,
    /// The id of the project currently being priced.
    pub active_project_id: String,
}

impl ProjectPlan {
    /// Returns the active project, or `ProjectNotFound` when the id does not
    /// match any project in the plan.
    pub fn active(&self) -> EngineResult<&ProjectData> {
        self.projects
            .iter()
            .find(|p| p.id == self.active_project_id)
            .ok_or_else(|| EngineError::ProjectNotFound {
                id: self.active_project_id.clone(),
            })
    }
}
