//! Calendar document validation for the `check` command.
//!
//! Errors make `check` fail; advisories flag data the evaluator accepts
//! but that almost certainly does not match the author's intent. Build
//! and preview stay permissive and only reject unparseable files.

use std::collections::HashSet;

use crate::models::calendar::Calendar;
use crate::models::dates::DateSpec;

/// Validation error with the stage it concerns, when there is one.
#[derive(Debug)]
pub struct ValidationError {
    pub message: String,
    pub stage: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(stage) = &self.stage {
            write!(f, "Stage '{}': {}", stage, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Non-fatal finding reported alongside validation.
#[derive(Debug)]
pub struct Advisory {
    pub message: String,
    pub stage: String,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage '{}': {}", self.stage, self.message)
    }
}

pub fn validate(calendar: &Calendar) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if calendar.etapas.is_empty() {
        errors.push(ValidationError {
            message: "No stages defined".to_string(),
            stage: None,
        });
    }

    let mut seen_orders = HashSet::new();
    for stage in &calendar.etapas {
        if stage.name.trim().is_empty() {
            errors.push(ValidationError {
                message: format!("Stage with order {} has an empty name", stage.order),
                stage: None,
            });
        }

        if !seen_orders.insert(stage.order) {
            errors.push(ValidationError {
                message: format!("Duplicate flow order {}", stage.order),
                stage: Some(stage.name.clone()),
            });
        }

        if let Some(DateSpec::Period {
            start: Some(start),
            end: Some(end),
        }) = &stage.dates
        {
            if start > end {
                errors.push(ValidationError {
                    message: format!("Period starts {start} but ends earlier, {end}"),
                    stage: Some(stage.name.clone()),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn advisories(calendar: &Calendar) -> Vec<Advisory> {
    let mut findings = Vec::new();

    for stage in &calendar.etapas {
        match &stage.dates {
            Some(DateSpec::Single {
                start: Some(_),
                end: Some(_),
            }) => {
                findings.push(Advisory {
                    message: "single-date stage sets fecha_fin, but activation ignores it \
                              once fecha_inicio is present"
                        .to_string(),
                    stage: stage.name.clone(),
                });
            }
            Some(DateSpec::Period { start: None, .. }) => {
                findings.push(Advisory {
                    message: "period has no fecha_inicio, the stage can never become active"
                        .to_string(),
                    stage: stage.name.clone(),
                });
            }
            _ => {}
        }

        if let Some(featured) = &stage.featured {
            if featured.show_in_banner && featured.has_button && featured.button_link.is_none() {
                findings.push(Advisory {
                    message: "banner button requested without a link, renders as plain text"
                        .to_string(),
                    stage: stage.name.clone(),
                });
            }
        }

        if stage.order == 0 && stage.dates.as_ref().is_some_and(|d| d.start().is_some()) {
            findings.push(Advisory {
                message: "pre-announcement entry has a fecha_inicio, so the banner fallback \
                          never applies"
                    .to_string(),
                stage: stage.name.clone(),
            });
        }
    }

    findings
}
