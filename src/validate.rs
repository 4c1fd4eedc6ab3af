//! Structural validation of incoming records
//!
//! Records arrive over the wire already parsed; this layer checks the
//! required/format constraints before anything reaches the store. All
//! failures are collected and reported together.

use crate::error::{MetadexError, Result};
use crate::models::{Maintainer, Metadata};

/// Structural validation for wire-decoded values
pub trait Validate {
    /// Collect a human-readable description of every constraint violation
    fn validation_failures(&self, failures: &mut Vec<String>);

    /// Validate, reporting all failures at once
    fn validate(&self) -> Result<()> {
        let mut failures = Vec::new();
        self.validation_failures(&mut failures);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(MetadexError::Validation(failures.join(", ")))
        }
    }
}

impl Validate for Metadata {
    fn validation_failures(&self, failures: &mut Vec<String>) {
        require(failures, "title", &self.title);
        require(failures, "version", &self.version);
        if self.maintainers.is_empty() {
            failures.push("maintainers must not be empty".to_string());
        }
        for (i, maintainer) in self.maintainers.iter().enumerate() {
            let mut inner = Vec::new();
            maintainer.validation_failures(&mut inner);
            failures.extend(
                inner
                    .into_iter()
                    .map(|failure| format!("maintainers[{}].{}", i, failure)),
            );
        }
        require(failures, "company", &self.company);
        require(failures, "license", &self.license);
        require(failures, "description", &self.description);
    }
}

impl Validate for Maintainer {
    fn validation_failures(&self, failures: &mut Vec<String>) {
        require(failures, "name", &self.name);
        require(failures, "email", &self.email);
        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            failures.push("email must be a valid address".to_string());
        }
    }
}

fn require(failures: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        failures.push(format!("{} is required", field));
    }
}

/// Structural email check: one @, non-empty local part, dotted domain
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
