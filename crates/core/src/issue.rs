// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the tik issue tracker.
//!
//! This module contains the fundamental data types: Issue and Status.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Work is still pending or in flight.
    Open,
    /// Work has ended, whether completed or abandoned.
    Closed,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Closed => "closed",
        }
    }

    /// Returns the opposite state (open becomes closed and vice versa).
    pub fn toggled(&self) -> Status {
        match self {
            Status::Open => Status::Closed,
            Status::Closed => Status::Open,
        }
    }

    /// Returns true if this is the open state.
    pub fn is_open(&self) -> bool {
        matches!(self, Status::Open)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked unit of work.
///
/// Issues are constructed fully populated by the caller before being added
/// to a repository. The `id` is the lookup key; uniqueness is a caller
/// precondition and is never enforced here. After insertion only `status`
/// is ever mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Caller-assigned identifier used as the lookup key.
    pub id: u64,
    /// Short description of the work.
    pub title: String,
    /// Current lifecycle state.
    pub status: Status,
    /// Person who reported the issue.
    pub author: String,
    /// Classification tags (unordered, unique).
    pub labels: BTreeSet<String>,
    /// Project this issue belongs to.
    pub project: String,
    /// Milestones this issue is scheduled under.
    pub milestones: BTreeSet<String>,
    /// Person this issue is assigned to.
    pub assignee: String,
    /// Relative priority or size estimate.
    pub weight: u32,
}

impl Issue {
    /// Creates a new issue with empty classification fields.
    pub fn new(id: u64, title: String, status: Status, author: String) -> Self {
        Issue {
            id,
            title,
            status,
            author,
            labels: BTreeSet::new(),
            project: String::new(),
            milestones: BTreeSet::new(),
            assignee: String::new(),
            weight: 0,
        }
    }

    /// Sets the labels (builder pattern).
    pub fn with_labels(mut self, labels: BTreeSet<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the project (builder pattern).
    pub fn with_project(mut self, project: String) -> Self {
        self.project = project;
        self
    }

    /// Sets the milestones (builder pattern).
    pub fn with_milestones(mut self, milestones: BTreeSet<String>) -> Self {
        self.milestones = milestones;
        self
    }

    /// Sets the assignee (builder pattern).
    pub fn with_assignee(mut self, assignee: String) -> Self {
        self.assignee = assignee;
        self
    }

    /// Sets the weight (builder pattern).
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Returns true if the issue is currently open.
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Returns true if this issue carries every label in the given set.
    ///
    /// Labels beyond the queried set do not disqualify a match.
    pub fn has_labels(&self, labels: &BTreeSet<String>) -> bool {
        self.labels.is_superset(labels)
    }

    /// Returns true if this issue is scheduled under every milestone in the
    /// given set.
    pub fn has_milestones(&self, milestones: &BTreeSet<String>) -> bool {
        self.milestones.is_superset(milestones)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
