// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Domain-logic layer over the issue repository.
//!
//! The [`IssueManager`] exposes the user-facing operations: insertion,
//! removal, the status toggle, and the filtered views. Every query
//! recomputes against the repository's current contents; nothing is cached.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::issue::Issue;
use crate::repository::IssueRepository;

/// Query and update layer for a repository of issues.
///
/// The manager holds no state of its own beyond the repository injected at
/// construction.
#[derive(Debug, Default)]
pub struct IssueManager {
    repository: IssueRepository,
}

impl IssueManager {
    /// Creates a manager over the given repository.
    pub fn new(repository: IssueRepository) -> Self {
        IssueManager { repository }
    }

    /// Returns a shared view of the underlying repository.
    pub fn repository(&self) -> &IssueRepository {
        &self.repository
    }

    /// Adds an issue to the store.
    pub fn add(&mut self, issue: Issue) {
        self.repository.add(issue);
    }

    /// Removes the first stored issue equal to the given one, if any.
    pub fn remove(&mut self, issue: &Issue) {
        self.repository.remove(issue);
    }

    /// Returns all issues in insertion order.
    pub fn get_all(&self) -> &[Issue] {
        self.repository.get_all()
    }

    /// Returns all open issues in insertion order.
    pub fn get_all_open(&self) -> Vec<Issue> {
        self.filtered(|issue| issue.is_open())
    }

    /// Returns all closed issues in insertion order.
    pub fn get_all_closed(&self) -> Vec<Issue> {
        self.filtered(|issue| !issue.is_open())
    }

    /// Returns all issues reported by the given author.
    ///
    /// The match is exact and case-sensitive.
    pub fn filter_by_author(&self, author: &str) -> Vec<Issue> {
        self.filtered(|issue| issue.author == author)
    }

    /// Returns all issues carrying every label in the given set.
    ///
    /// An issue with labels beyond the queried set still matches.
    pub fn filter_by_label(&self, labels: &BTreeSet<String>) -> Vec<Issue> {
        self.filtered(|issue| issue.has_labels(labels))
    }

    /// Returns all issues assigned to the given assignee (exact match).
    pub fn filter_by_assignee(&self, assignee: &str) -> Vec<Issue> {
        self.filtered(|issue| issue.assignee == assignee)
    }

    /// Returns all issues belonging to the given project (exact match).
    pub fn filter_by_project(&self, project: &str) -> Vec<Issue> {
        self.filtered(|issue| issue.project == project)
    }

    /// Returns all issues scheduled under every milestone in the given set.
    pub fn filter_by_milestone(&self, milestones: &BTreeSet<String>) -> Vec<Issue> {
        self.filtered(|issue| issue.has_milestones(milestones))
    }

    /// Toggles the open/closed status of the issue with the given id.
    ///
    /// Returns [`crate::Error::IssueNotFound`] if no stored issue has that
    /// id, leaving the store unmodified.
    pub fn update_issue(&mut self, id: u64) -> Result<()> {
        let issue = self.repository.find_by_id_mut(id)?;
        issue.status = issue.status.toggled();
        Ok(())
    }

    /// Collects the issues matching a predicate, preserving insertion order.
    fn filtered<P>(&self, predicate: P) -> Vec<Issue>
    where
        P: Fn(&Issue) -> bool,
    {
        self.repository
            .get_all()
            .iter()
            .filter(|issue| predicate(issue))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
