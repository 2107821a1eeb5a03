//! Mapping session state for interactive mapping workflows.
//!
//! A [`MappingSession`] owns the template, the seller columns and the
//! current assignment. It changes only through [`SessionCommand`]s, and each
//! command replaces the assignment in one step, so a caller never observes
//! a half-merged state.

use std::collections::BTreeMap;

use colmap_model::{
    Assignment, ColumnMapping, MappingRecord, MappingSummary, SourceColumn, TargetField,
};
use tracing::{debug, warn};

use crate::check::{CompletenessReport, check_completeness, summarize};
use crate::engine::suggest_defaults;
use crate::error::{MappingError, Result};
use crate::merge::merge_defaults;
use crate::score::{Candidate, rank_candidates};

/// An edit applied to a [`MappingSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Switch to another template. Choices for fields that still exist are
    /// kept.
    LoadTemplate(Vec<TargetField>),
    /// Switch to another seller file. Clears every choice first.
    LoadSourceFile(Vec<SourceColumn>),
    /// Seed the selection from a stored source-to-target mapping. Entries
    /// naming a field or column that is not loaded are dropped.
    LoadExisting(ColumnMapping),
    /// Fill unmapped fields with the matcher's defaults.
    AutoMap,
    /// Manually pick a column for a field.
    Select { target: String, source: String },
    /// Manually unmap a field.
    Clear { target: String },
    /// Drop template, file and selection.
    Reset,
}

/// State of a mapping operation between one template and one seller file.
#[derive(Debug, Clone)]
pub struct MappingSession {
    targets: Vec<TargetField>,
    sources: Vec<SourceColumn>,
    assignment: Assignment,
    auto_map: bool,
}

impl Default for MappingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingSession {
    /// Empty session that auto-maps after every template or file load.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            sources: Vec::new(),
            assignment: Assignment::new(),
            auto_map: true,
        }
    }

    /// Turn automatic mapping on loads on or off. [`SessionCommand::AutoMap`]
    /// still works either way.
    #[must_use]
    pub fn with_auto_map(mut self, enabled: bool) -> Self {
        self.auto_map = enabled;
        self
    }

    pub fn apply(&mut self, command: SessionCommand) -> Result<()> {
        match command {
            SessionCommand::LoadTemplate(targets) => {
                debug!(targets = targets.len(), "load template");
                self.assignment = self
                    .assignment
                    .iter()
                    .filter(|(target, _)| targets.iter().any(|t| t.name == *target))
                    .map(|(target, source)| (target.to_string(), source.to_string()))
                    .collect();
                self.targets = targets;
                if self.auto_map {
                    self.auto_fill();
                }
            }
            SessionCommand::LoadSourceFile(sources) => {
                debug!(sources = sources.len(), "load source file");
                self.sources = sources;
                self.assignment = Assignment::new();
                if self.auto_map {
                    self.auto_fill();
                }
            }
            SessionCommand::LoadExisting(mapping) => {
                debug!(entries = mapping.len(), "load existing mapping");
                self.assignment = mapping
                    .to_assignment()
                    .iter()
                    .filter(|(target, source)| {
                        let known = self.has_target(target) && self.has_source(source);
                        if !known {
                            warn!(%target, %source, "dropping stored mapping entry");
                        }
                        known
                    })
                    .map(|(target, source)| (target.to_string(), source.to_string()))
                    .collect();
            }
            SessionCommand::AutoMap => self.auto_fill(),
            SessionCommand::Select { target, source } => {
                self.ensure_target(&target)?;
                if !self.has_source(&source) {
                    return Err(MappingError::UnknownSource(source));
                }
                debug!(%target, %source, "manual selection");
                let mut next = self.assignment.clone();
                next.set(target, source);
                self.assignment = next;
            }
            SessionCommand::Clear { target } => {
                self.ensure_target(&target)?;
                debug!(%target, "manual clear");
                let mut next = self.assignment.clone();
                next.clear(&target);
                self.assignment = next;
            }
            SessionCommand::Reset => {
                debug!("reset session");
                *self = Self::new().with_auto_map(self.auto_map);
            }
        }
        Ok(())
    }

    pub fn targets(&self) -> &[TargetField] {
        &self.targets
    }

    pub fn sources(&self) -> &[SourceColumn] {
        &self.sources
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn summary(&self) -> MappingSummary {
        summarize(&self.targets, &self.assignment)
    }

    pub fn check(&self) -> CompletenessReport {
        check_completeness(&self.targets, &self.assignment)
    }

    /// All seller columns ranked for one field, best first.
    pub fn candidates_for(&self, target: &str) -> Result<Vec<Candidate>> {
        self.ensure_target(target)?;
        Ok(rank_candidates(target, &self.sources))
    }

    /// Final source-to-target mapping for the mapping store.
    ///
    /// Refuses while required fields are unmapped, when one column feeds
    /// several fields, or when nothing is mapped at all. Entries for names
    /// outside the template are dropped.
    pub fn to_record(
        &self,
        marketplace_id: impl Into<String>,
        seller_file_id: impl Into<String>,
    ) -> Result<MappingRecord> {
        let report = self.check();
        if report.is_blocked() {
            return Err(MappingError::RequiredUnmapped {
                fields: report.missing_required,
            });
        }
        let assignment: Assignment = self
            .assignment
            .iter()
            .filter(|(target, _)| self.has_target(target))
            .map(|(target, source)| (target.to_string(), source.to_string()))
            .collect();

        let mut by_column: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (target, source) in assignment.iter() {
            by_column.entry(source).or_default().push(target.to_string());
        }
        if let Some((column, targets)) = by_column.into_iter().find(|(_, t)| t.len() > 1) {
            return Err(MappingError::SharedColumn {
                column: column.to_string(),
                targets,
            });
        }

        let column_mapping = assignment.to_column_mapping();
        if column_mapping.is_empty() {
            return Err(MappingError::NoMappedColumns);
        }
        Ok(MappingRecord {
            marketplace_id: marketplace_id.into(),
            seller_file_id: seller_file_id.into(),
            column_mapping,
        })
    }

    fn auto_fill(&mut self) {
        if self.targets.is_empty() || self.sources.is_empty() {
            return;
        }
        let defaults = suggest_defaults(&self.targets, &self.sources);
        self.assignment = merge_defaults(&self.assignment, &defaults, &self.targets);
    }

    fn has_target(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t.name == name)
    }

    fn has_source(&self, name: &str) -> bool {
        self.sources.iter().any(|s| s.name == name)
    }

    fn ensure_target(&self, name: &str) -> Result<()> {
        if self.has_target(name) {
            Ok(())
        } else {
            Err(MappingError::UnknownTarget(name.to_string()))
        }
    }
}
