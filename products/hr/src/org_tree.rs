//! Reporting-hierarchy tree built from a flat list of employee records.
//!
//! The builder never recurses: it indexes subordinates by manager id, walks
//! breadth-first from the chosen root while tracking visited records, and
//! assembles nodes bottom-up. A record reached twice means the manager links
//! form a cycle reachable from the root, which is reported as an error.

use std::collections::{HashMap, VecDeque, hash_map::Entry};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::employee::EmployeeRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrgTreeError {
    #[error("manager cycle detected at employee {employee_id}")]
    ManagerCycle { employee_id: String },
}

/// Rendering-ready node of the org chart.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrgNode {
    pub id: String,
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    fn from_record(record: &EmployeeRecord, children: Vec<OrgNode>) -> Self {
        Self {
            id: record.id.clone(),
            full_name: record.full_name.clone(),
            job_title: record.job_title.clone(),
            department: record.department.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            avatar_url: record.avatar_url.clone(),
            children,
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn headcount(&self) -> usize {
        self.iter().count()
    }

    /// Levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    pub fn find(&self, id: &str) -> Option<&OrgNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Pre-order traversal: a node is yielded before its reports, reports in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a OrgNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a OrgNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Builds an [`OrgNode`] tree from employee records.
#[derive(Clone, Debug)]
pub struct OrgTreeBuilder<'a> {
    records: &'a [EmployeeRecord],
    root: Option<&'a str>,
}

impl<'a> OrgTreeBuilder<'a> {
    pub fn new(records: &'a [EmployeeRecord]) -> Self {
        Self {
            records,
            root: None,
        }
    }

    pub fn root(mut self, root: Option<&'a str>) -> Self {
        self.root = root;
        self
    }

    /// Index of the record that becomes the top of the tree.
    ///
    /// An explicit root wins when it matches a record, then the first record
    /// without a manager, then the first record overall.
    pub fn select_root(&self) -> Option<usize> {
        let by_id = self.index_by_id();
        self.select_root_in(&by_id)
    }

    fn select_root_in(&self, by_id: &HashMap<&'a str, usize>) -> Option<usize> {
        if self.records.is_empty() {
            return None;
        }
        if let Some(idx) = self.root.and_then(|id| by_id.get(id).copied()) {
            return Some(idx);
        }
        if let Some(root) = self.root {
            debug!(root, "requested root not found; falling back");
        }
        // Shadowed duplicates never qualify; index 0 is always canonical.
        self.records
            .iter()
            .enumerate()
            .position(|(idx, record)| {
                record.is_top_level() && by_id.get(record.id.as_str()) == Some(&idx)
            })
            .or(Some(0))
    }

    /// Returns `Ok(None)` when there are no records.
    pub fn build(&self) -> Result<Option<OrgNode>, OrgTreeError> {
        let by_id = self.index_by_id();
        let Some(root_idx) = self.select_root_in(&by_id) else {
            return Ok(None);
        };

        let mut reports: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, record) in self.records.iter().enumerate() {
            if by_id.get(record.id.as_str()) != Some(&idx) {
                continue;
            }
            if let Some(manager) = record.manager_id.as_deref() {
                reports.entry(manager).or_default().push(idx);
            }
        }

        let mut visited = vec![false; self.records.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([root_idx]);
        visited[root_idx] = true;
        while let Some(idx) = queue.pop_front() {
            order.push(idx);
            let id = self.records[idx].id.as_str();
            for &child in reports.get(id).map(Vec::as_slice).unwrap_or_default() {
                if visited[child] {
                    return Err(OrgTreeError::ManagerCycle {
                        employee_id: self.records[child].id.clone(),
                    });
                }
                visited[child] = true;
                queue.push_back(child);
            }
        }

        // Breadth-first order puts every report after its manager, so walking
        // it backwards sees each child built before its parent.
        let mut built: Vec<Option<OrgNode>> = vec![None; self.records.len()];
        for &idx in order.iter().rev() {
            let record = &self.records[idx];
            let children = reports
                .get(record.id.as_str())
                .map(|list| list.iter().filter_map(|&c| built[c].take()).collect())
                .unwrap_or_default();
            built[idx] = Some(OrgNode::from_record(record, children));
        }

        debug!(
            root = %self.records[root_idx].id,
            reachable = order.len(),
            total = self.records.len(),
            "org tree built"
        );
        Ok(built[root_idx].take())
    }

    fn index_by_id(&self) -> HashMap<&'a str, usize> {
        let mut by_id = HashMap::with_capacity(self.records.len());
        for (idx, record) in self.records.iter().enumerate() {
            match by_id.entry(record.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
                Entry::Occupied(_) => {
                    warn!(employee_id = %record.id, "duplicate employee id ignored");
                }
            }
        }
        by_id
    }
}

pub fn build_org_tree(
    records: &[EmployeeRecord],
    root: Option<&str>,
) -> Result<Option<OrgNode>, OrgTreeError> {
    OrgTreeBuilder::new(records).root(root).build()
}
