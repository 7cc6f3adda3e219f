//! HR vertical slice: employee records, the org chart builder and the
//! duplicate-check boundary used by the employee forms.

pub mod directory;
pub mod duplicate;
pub mod employee;
pub mod org_tree;

pub use directory::{DirectoryError, EmployeeDirectory};
pub use duplicate::{
    DuplicateCheck, DuplicateCheckError, DuplicateCheckRequest, DuplicateCheckResponse,
    DuplicateField, check_duplicate,
};
pub use employee::EmployeeRecord;
pub use org_tree::{OrgNode, OrgTreeBuilder, OrgTreeError, build_org_tree};
