use async_graphql::{ID, SimpleObject};
use products_hr::OrgNode;

/// Org chart node as exposed over GraphQL.
#[derive(Clone, Debug, SimpleObject)]
pub struct OrgChartNode {
    pub id: ID,
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    /// Employees in this subtree, this one included.
    pub headcount: i32,
    pub reports: Vec<OrgChartNode>,
}

impl From<OrgNode> for OrgChartNode {
    fn from(node: OrgNode) -> Self {
        let reports: Vec<OrgChartNode> = node.children.into_iter().map(Self::from).collect();
        let headcount = 1 + reports.iter().map(|report| report.headcount).sum::<i32>();
        Self {
            id: ID(node.id),
            full_name: node.full_name,
            job_title: node.job_title,
            department: node.department,
            email: node.email,
            phone: node.phone,
            avatar_url: node.avatar_url,
            headcount,
            reports,
        }
    }
}
