mod org_chart;

use std::sync::Arc;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, ID, Object, Schema, SimpleObject,
};
use platform_api::{ApiError, ApiResult, internal_error};
use products_hr::{DuplicateCheckRequest, EmployeeDirectory, build_org_tree, check_duplicate};
use serde::Serialize;
use tracing::instrument;

pub use org_chart::OrgChartNode;

pub type SchemaType = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Per-schema data shared by the resolvers.
#[derive(Clone)]
pub struct GraphqlData {
    pub directory: Arc<dyn EmployeeDirectory>,
    pub default_root: Option<String>,
}

fn graphql_data<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a GraphqlData> {
    ctx.data::<GraphqlData>()
        .map_err(|err| internal_error(anyhow::anyhow!("schema data missing: {}", err.message)))
}

pub fn build_schema(data: GraphqlData) -> SchemaType {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(data)
        .finish()
}

/// SDL without any runtime data attached.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[instrument(name = "graphql.health", skip_all)]
    async fn health(&self) -> ApiResult<HealthPayload> {
        Ok(HealthPayload { ok: true })
    }

    #[instrument(name = "graphql.version", skip_all)]
    async fn version(&self) -> ApiResult<String> {
        Ok(env!("CARGO_PKG_VERSION").to_string())
    }

    /// Reporting tree for the active employees; null when there are none.
    #[instrument(name = "graphql.org_chart", skip(self, ctx))]
    async fn org_chart(
        &self,
        ctx: &Context<'_>,
        root: Option<String>,
    ) -> async_graphql::Result<Option<OrgChartNode>> {
        let data = graphql_data(ctx)?;
        let records = data
            .directory
            .active_employees()
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        let root = root
            .as_deref()
            .map(str::trim)
            .filter(|root| !root.is_empty())
            .or(data.default_root.as_deref());
        let tree = build_org_tree(&records, root).map_err(|err| ApiError::from(err).extend())?;
        Ok(tree.map(OrgChartNode::from))
    }

    /// Whether `value` is already used for `field` (`employee_number` or `email`).
    #[instrument(name = "graphql.employee_exists", skip(self, ctx, value))]
    async fn employee_exists(
        &self,
        ctx: &Context<'_>,
        field: Option<String>,
        value: Option<String>,
        exclude_id: Option<ID>,
    ) -> async_graphql::Result<bool> {
        let data = graphql_data(ctx)?;
        let request = DuplicateCheckRequest {
            field,
            value,
            exclude_id: exclude_id.map(|id| id.0),
        };
        let response = check_duplicate(data.directory.as_ref(), request)
            .await
            .map_err(|err| ApiError::from(err).extend())?;
        Ok(response.exists)
    }
}

#[derive(Clone, Debug, SimpleObject, Serialize)]
pub struct HealthPayload {
    pub ok: bool,
}
