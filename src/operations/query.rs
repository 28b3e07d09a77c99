//! Transaction search over GraphQL.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::codec::Tag;
use crate::gateway::GatewayTransport;
use crate::operations::{require_address, OperationError, OperationResult};

/// Page size limit enforced by gateways.
pub const MAX_PAGE_SIZE: u32 = 100;

const TRANSACTIONS_QUERY: &str = r#"
query Transactions($tags: [TagFilter!], $owners: [String!], $first: Int, $after: String) {
  transactions(tags: $tags, owners: $owners, first: $first, after: $after) {
    pageInfo { hasNextPage }
    edges {
      cursor
      node {
        id
        owner { address }
        recipient
        tags { name value }
        data { size type }
        block { height timestamp }
      }
    }
  }
}
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTransactionsParams {
    /// Plain-text tags; each must match exactly.
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default = "default_first")]
    pub first: u32,
    /// Cursor from a previous page.
    #[serde(default)]
    pub after: Option<String>,
}

fn default_first() -> u32 {
    10
}

impl Default for QueryTransactionsParams {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            owners: Vec::new(),
            first: default_first(),
            after: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TransactionsData {
    transactions: Connection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Connection {
    page_info: PageInfo,
    edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
}

#[derive(Debug, Deserialize)]
struct Edge {
    cursor: String,
    node: Node,
}

#[derive(Debug, Deserialize)]
struct Node {
    id: String,
    owner: Owner,
    #[serde(default)]
    recipient: String,
    #[serde(default)]
    tags: Vec<Tag>,
    data: Option<DataInfo>,
    block: Option<BlockInfo>,
}

#[derive(Debug, Deserialize)]
struct Owner {
    address: String,
}

#[derive(Debug, Deserialize)]
struct DataInfo {
    size: String,
    #[serde(rename = "type")]
    content_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BlockInfo {
    height: u64,
    timestamp: u64,
}

/// One search hit, flattened for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionSummary {
    pub id: String,
    pub owner: String,
    pub recipient: String,
    pub tags: Vec<Tag>,
    pub data_size: Option<String>,
    pub content_type: Option<String>,
    pub block_height: Option<u64>,
    pub block_timestamp: Option<u64>,
}

/// Search transactions by tag and owner.
pub async fn query_transactions(
    transport: &GatewayTransport,
    params: QueryTransactionsParams,
) -> OperationResult<Value> {
    if params.first == 0 || params.first > MAX_PAGE_SIZE {
        return Err(OperationError::InvalidParameter(format!(
            "first must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, params.first
        )));
    }
    for owner in &params.owners {
        require_address(owner)?;
    }

    let data: TransactionsData = transport
        .graphql_request(TRANSACTIONS_QUERY, Some(build_variables(&params)))
        .await?;

    let next_cursor = data.transactions.edges.last().map(|e| e.cursor.clone());
    let transactions: Vec<TransactionSummary> = data
        .transactions
        .edges
        .into_iter()
        .map(|edge| summarize(edge.node))
        .collect();

    Ok(json!({
        "count": transactions.len(),
        "has_next_page": data.transactions.page_info.has_next_page,
        "cursor": next_cursor,
        "transactions": transactions,
    }))
}

fn build_variables(params: &QueryTransactionsParams) -> Value {
    let tags: Vec<Value> = params
        .tags
        .iter()
        .map(|tag| json!({ "name": tag.name, "values": [tag.value] }))
        .collect();

    let tags = if tags.is_empty() { Value::Null } else { json!(tags) };
    let owners = if params.owners.is_empty() {
        Value::Null
    } else {
        json!(params.owners)
    };

    json!({
        "tags": tags,
        "owners": owners,
        "first": params.first,
        "after": params.after,
    })
}

fn summarize(node: Node) -> TransactionSummary {
    let (data_size, content_type) = match node.data {
        Some(data) => (Some(data.size), data.content_type),
        None => (None, None),
    };
    TransactionSummary {
        id: node.id,
        owner: node.owner.address,
        recipient: node.recipient,
        tags: node.tags,
        data_size,
        content_type,
        block_height: node.block.as_ref().map(|b| b.height),
        block_timestamp: node.block.as_ref().map(|b| b.timestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_shape() {
        let params = QueryTransactionsParams {
            tags: vec![Tag::new("App-Name", "demo")],
            first: 5,
            ..Default::default()
        };
        let variables = build_variables(&params);
        assert_eq!(variables["tags"][0]["name"], "App-Name");
        assert_eq!(variables["tags"][0]["values"][0], "demo");
        assert!(variables["owners"].is_null());
        assert!(variables["after"].is_null());
        assert_eq!(variables["first"], 5);
    }

    #[test]
    fn test_summarize_pending_node() {
        let node: Node = serde_json::from_value(json!({
            "id": "tx",
            "owner": { "address": "addr" },
            "recipient": "",
            "tags": [{ "name": "Content-Type", "value": "text/plain" }],
            "data": { "size": "12", "type": null },
            "block": null
        }))
        .unwrap();
        let summary = summarize(node);
        assert_eq!(summary.tags, vec![Tag::new("Content-Type", "text/plain")]);
        assert_eq!(summary.data_size.as_deref(), Some("12"));
        assert_eq!(summary.block_height, None);
    }
}
