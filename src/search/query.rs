// ABOUTME: Group search execution - joins the group table, builds the
// ABOUTME: relevance clause, counts before fetching, and annotates matches.

use async_trait::async_trait;

use crate::entity::Group;
use crate::error::SearchError;

use super::highlight_relevant;

/// Volatile key for the highlighted name match.
pub const MATCHED_TITLE: &str = "search_matched_title";

/// Volatile key for the highlighted description match.
pub const MATCHED_DESCRIPTION: &str = "search_matched_description";

/// Parameters for an entity search, as handed in by the host.
///
/// Joins and wheres are raw SQL fragments in the host's query-builder
/// dialect; the augmenter only prepends and appends to them.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// The user's search query.
    pub query: String,

    /// JOIN fragments, applied in order.
    pub joins: Vec<String>,

    /// WHERE fragments, AND-ed together.
    pub wheres: Vec<String>,

    /// Named sort requested by the user (e.g. "alpha").
    pub sort: Option<String>,

    /// Sort direction ("asc" or "desc").
    pub order: Option<String>,

    /// Explicit ORDER BY clause; wins over `sort` when already set.
    pub order_by: Option<String>,

    /// Page size.
    pub limit: usize,

    /// Page offset.
    pub offset: usize,
}

impl SearchParams {
    /// Create params for a query string.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: 10,
            ..Self::default()
        }
    }
}

/// Result of a group search.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    /// Matching groups, annotated with volatile highlight data.
    pub entities: Vec<Group>,

    /// Total number of matches, independent of paging.
    pub count: u64,
}

/// Entity query execution, owned by the host platform.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run the query in count mode.
    async fn count(&self, params: &SearchParams) -> Result<u64, anyhow::Error>;

    /// Run the full fetch.
    async fn fetch(&self, params: &SearchParams) -> Result<Vec<Group>, anyhow::Error>;
}

/// Augments the host's generic group search.
#[derive(Debug, Clone)]
pub struct GroupSearch {
    table_prefix: String,
}

impl GroupSearch {
    /// Create a search augmenter for the host's table prefix.
    pub fn new(table_prefix: impl Into<String>) -> Self {
        Self {
            table_prefix: table_prefix.into(),
        }
    }

    /// Execute a group search through the host backend.
    ///
    /// Runs the count query first and skips the full fetch entirely when
    /// nothing matches.
    pub async fn execute(
        &self,
        params: &SearchParams,
        backend: &dyn SearchBackend,
    ) -> Result<SearchResults, SearchError> {
        let mut params = params.clone();
        let query = sanitize_query(&params.query);

        params.joins.insert(
            0,
            format!(
                "JOIN {}groups_entity ge ON e.guid = ge.guid",
                self.table_prefix
            ),
        );
        params
            .wheres
            .push(where_sql("ge", &["name", "description"], &query));

        let count = backend.count(&params).await.map_err(SearchError::Backend)?;

        // no need to continue if nothing here
        if count == 0 {
            return Ok(SearchResults::default());
        }

        if params.sort.is_some() || params.order_by.is_none() {
            params.order_by = Some(order_by_sql(
                "e",
                "ge",
                params.sort.as_deref(),
                params.order.as_deref(),
            ));
        }
        let mut entities = backend.fetch(&params).await.map_err(SearchError::Backend)?;

        // highlight against the same escaped text the WHERE clause matched
        for entity in &mut entities {
            let title = highlight_relevant(&entity.name, &query);
            entity.set_volatile(MATCHED_TITLE, title);

            let description = highlight_relevant(&entity.description, &query);
            entity.set_volatile(MATCHED_DESCRIPTION, description);
        }

        Ok(SearchResults { entities, count })
    }
}

/// Escape a raw query for inclusion in a LIKE fragment.
pub fn sanitize_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for ch in query.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("''"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            _ => out.push(ch),
        }
    }
    out
}

/// Substring-relevance WHERE fragment over the given columns.
pub fn where_sql(alias: &str, columns: &[&str], query: &str) -> String {
    let clauses: Vec<String> = columns
        .iter()
        .map(|column| format!("{}.{} LIKE '%{}%'", alias, column, query))
        .collect();
    format!("({})", clauses.join(" OR "))
}

/// ORDER BY clause for a named sort and direction.
pub fn order_by_sql(
    entity_alias: &str,
    group_alias: &str,
    sort: Option<&str>,
    order: Option<&str>,
) -> String {
    let direction = match order {
        Some("asc") => "ASC",
        _ => "DESC",
    };
    match sort {
        Some("alpha") => format!("{}.name {}", group_alias, direction),
        Some("updated") => format!("{}.time_updated {}", entity_alias, direction),
        _ => format!("{}.time_created {}", entity_alias, direction),
    }
}
