use super::params::ParamMap;
use crate::error::{BuildError, BuildResult};
use crate::render::{comma_list, substitute};
use crate::value::Value;

/// Fluent builder for one parameterized SQL statement.
///
/// The builder accumulates statement text and the matching `:name`
/// parameter set one clause at a time; nothing is ever executed. Clause
/// order is part of the contract:
///
/// - [`select`](StatementBuilder::select) **overwrites** everything
///   accumulated so far, so it must come first in its chain (a clause
///   appended before it is silently lost; the builder does not defend
///   against this);
/// - [`insert`](StatementBuilder::insert) also overwrites: an INSERT
///   never carries trailing predicate clauses;
/// - [`update`](StatementBuilder::update) and
///   [`delete`](StatementBuilder::delete) **prepend** their clause to the
///   accumulated text, so predicates (`and_where`, `limit`, `group_by`)
///   are built first and the mutating clause lands in front of them.
///
/// A builder is scoped to exactly one table per construction session;
/// [`set_table`](StatementBuilder::set_table) resets all accumulated
/// state. The instance is ordinary mutable state, exclusively owned by
/// one build sequence at a time; share it across concurrent builds only
/// behind external synchronization.
///
/// # Example
///
/// ```
/// use sqlbind::StatementBuilder;
///
/// let mut sb = StatementBuilder::new();
/// sb.set_table("posts").and_where("id", "=", 32).limit(1);
/// let sql = sb.update([("title", "renamed")]);
///
/// assert_eq!(sql, "UPDATE posts SET title=:title WHERE id=:id LIMIT 1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    /// Target table; trusted identifier, never validated
    table: String,
    /// Statement text accumulated so far
    text: String,
    /// Named parameters bound so far
    params: ParamMap,
    /// First diagnostic recorded by a permissive operation
    build_error: Option<BuildError>,
}

impl StatementBuilder {
    /// Create a builder with no table selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the target table, resetting all accumulated state.
    pub fn set_table(&mut self, name: impl Into<String>) -> &mut Self {
        self.table = name.into();
        self.text.clear();
        self.params.clear();
        self.build_error = None;
        self
    }

    /// Build `SELECT <cols> FROM <table>` from a pre-joined column string.
    ///
    /// Overwrites the accumulated text entirely.
    pub fn select(&mut self, cols: &str) -> &mut Self {
        self.require_table("SELECT");
        self.text = substitute(
            "SELECT @columns FROM @table",
            &[("@columns", cols), ("@table", self.table.as_str())],
        );
        self
    }

    /// Build `SELECT <cols> FROM <table>` from a column list.
    ///
    /// Columns are joined verbatim with `,`. Overwrites the accumulated
    /// text entirely.
    pub fn select_cols(&mut self, cols: &[&str]) -> &mut Self {
        self.select(&cols.join(","))
    }

    /// Build the INSERT statement from ordered `(column, value)` pairs.
    ///
    /// Every pair is bound under `:column` (merged into the existing
    /// parameter set), and the column and placeholder lists follow the
    /// caller's ordering. The finished text overwrites anything
    /// accumulated so far and is returned. Terminal.
    pub fn insert<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>) -> String
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let columns = self.bind_all(values);
        if columns.is_empty() {
            self.record_error(BuildError::EmptyColumnSet("INSERT".to_string()));
        }
        self.require_table("INSERT");

        let placeholders: Vec<String> = columns.iter().map(|c| format!(":{c}")).collect();
        let column_list = comma_list(&columns);
        let placeholder_list = comma_list(&placeholders);
        self.text = substitute(
            "INSERT INTO @table (@columns) VALUES (@binds)",
            &[
                ("@table", self.table.as_str()),
                ("@columns", &column_list),
                ("@binds", &placeholder_list),
            ],
        );

        self.finish("INSERT")
    }

    /// Build the UPDATE statement and prepend it to the accumulated text.
    ///
    /// Binds like [`insert`](StatementBuilder::insert), but each column
    /// renders as `col=:col` and the assembled `UPDATE <table> SET ...`
    /// clause lands in front of whatever was already accumulated, so
    /// predicates built earlier in the chain keep their place behind the
    /// mutating clause. Returns the whole statement. Terminal.
    pub fn update<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>) -> String
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let columns = self.bind_all(values);
        if columns.is_empty() {
            self.record_error(BuildError::EmptyColumnSet("UPDATE".to_string()));
        }
        self.require_table("UPDATE");

        let assignments: Vec<String> = columns.iter().map(|c| format!("{c}=:{c}")).collect();
        let assignment_list = comma_list(&assignments);
        let clause = substitute(
            "UPDATE @table SET @assignments",
            &[
                ("@table", self.table.as_str()),
                ("@assignments", &assignment_list),
            ],
        );
        self.text = format!("{clause}{}", self.text);

        self.finish("UPDATE")
    }

    /// Build `DELETE FROM <table>` and prepend it to the accumulated text.
    ///
    /// Same composition rule as [`update`](StatementBuilder::update), with
    /// no parameter binding. Returns the whole statement. Terminal.
    pub fn delete(&mut self) -> String {
        self.require_table("DELETE");

        let clause = substitute("DELETE FROM @table", &[("@table", self.table.as_str())]);
        self.text = format!("{clause}{}", self.text);

        self.finish("DELETE")
    }

    /// Append a predicate clause, binding `value` under `:column`.
    ///
    /// The joining keyword comes from the total size of the parameter map
    /// at the moment of the call: `AND` when it already holds two or
    /// more entries, `WHERE` otherwise. Parameters bound by an earlier
    /// `insert`/`update` on the same builder inflate that count, so the
    /// first predicate after them joins with `AND`.
    pub fn and_where<V>(&mut self, column: &str, operator: &str, value: V) -> &mut Self
    where
        V: Into<Value>,
    {
        self.params.bind(column, value.into());
        let keyword = if self.params.len() >= 2 { "AND" } else { "WHERE" };

        let bind = format!(":{column}");
        let clause = substitute(
            " @keyword @column@operator@bind",
            &[
                ("@keyword", keyword),
                ("@column", column),
                ("@operator", operator),
                ("@bind", &bind),
            ],
        );
        self.text.push_str(&clause);
        self
    }

    /// Append ` LIMIT <value>`.
    ///
    /// A negative value renders verbatim and records
    /// [`BuildError::NegativeLimit`].
    pub fn limit(&mut self, value: i64) -> &mut Self {
        if value < 0 {
            self.record_error(BuildError::NegativeLimit(value));
        }

        let rendered = value.to_string();
        let clause = substitute(" LIMIT @value", &[("@value", rendered.as_str())]);
        self.text.push_str(&clause);
        self
    }

    /// Append ` GROUP BY <column>`.
    pub fn group_by(&mut self, column: &str) -> &mut Self {
        let clause = substitute(" GROUP BY @column", &[("@column", column)]);
        self.text.push_str(&clause);
        self
    }

    /// Return the accumulated statement text verbatim.
    ///
    /// Terminal operations return this internally; SELECT chains have no
    /// dedicated terminal, so read the finished text here. Idempotent
    /// between mutating calls.
    pub fn to_sql(&self) -> String {
        self.text.clone()
    }

    /// Borrowed view of the accumulated statement text.
    pub fn sql(&self) -> &str {
        &self.text
    }

    /// The target table name.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The parameters bound so far, in insertion order.
    pub fn parameters(&self) -> &ParamMap {
        &self.params
    }

    /// Report the first diagnostic recorded by a permissive operation.
    ///
    /// Rendering never fails; odd input produces syntactically odd but
    /// non-crashing text. This surfaces what a hardened caller would want
    /// to reject: an empty column set, a missing table, a negative limit.
    pub fn validate(&self) -> BuildResult<()> {
        match &self.build_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn bind_all<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>) -> Vec<String>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut columns = Vec::new();
        for (column, value) in values {
            let column = column.into();
            self.params.bind(&column, value.into());
            columns.push(column);
        }
        columns
    }

    fn require_table(&mut self, statement: &str) {
        if self.table.is_empty() {
            self.record_error(BuildError::NoTableSelected(statement.to_string()));
        }
    }

    fn record_error(&mut self, err: BuildError) {
        if self.build_error.is_none() {
            self.build_error = Some(err);
        }
    }

    fn finish(&mut self, kind: &str) -> String {
        self.trace(kind);
        self.text.clone()
    }

    #[cfg(feature = "tracing")]
    fn trace(&self, kind: &str) {
        tracing::debug!(
            target: "sqlbind.statement",
            kind,
            param_count = self.params.len(),
            sql = %self.text,
        );
    }

    #[cfg(not(feature = "tracing"))]
    fn trace(&self, _kind: &str) {}
}
