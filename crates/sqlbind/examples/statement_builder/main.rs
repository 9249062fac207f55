//! Example demonstrating sqlbind's statement builder.
//!
//! Run with:
//!   cargo run --example statement_builder -p sqlbind
//!
//! The finished artifacts are the statement text and its named-parameter
//! set; binding and execution belong to a database driver, not to this
//! crate.

use sqlbind::{StatementBuilder, Value};

fn print_statement(label: &str, sql: &str, sb: &StatementBuilder) {
    println!("{label}:");
    println!("  {sql}");
    for (name, value) in sb.parameters() {
        println!("    {name} = {value}");
    }
    println!();
}

fn main() {
    let mut sb = StatementBuilder::new();

    // SELECT chains have no dedicated terminal; read the text when done.
    sb.set_table("posts")
        .select_cols(&["id", "title"])
        .and_where("author_id", "=", 7)
        .group_by("author_id")
        .limit(10);
    let sql = sb.to_sql();
    print_statement("select", &sql, &sb);

    // INSERT overwrites the accumulated text: it never carries predicates.
    sb.set_table("posts");
    let sql = sb.insert([
        ("title", Value::from("hello world")),
        ("author_id", Value::from(7)),
        ("published", Value::from(false)),
    ]);
    print_statement("insert", &sql, &sb);

    // UPDATE and DELETE prepend: build the predicates first, call the
    // terminal operation last.
    sb.set_table("posts");
    sb.and_where("id", "=", 32).limit(1);
    let sql = sb.update([("title", Value::from("renamed"))]);
    print_statement("update", &sql, &sb);

    sb.set_table("sessions");
    sb.and_where("expired", "=", true);
    let sql = sb.delete();
    print_statement("delete", &sql, &sb);

    // Permissive rendering with an opt-in check.
    sb.set_table("logs");
    sb.limit(-1);
    match sb.validate() {
        Ok(()) => println!("statement is clean"),
        Err(err) => println!("diagnostic: {err}"),
    }
}
