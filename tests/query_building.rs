//! Integration tests for query building against generated descriptors
//!
//! Everything renders through `PostgresQueryBuilder`; assertions check the
//! qualified identifiers in the output so aliasing bugs show up as SQL
//! diffs rather than runtime surprises.

use moorings::tests_cfg::book::Book;
use moorings::tests_cfg::keys;
use moorings::{RelationDef, TableDescriptor};
use sea_query::{Asterisk, ExprTrait, JoinType, PostgresQueryBuilder, Query};

#[test]
fn test_typed_predicates_render_qualified() {
    let book = Book::new();
    let sql = Query::select()
        .column(Asterisk)
        .from(book.table_ref())
        .and_where(book.title().like("%SQL%"))
        .and_where(book.published_in().gt(Some(2000)))
        .and_where(book.co_author_id().is_not_null())
        .to_string(PostgresQueryBuilder);

    assert!(sql.contains("\"PUBLIC\".\"BOOK\""), "sql: {sql}");
    assert!(sql.contains("\"BOOK\".\"TITLE\" LIKE '%SQL%'"), "sql: {sql}");
    assert!(sql.contains("\"BOOK\".\"PUBLISHED_IN\" > 2000"), "sql: {sql}");
    assert!(
        sql.contains("\"BOOK\".\"CO_AUTHOR_ID\" IS NOT NULL"),
        "sql: {sql}"
    );
}

#[test]
fn test_aliased_instance_renders_alias() {
    let book = Book::aliased("b");
    let sql = Query::select()
        .expr(book.id().expr())
        .from(book.table_ref())
        .to_string(PostgresQueryBuilder);

    assert!(sql.contains("\"PUBLIC\".\"BOOK\" AS \"b\""), "sql: {sql}");
    assert!(sql.contains("\"b\".\"ID\""), "sql: {sql}");
}

#[test]
fn test_renamed_instance_renders_new_name() {
    let archive = Book::new().rename("BOOK_ARCHIVE");
    let sql = Query::select()
        .column(Asterisk)
        .from(archive.table_ref())
        .to_string(PostgresQueryBuilder);

    assert!(
        sql.contains("FROM \"PUBLIC\".\"BOOK_ARCHIVE\""),
        "sql: {sql}"
    );
}

#[test]
fn test_join_to_author_through_foreign_key() {
    let book = Book::new();
    let author = book.fk_t_book_author_id();
    let rel = RelationDef::belongs_to(
        book.as_table(),
        author.as_table(),
        &keys::FK_T_BOOK_AUTHOR_ID,
    );

    let sql = Query::select()
        .expr(book.title().expr())
        .expr(author.last_name().expr())
        .from(book.table_ref())
        .join(JoinType::InnerJoin, author.table_ref(), rel.condition())
        .to_string(PostgresQueryBuilder);

    assert!(
        sql.contains("\"PUBLIC\".\"AUTHOR\" AS \"BOOK__fk_t_book_author_id\""),
        "sql: {sql}"
    );
    assert!(
        sql.contains("\"BOOK\".\"AUTHOR_ID\" = \"BOOK__fk_t_book_author_id\".\"ID\""),
        "sql: {sql}"
    );
}

#[test]
fn test_double_join_to_author_and_co_author() {
    let book = Book::new();
    let author = book.fk_t_book_author_id();
    let co_author = book.fk_t_book_co_author_id();

    let sql = Query::select()
        .expr(book.title().expr())
        .expr(author.last_name().expr())
        .expr(co_author.last_name().expr())
        .from(book.table_ref())
        .join(
            JoinType::InnerJoin,
            author.table_ref(),
            keys::FK_T_BOOK_AUTHOR_ID.join_condition(book.qualifier(), author.qualifier()),
        )
        .join(
            JoinType::LeftJoin,
            co_author.table_ref(),
            keys::FK_T_BOOK_CO_AUTHOR_ID.join_condition(book.qualifier(), co_author.qualifier()),
        )
        .to_string(PostgresQueryBuilder);

    // The same parent table appears twice under two distinct qualifiers.
    assert!(
        sql.contains("AS \"BOOK__fk_t_book_author_id\""),
        "sql: {sql}"
    );
    assert!(
        sql.contains("AS \"BOOK__fk_t_book_co_author_id\""),
        "sql: {sql}"
    );
    assert!(
        sql.contains("\"BOOK\".\"CO_AUTHOR_ID\" = \"BOOK__fk_t_book_co_author_id\".\"ID\""),
        "sql: {sql}"
    );
}

#[test]
fn test_self_join_with_two_aliases() {
    let b1 = Book::aliased("b1");
    let b2 = Book::aliased("b2");

    let sql = Query::select()
        .expr(b1.id().expr())
        .from(b1.table_ref())
        .join(
            JoinType::InnerJoin,
            b2.table_ref(),
            b1.author_id().eq_column(&b2.author_id()),
        )
        .and_where(b1.id().ne(0).and(b2.id().gt(0)))
        .to_string(PostgresQueryBuilder);

    assert!(sql.contains("AS \"b1\""), "sql: {sql}");
    assert!(sql.contains("AS \"b2\""), "sql: {sql}");
    assert!(
        sql.contains("\"b1\".\"AUTHOR_ID\" = \"b2\".\"AUTHOR_ID\""),
        "sql: {sql}"
    );
}

#[test]
fn test_create_table_statement_for_book() {
    let sql = Book::new()
        .as_table()
        .meta()
        .create_table_statement()
        .to_string(PostgresQueryBuilder);

    assert!(sql.contains("CREATE TABLE \"PUBLIC\".\"BOOK\""), "sql: {sql}");
    assert!(sql.contains("\"TITLE\" varchar(400) NOT NULL"), "sql: {sql}");
    assert!(sql.contains("\"CO_AUTHOR_ID\" integer NULL"), "sql: {sql}");
    assert!(sql.contains("PRIMARY KEY"), "sql: {sql}");
}
