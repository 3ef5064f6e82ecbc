use super::*;
use sqlmock::values;

const TABLE: &str = "some_table";
const COLUMNS: &[&str] = &["id", "value"];

fn db_error() -> Option<MockError> {
    Some(MockError::injected("db error"))
}

#[test]
fn test_select() {
    let mock = Sqlmock::new();

    select(&mock, TABLE, COLUMNS, db_error(), &[]);
    let err = mock.query("SELECT * FROM some_table").unwrap_err();
    assert!(err.is_injected());

    select(&mock, TABLE, COLUMNS, None, &[]);
    let rows = mock.query("SELECT * FROM some_table").unwrap();
    assert!(rows.is_empty());

    select(&mock, TABLE, COLUMNS, None, &[values![1, 2]]);
    let rows = mock.query("SELECT * FROM some_table").unwrap();
    assert_eq!(rows.len(), 1);
    for row in rows.iter() {
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
        assert_eq!(row.get::<i64>(1).unwrap(), 2);
    }

    assert!(mock.expectations_were_met().is_ok());
}

#[test]
fn test_select_one_row_per_tuple() {
    let mock = Sqlmock::new();
    select(
        &mock,
        TABLE,
        COLUMNS,
        None,
        &[values![1, 10], values![2, 20], values![3, 30]],
    );

    let rows = mock.query("SELECT id, value FROM some_table").unwrap();
    assert_eq!(rows.columns(), COLUMNS);
    let scanned: Vec<(i64, i64)> = rows.scan().unwrap();
    assert_eq!(scanned, vec![(1, 10), (2, 20), (3, 30)]);
}

#[test]
fn test_select_error_configures_no_rows() {
    let mock = Sqlmock::new();
    select(&mock, TABLE, COLUMNS, db_error(), &[values![1, 2]]);

    assert!(mock.query("SELECT * FROM some_table").is_err());
    assert!(mock.expectations_were_met().is_ok());
}

#[test]
#[should_panic]
fn test_select_tuple_width_mismatch() {
    let mock = Sqlmock::new();
    select(&mock, TABLE, COLUMNS, None, &[values![1]]);
}

#[test]
fn test_update() {
    let mock = Sqlmock::new();

    update(&mock, TABLE, None, 1);
    let res = mock
        .exec("UPDATE some_table SET value = 2 WHERE id = 1")
        .unwrap();
    assert_eq!(res.rows_affected(), 1);

    update(&mock, TABLE, db_error(), 0);
    assert!(
        mock.exec("UPDATE some_table SET value = 2 WHERE id = 1")
            .is_err()
    );
}

#[test]
fn test_insert() {
    let mock = Sqlmock::new();

    insert(&mock, TABLE, None, 1);
    let res = mock
        .exec("INSERT INTO some_table(id, value) VALUES (1, 2)")
        .unwrap();
    assert_eq!(res.last_insert_id(), 1);

    insert(&mock, TABLE, db_error(), 0);
    assert!(
        mock.exec("INSERT INTO some_table(id, value) VALUES (1, 2)")
            .is_err()
    );
}

#[test]
fn test_insert_last_insert_id() {
    let mock = Sqlmock::new();
    insert(&mock, "users", None, 42);

    let res = mock
        .exec("INSERT INTO users(name) VALUES ('alice')")
        .unwrap();
    assert_eq!(res.last_insert_id(), 42);
    assert_eq!(res.rows_affected(), 0);
}

#[test]
fn test_replace() {
    let mock = Sqlmock::new();

    replace(&mock, TABLE, None, 1);
    let res = mock
        .exec("REPLACE INTO some_table(id, value) VALUES (1, 2)")
        .unwrap();
    assert_eq!(res.last_insert_id(), 1);

    replace(&mock, TABLE, db_error(), 0);
    assert!(
        mock.exec("REPLACE INTO some_table(id, value) VALUES (1, 2)")
            .is_err()
    );
}

#[test]
fn test_delete() {
    let mock = Sqlmock::new();

    delete(&mock, TABLE, None, 1);
    let res = mock.exec("DELETE FROM some_table WHERE id = 1").unwrap();
    assert_eq!(res.rows_affected(), 1);
    assert_eq!(res.last_insert_id(), 0);

    delete(&mock, TABLE, db_error(), 0);
    assert!(mock.exec("DELETE FROM some_table WHERE id = 1").is_err());
}

#[test]
fn test_count() {
    let mock = Sqlmock::new();

    count(&mock, TABLE, None, 1);
    let rows = mock.query("SELECT COUNT(*) FROM some_table").unwrap();
    assert_eq!(rows.columns(), [COUNT_COLUMN]);
    let count_value: i32 = rows.first().unwrap().get(0).unwrap();
    assert_eq!(count_value, 1);

    count(&mock, TABLE, db_error(), 0);
    assert!(mock.query("SELECT * FROM some_table").is_err());
}

#[test]
fn test_mutations_return_injected_error() {
    let cases: [(fn(&Sqlmock, &str, Option<MockError>, i64), &str); 4] = [
        (update, "UPDATE some_table SET value = 1"),
        (insert, "INSERT INTO some_table (id) VALUES (1)"),
        (replace, "REPLACE INTO some_table (id) VALUES (1)"),
        (delete, "DELETE FROM some_table WHERE id = 1"),
    ];

    for (expect_fn, sql) in cases {
        let mock = Sqlmock::new();
        expect_fn(&mock, TABLE, db_error(), 5);
        let err = mock.exec(sql).unwrap_err();
        assert_eq!(err.to_string(), "db error", "{sql}");
        assert!(mock.expectations_were_met().is_ok());
    }
}

#[test]
fn test_one_expectation_per_call() {
    let mock = Sqlmock::new();
    select(&mock, TABLE, COLUMNS, None, &[values![1, 2], values![3, 4]]);
    count(&mock, TABLE, None, 2);
    update(&mock, TABLE, None, 1);
    insert(&mock, TABLE, db_error(), 0);
    assert_eq!(mock.pending(), 4);
}

#[test]
fn test_statement_kind_mismatch_is_rejected() {
    let mock = Sqlmock::new();
    insert(&mock, TABLE, None, 1);

    // An INSERT expectation does not answer a REPLACE.
    let err = mock
        .exec("REPLACE INTO some_table (id) VALUES (1)")
        .unwrap_err();
    assert!(err.is_unexpected());
}

#[test]
fn test_table_name_with_double_space() {
    let mock = Sqlmock::new();
    insert(&mock, "my  table", None, 1);

    let res = mock
        .exec("INSERT INTO my  table (id) VALUES (1)")
        .unwrap();
    assert_eq!(res.last_insert_id(), 1);
}

#[test]
fn test_table_name_is_a_loose_match() {
    let mock = Sqlmock::new();

    // "." is a regex wildcard and the pattern is not anchored.
    select(&mock, "public.users", COLUMNS, None, &[values![1, 2]]);
    let rows = mock.query("SELECT * FROM publicXusers").unwrap();
    assert_eq!(rows.len(), 1);

    update(&mock, "users", None, 4);
    let res = mock
        .exec("UPDATE users_archive SET value = 1 WHERE id = 1")
        .unwrap();
    assert_eq!(res.rows_affected(), 4);

    delete(&mock, "users", None, 1);
    let res = mock.exec("DELETE FROM users_old").unwrap();
    assert_eq!(res.rows_affected(), 1);

    assert!(mock.expectations_were_met().is_ok());
}
