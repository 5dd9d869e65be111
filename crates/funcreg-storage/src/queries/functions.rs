//! Queries for the `functions` table.

use funcreg_core::errors::StorageError;
use funcreg_core::function::validate::validate_status;
use funcreg_core::{Function, Page};
use rusqlite::{ffi, params, Connection, ErrorCode, OptionalExtension, Row};

/// Upper bound on a single page.
pub const MAX_PAGE_SIZE: usize = 500;

const SELECT_FUNCTIONS: &str = "SELECT name, spec, framework, description, \"type\",
        help_message, animated_gif, min_pos_points, min_neg_points,
        startswith_box, status
    FROM functions";

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Map a failed write on `name` to the most specific error.
fn write_err(e: rusqlite::Error, name: &str) -> StorageError {
    if let rusqlite::Error::SqliteFailure(ref failure, ref msg) = e {
        if failure.code == ErrorCode::ConstraintViolation {
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY {
                return StorageError::AlreadyExists {
                    name: name.to_string(),
                };
            }
            return StorageError::ConstraintViolation {
                message: msg.clone().unwrap_or_else(|| e.to_string()),
            };
        }
    }
    sqlite_err(e)
}

fn row_to_function(row: &Row<'_>) -> rusqlite::Result<Function> {
    Ok(Function {
        name: row.get(0)?,
        spec: row.get(1)?,
        framework: row.get(2)?,
        description: row.get(3)?,
        kind: row.get(4)?,
        help_message: row.get(5)?,
        animated_gif: row.get(6)?,
        min_pos_points: row.get(7)?,
        min_neg_points: row.get(8)?,
        startswith_box: row.get(9)?,
        status: row.get(10)?,
    })
}

fn query_functions<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Function>, StorageError> {
    let mut stmt = conn.prepare_cached(sql).map_err(sqlite_err)?;
    let rows = stmt.query_map(params, row_to_function).map_err(sqlite_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

/// Insert a new function. Fails with `AlreadyExists` if the name is taken.
pub fn insert_function(conn: &Connection, function: &Function) -> Result<(), StorageError> {
    function.validate()?;
    conn.execute(
        "INSERT INTO functions (
            name, spec, framework, description, \"type\", help_message,
            animated_gif, min_pos_points, min_neg_points, startswith_box, status
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            function.name,
            function.spec,
            function.framework,
            function.description,
            function.kind,
            function.help_message,
            function.animated_gif,
            function.min_pos_points,
            function.min_neg_points,
            function.startswith_box,
            function.status,
        ],
    )
    .map_err(|e| write_err(e, &function.name))?;
    Ok(())
}

/// Insert many functions in one transaction: all or nothing.
pub fn insert_bulk(conn: &Connection, functions: &[Function]) -> Result<usize, StorageError> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| StorageError::SqliteError {
            message: format!("insert_bulk begin: {e}"),
        })?;

    for function in functions {
        // Dropping `tx` on error rolls back.
        insert_function(&tx, function)?;
    }

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("insert_bulk commit: {e}"),
    })?;
    Ok(functions.len())
}

/// Get a single function by name.
pub fn get_function(conn: &Connection, name: &str) -> Result<Option<Function>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_FUNCTIONS} WHERE name = ?1"))
        .map_err(sqlite_err)?;
    stmt.query_row(params![name], row_to_function)
        .optional()
        .map_err(sqlite_err)
}

/// Whether a function with this name is registered.
pub fn exists(conn: &Connection, name: &str) -> Result<bool, StorageError> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM functions WHERE name = ?1)",
        params![name],
        |row| row.get(0),
    )
    .map_err(sqlite_err)
}

/// Replace every non-key column of an existing function.
pub fn update_function(conn: &Connection, function: &Function) -> Result<(), StorageError> {
    function.validate()?;
    let rows = conn
        .execute(
            "UPDATE functions SET
                spec = ?2, framework = ?3, description = ?4, \"type\" = ?5,
                help_message = ?6, animated_gif = ?7, min_pos_points = ?8,
                min_neg_points = ?9, startswith_box = ?10, status = ?11
             WHERE name = ?1",
            params![
                function.name,
                function.spec,
                function.framework,
                function.description,
                function.kind,
                function.help_message,
                function.animated_gif,
                function.min_pos_points,
                function.min_neg_points,
                function.startswith_box,
                function.status,
            ],
        )
        .map_err(|e| write_err(e, &function.name))?;

    if rows == 0 {
        return Err(StorageError::NotFound {
            name: function.name.clone(),
        });
    }
    Ok(())
}

/// Change only the status of an existing function.
pub fn update_status(conn: &Connection, name: &str, status: &str) -> Result<(), StorageError> {
    validate_status(status)?;
    let rows = conn
        .execute(
            "UPDATE functions SET status = ?2 WHERE name = ?1",
            params![name, status],
        )
        .map_err(|e| write_err(e, name))?;

    if rows == 0 {
        return Err(StorageError::NotFound {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Insert the function, or refresh every column if it is already registered.
/// Returns true when a new row was created.
pub fn upsert_function(conn: &Connection, function: &Function) -> Result<bool, StorageError> {
    function.validate()?;
    let existed = exists(conn, &function.name)?;
    conn.execute(
        "INSERT INTO functions (
            name, spec, framework, description, \"type\", help_message,
            animated_gif, min_pos_points, min_neg_points, startswith_box, status
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        ON CONFLICT(name) DO UPDATE SET
            spec = excluded.spec,
            framework = excluded.framework,
            description = excluded.description,
            \"type\" = excluded.\"type\",
            help_message = excluded.help_message,
            animated_gif = excluded.animated_gif,
            min_pos_points = excluded.min_pos_points,
            min_neg_points = excluded.min_neg_points,
            startswith_box = excluded.startswith_box,
            status = excluded.status",
        params![
            function.name,
            function.spec,
            function.framework,
            function.description,
            function.kind,
            function.help_message,
            function.animated_gif,
            function.min_pos_points,
            function.min_neg_points,
            function.startswith_box,
            function.status,
        ],
    )
    .map_err(|e| write_err(e, &function.name))?;
    Ok(!existed)
}

/// Delete a function. Returns whether a row was removed.
pub fn delete_function(conn: &Connection, name: &str) -> Result<bool, StorageError> {
    let rows = conn
        .execute("DELETE FROM functions WHERE name = ?1", params![name])
        .map_err(sqlite_err)?;
    Ok(rows > 0)
}

/// All functions, ascending by name.
pub fn list_functions(conn: &Connection) -> Result<Vec<Function>, StorageError> {
    query_functions(conn, &format!("{SELECT_FUNCTIONS} ORDER BY name ASC"), [])
}

/// Functions of the given category, ascending by name.
pub fn list_by_kind(conn: &Connection, kind: &str) -> Result<Vec<Function>, StorageError> {
    query_functions(
        conn,
        &format!("{SELECT_FUNCTIONS} WHERE \"type\" = ?1 ORDER BY name ASC"),
        params![kind],
    )
}

/// Functions with the given status, ascending by name.
pub fn list_by_status(conn: &Connection, status: &str) -> Result<Vec<Function>, StorageError> {
    query_functions(
        conn,
        &format!("{SELECT_FUNCTIONS} WHERE status = ?1 ORDER BY name ASC"),
        params![status],
    )
}

/// Keyset page of functions with names strictly after `after`.
/// `limit` is clamped to 1..=`MAX_PAGE_SIZE`.
pub fn list_page(
    conn: &Connection,
    after: Option<&str>,
    limit: usize,
) -> Result<Page<Function>, StorageError> {
    let limit = limit.clamp(1, MAX_PAGE_SIZE);
    // Fetch one extra row to learn whether another page follows.
    let mut items = query_functions(
        conn,
        &format!("{SELECT_FUNCTIONS} WHERE ?1 IS NULL OR name > ?1 ORDER BY name ASC LIMIT ?2"),
        params![after, (limit + 1) as i64],
    )?;

    let has_more = items.len() > limit;
    items.truncate(limit);
    let next_cursor = if has_more {
        items.last().map(|f| f.name.clone())
    } else {
        None
    };

    Ok(Page {
        items,
        total: count(conn)?,
        has_more,
        next_cursor,
    })
}

/// Count registered functions.
pub fn count(conn: &Connection) -> Result<u64, StorageError> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM functions", [], |row| row.get(0))
        .map_err(sqlite_err)?;
    Ok(n as u64)
}
