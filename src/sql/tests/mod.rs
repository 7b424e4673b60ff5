//! Test utilities for SQL script generation
//!
//! Includes a small reader for INSERT value tuples so rendered scripts
//! can be compared against the rows they were built from.

use crate::models::SqlValue;


/// Render a script into a string
pub fn render(writer: &crate::sql::SqlWriter, datasets: &crate::models::Datasets) -> String {
    let mut buffer = Vec::new();
    writer.render_script(&mut buffer, datasets).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Read every value tuple of the INSERT statements for one table
///
/// Integers, decimals, `NULL` and quoted strings are recognised; quoted
/// strings are unescaped with the writer's rules.
pub fn insert_rows(script: &str, table: &str) -> Vec<Vec<SqlValue>> {
    let prefix = format!("INSERT INTO {} (", table);
    let mut rows = Vec::new();
    let mut lines = script.lines();

    while let Some(line) = lines.next() {
        if !line.starts_with(&prefix) {
            continue;
        }
        for tuple_line in lines.by_ref() {
            let last = tuple_line.ends_with(';');
            let body = tuple_line.trim_end_matches([',', ';']);
            rows.push(parse_tuple(body));
            if last {
                break;
            }
        }
    }
    rows
}

/// Count INSERT statements for one table
pub fn insert_count(script: &str, table: &str) -> usize {
    let prefix = format!("INSERT INTO {} (", table);
    script.lines().filter(|l| l.starts_with(&prefix)).count()
}

fn parse_tuple(body: &str) -> Vec<SqlValue> {
    let inner = body
        .strip_prefix('(')
        .and_then(|b| b.strip_suffix(')'))
        .unwrap();
    let mut values = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.peek() == Some(&' ') {
            chars.next();
        }
        match chars.peek() {
            None => break,
            Some('\'') => {
                chars.next();
                let mut text = String::new();
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => text.push(chars.next().unwrap()),
                        '\'' => break,
                        other => text.push(other),
                    }
                }
                values.push(SqlValue::Text(text));
            }
            Some(_) => {
                let mut raw = String::new();
                while let Some(&c) = chars.peek() {
                    if c == ',' {
                        break;
                    }
                    raw.push(c);
                    chars.next();
                }
                values.push(parse_bare(raw.trim()));
            }
        }
        // separator
        while let Some(&c) = chars.peek() {
            chars.next();
            if c == ',' {
                break;
            }
        }
    }
    values
}

fn parse_bare(raw: &str) -> SqlValue {
    if raw == "NULL" {
        SqlValue::Null
    } else if raw.contains('.') {
        SqlValue::Float(raw.parse().unwrap())
    } else {
        SqlValue::Int(raw.parse().unwrap())
    }
}
