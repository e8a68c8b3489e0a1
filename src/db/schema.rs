pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Splits a schema file into executable statements. SQLite's driver runs one
/// statement per call, and quoted strings may contain semicolons.
pub fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut prev = '\0';

    for ch in sql.chars() {
        match ch {
            '\'' if !in_double_quote && prev != '\\' => {
                in_single_quote = !in_single_quote;
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
            }
            ';' if !in_single_quote && !in_double_quote => {
                let stmt = current.trim();
                if !stmt.is_empty() {
                    statements.push(stmt.to_string());
                }
                current.clear();
                prev = ch;
                continue;
            }
            _ => {}
        }

        current.push(ch);
        prev = ch;
    }

    let tail = current.trim();
    if !tail.is_empty() {
        statements.push(tail.to_string());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_statement_boundaries() {
        let stmts = split_sql_statements("CREATE TABLE a (x INT);\nCREATE TABLE b (y INT);");
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].starts_with("CREATE TABLE a"));
    }

    #[test]
    fn ignores_semicolons_inside_quotes() {
        let stmts = split_sql_statements("INSERT INTO t VALUES ('a;b');SELECT 1");
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0], "INSERT INTO t VALUES ('a;b')");
    }

    #[test]
    fn schema_has_all_tables() {
        let stmts = split_sql_statements(SCHEMA_SQL);
        for table in [
            "user_stats",
            "user_progress",
            "quiz_results",
            "practice_sessions",
            "achievements",
            "learning_paths",
            "_db_metadata",
        ] {
            assert!(
                stmts.iter().any(|s| s.contains(table)),
                "missing table {table}"
            );
        }
    }
}
