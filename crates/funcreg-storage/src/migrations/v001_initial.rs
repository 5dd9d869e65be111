//! V001: the `functions` table.

pub const MIGRATION_SQL: &str = r#"
-- Registered serverless functions, keyed by name.
-- Length limits are in characters. length() on TEXT counts characters but
-- stops at the first NUL, so every text column also refuses NUL outright.
CREATE TABLE IF NOT EXISTS functions (
    name            TEXT PRIMARY KEY NOT NULL
                    CHECK (length(name) BETWEEN 1 AND 100 AND instr(name, char(0)) = 0),
    spec            TEXT NOT NULL
                    CHECK (length(spec) <= 5000 AND instr(spec, char(0)) = 0),
    framework       TEXT NOT NULL
                    CHECK (length(framework) <= 100 AND instr(framework, char(0)) = 0),
    description     TEXT NOT NULL
                    CHECK (length(description) <= 100 AND instr(description, char(0)) = 0),
    "type"          TEXT NOT NULL
                    CHECK (length("type") <= 100 AND instr("type", char(0)) = 0),
    help_message    TEXT NOT NULL
                    CHECK (length(help_message) <= 100 AND instr(help_message, char(0)) = 0),
    animated_gif    TEXT NOT NULL
                    CHECK (length(animated_gif) <= 100 AND instr(animated_gif, char(0)) = 0),
    min_pos_points  INTEGER NOT NULL DEFAULT 1,
    min_neg_points  INTEGER NOT NULL DEFAULT -1,
    startswith_box  INTEGER NOT NULL DEFAULT 0 CHECK (startswith_box IN (0, 1)),
    status          TEXT NOT NULL
                    CHECK (length(status) <= 100 AND instr(status, char(0)) = 0)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_functions_type ON functions("type", name);
CREATE INDEX IF NOT EXISTS idx_functions_status ON functions(status, name);

-- The primary key is immutable once the row exists.
CREATE TRIGGER IF NOT EXISTS trg_functions_name_immutable
BEFORE UPDATE OF name ON functions
WHEN NEW.name IS NOT OLD.name
BEGIN
    SELECT RAISE(ABORT, 'function name is immutable');
END;
"#;
