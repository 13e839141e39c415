//! Player command parsing
//!
//! Commands are line-oriented, case-sensitive and exact-match. The command
//! surface is closed: there is no help or quit command, only `attack`.

/// A recognized player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `attack <target>` - the hero attacks the named monster
    Attack(String),
}

impl Command {
    /// Parse one completed input line.
    ///
    /// Returns `None` for empty or unrecognized lines; callers ignore those
    /// silently. Whether the target names a known monster is decided by the
    /// battle's registry, not here.
    pub fn parse(line: &str) -> Option<Command> {
        let target = line.strip_prefix("attack ")?;
        if target.is_empty() {
            return None;
        }
        Some(Command::Attack(target.to_string()))
    }
}
