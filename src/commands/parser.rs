//! Free-text command parsing.
//!
//! Input is matched against a static keyword table by case-insensitive
//! prefix. The table is ordered longest keyword first, which makes the
//! tie-break deterministic: `h` can never shadow `hello`, and `show all`
//! wins over any shorter keyword. Whatever follows the keyword is split on
//! whitespace into positional arguments.

/// A recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello` - greeting
    Hello,
    /// `help` / `h` - list known commands
    Help,
    /// `add <name> <phone> [<birthday>]`
    Add,
    /// `change <name> <old_phone> <new_phone>`
    Change,
    /// `delete <name> <phone>`
    DeletePhone,
    /// `phone <name>` - show one contact
    Phone,
    /// `show all` - list every contact
    ShowAll,
    /// `good bye` / `close` / `exit` - terminate
    Exit,
}

/// Keyword table, ordered longest keyword first. Matching walks the table
/// top to bottom and takes the first prefix hit, so the order IS the
/// tie-break rule.
const COMMAND_TABLE: &[(&str, Command)] = &[
    ("good bye", Command::Exit),
    ("show all", Command::ShowAll),
    ("change", Command::Change),
    ("delete", Command::DeletePhone),
    ("hello", Command::Hello),
    ("close", Command::Exit),
    ("phone", Command::Phone),
    ("help", Command::Help),
    ("exit", Command::Exit),
    ("add", Command::Add),
    ("h", Command::Help),
];

/// A parsed input line: the matched command and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Parse one input line.
///
/// Returns `None` when no keyword is a case-insensitive prefix of the
/// (trimmed) input. Otherwise strips the keyword, splits the remainder on
/// whitespace discarding empty tokens, and returns the command with its
/// arguments.
pub fn parse(input: &str) -> Option<ParsedInput> {
    let input = input.trim();

    for (keyword, command) in COMMAND_TABLE {
        if let Some(rest) = strip_keyword(input, keyword) {
            return Some(ParsedInput {
                command: *command,
                args: rest.split_whitespace().map(str::to_string).collect(),
            });
        }
    }

    None
}

/// Case-insensitive prefix strip. Returns the remainder after `keyword`, or
/// `None` if `input` does not start with it.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    // Keywords are ASCII; `get` keeps us safe on non-ASCII input where the
    // byte index is not a char boundary.
    let head = input.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&input[keyword.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_longest_first() {
        let lengths: Vec<_> = COMMAND_TABLE.iter().map(|(kw, _)| kw.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted, "keyword table must be longest-first");
    }

    #[test]
    fn test_parse_add_with_args() {
        let parsed = parse("add Alice (123)456-78-90").unwrap();
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args, vec!["Alice", "(123)456-78-90"]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed = parse("SHOW ALL").unwrap();
        assert_eq!(parsed.command, Command::ShowAll);
        assert!(parsed.args.is_empty());

        let parsed = parse("AdD Bob (111)222-33-44").unwrap();
        assert_eq!(parsed.command, Command::Add);
    }

    #[test]
    fn test_hello_not_shadowed_by_h() {
        let parsed = parse("hello").unwrap();
        assert_eq!(parsed.command, Command::Hello);
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_h_alone_is_help() {
        let parsed = parse("h").unwrap();
        assert_eq!(parsed.command, Command::Help);
    }

    #[test]
    fn test_exit_synonyms() {
        for line in ["good bye", "close", "exit", "Good Bye"] {
            assert_eq!(parse(line).unwrap().command, Command::Exit, "{line}");
        }
    }

    #[test]
    fn test_unknown_input_is_none() {
        assert!(parse("frobnicate").is_none());
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
    }

    #[test]
    fn test_extra_whitespace_between_args() {
        let parsed = parse("change   Bob  (111)222-33-44   (999)888-77-66").unwrap();
        assert_eq!(parsed.command, Command::Change);
        assert_eq!(
            parsed.args,
            vec!["Bob", "(111)222-33-44", "(999)888-77-66"]
        );
    }

    #[test]
    fn test_prefix_semantics_are_preserved() {
        // Keyword matching is prefix-based by contract, so a run-on word
        // still dispatches and the remainder becomes an argument.
        let parsed = parse("addition").unwrap();
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args, vec!["ition"]);
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert!(parse("привіт").is_none());
    }
}
