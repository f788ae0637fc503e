/// Splits a whole command line into arguments at runs of whitespace.
///
/// Whitespace between a pair of double quotes doesn't split, so `--name="Absolom, Absolom"` stays
/// one argument. The quotes themselves are kept in the argument; no shell-style unquoting or
/// escaping is done.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut args = vec![];
    let mut current = String::new();
    let mut quoted = false;

    for c in line.chars() {
        if !quoted && c.is_whitespace() {
            if !current.is_empty() {
                args.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c == '"' {
            quoted = !quoted;
        }
        current.push(c);
    }

    if !current.is_empty() {
        args.push(current);
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line() {
        assert!(split_command_line("").is_empty());
        assert!(split_command_line(" \t\n ").is_empty());
    }

    #[test]
    fn splits_on_runs_of_whitespace() {
        assert_eq!(
            split_command_line("  aardvark b\t\tCaveman "),
            ["aardvark", "b", "Caveman"]
        );
    }

    #[test]
    fn quotes_group_and_are_kept() {
        assert_eq!(
            split_command_line("-a --name=\"Absolom, Absolom\" -h=8"),
            ["-a", "--name=\"Absolom, Absolom\"", "-h=8"]
        );
    }

    #[test]
    fn unterminated_quote_runs_to_the_end() {
        assert_eq!(split_command_line("x \"a b c"), ["x", "\"a b c"]);
    }
}
