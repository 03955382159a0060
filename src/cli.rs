use anyhow::{Result, bail};

#[derive(Debug, Clone)]
pub struct Config {
    pub pattern: String,
}

// Exactly one positional argument: the pattern. The subject line arrives on
// stdin, so any other argument count is a usage error, never a guess.
pub fn parse_args(args: Vec<String>) -> Result<Config> {
    match args.as_slice() {
        [_program, pattern] => Ok(Config {
            pattern: pattern.clone(),
        }),
        _ => bail!("USAGE: crepe PATTERN"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_pattern_argument_is_accepted() {
        let cfg = parse_args(args(&["crepe", "a+b"])).unwrap();
        assert_eq!(cfg.pattern, "a+b");
    }

    #[test]
    fn empty_pattern_argument_is_still_a_pattern() {
        let cfg = parse_args(args(&["crepe", ""])).unwrap();
        assert_eq!(cfg.pattern, "");
    }

    #[test]
    fn wrong_argument_counts_are_usage_errors() {
        assert!(parse_args(args(&["crepe"])).is_err());
        assert!(parse_args(args(&["crepe", "a", "b"])).is_err());
        assert!(parse_args(args(&[])).is_err());
    }
}
