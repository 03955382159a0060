use std::io::{self, BufRead};

use anyhow::{Context, Result, ensure};

use crate::cli::Config;
use crate::regex;

// Longest accepted subject line; anything longer is rejected outright.
const MAX_LINE_LEN: usize = 1024;

pub fn run(cfg: Config) -> Result<bool> {
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read subject line from stdin")?;
    ensure!(read > 0, "missing subject line on stdin");
    match_line(&line, &cfg.pattern)
}

// Decides one subject line against one pattern. The trailing newline belongs
// to the reader, so it is dropped before the engine sees the line.
fn match_line(line: &str, pattern: &str) -> Result<bool> {
    let subject = line.strip_suffix('\n').unwrap_or(line);
    ensure!(
        subject.len() <= MAX_LINE_LEN,
        "line too long: got {}, max = {}",
        subject.len(),
        MAX_LINE_LEN
    );
    regex::matches(subject, pattern).with_context(|| format!("cannot compile pattern {pattern:?}"))
}
