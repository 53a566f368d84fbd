/// Parse a plain newline-delimited host list: trim, drop empties.
pub fn parse_host_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
