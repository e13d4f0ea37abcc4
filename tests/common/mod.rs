#[cfg(test)]
mod fixture;
pub use fixture::Fixture;

#[cfg(test)]
mod hopla_runner;
pub use hopla_runner::HoplaRunnerBuilder;

/// Drop comments and blank lines: only `key=value` entries are compared.
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(composer::COMMENT_PREFIX))
        .map(|line| format!("{line}\n"))
        .collect()
}

#[macro_export]
macro_rules! validate_config {
    ($ref_file:expr, $obtained_file:expr) => {
        let want = common::Fixture::expected($ref_file);
        let got  = std::fs::read_to_string($obtained_file)
            .unwrap_or_else(|_| panic!("Failed to open {:?}", $obtained_file));
        assert_eq!(common::strip_comments(&want), common::strip_comments(&got))
    };
}
