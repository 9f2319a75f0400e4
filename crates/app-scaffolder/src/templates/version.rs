//! Version comparison for CLI and template compatibility

use semver::Version;

/// Warn when the running CLI is older than the template expects.
///
/// Versions may carry a leading `v`. Anything unparsable yields no warning.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli = parse_version(cli_version)?;
    let template = parse_version(template_version)?;

    (cli < template).then(|| {
        format!(
            "This template was designed for create-app {} or newer (running {}).\n\
             Consider updating: {}",
            template, cli, upgrade_command
        )
    })
}

fn parse_version(version: &str) -> Option<Version> {
    let cleaned = version.trim().strip_prefix('v').unwrap_or(version.trim());
    Version::parse(cleaned).ok()
}
