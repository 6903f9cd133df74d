use std::process::ExitCode;

use uri_liveness::config::app_config::load_config;
use uri_liveness::prelude::*;

fn to_fixed_width(input: &str, width: usize) -> String {
    use unicode_truncate::UnicodeTruncateStr;

    let (truncated, _) = input.unicode_truncate(width);
    format!("{:<width$}", truncated, width = width)
}

fn describe(target: &ResolvedTarget<'_>) -> String {
    let mut line = format!(
        "{:<7} {} expect {}",
        target.http_method.as_str(),
        target.uri,
        target.expected_codes
    );
    if target.expected_codes.is_inverted() {
        line.push_str(" (inverted, never matches)");
    }
    match target.headers.len() {
        0 => {}
        1 => line.push_str(", 1 header"),
        count => line.push_str(&format!(", {count} headers")),
    }
    line
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_config = match load_config() {
        Ok(app_config) => app_config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut groups: Vec<_> = app_config.config.iter().collect();
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (name, group) in groups {
        let group_name = to_fixed_width(name, app_config.max_group_width);
        for target in group.resolved_targets() {
            println!("[{group_name}] {}", describe(&target));
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_to_fixed_width() {
        assert_eq!(to_fixed_width("demo", 6), "demo  ");
        assert_eq!(to_fixed_width("organisation", 4), "orga");
    }

    #[test]
    fn test_describe_resolved_target() {
        let mut group = GroupConfig::new();
        group
            .add_target(Url::parse("https://svc/health").expect("Invalid URL"))
            .add_target_with(Url::parse("https://svc/ready").expect("Invalid URL"), |cfg| {
                cfg.use_post()
                    .expect_codes(299, 200)
                    .add_header("X-Probe", "1")
                    .add_header("X-Probe", "2");
            })
            .add_target_with(Url::parse("https://svc/live").expect("Invalid URL"), |cfg| {
                cfg.add_header("Authorization", "Bearer t");
            });

        let lines: Vec<String> = group.resolved_targets().map(|t| describe(&t)).collect();
        assert_eq!(lines[0], "GET     https://svc/health expect 200-299");
        assert_eq!(
            lines[1],
            "POST    https://svc/ready expect 299-200 (inverted, never matches), 2 headers"
        );
        assert_eq!(lines[2], "GET     https://svc/live expect 200-299, 1 header");
    }
}
