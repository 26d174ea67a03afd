//! Console rendering for the CLI.

use crate::domain::{Configuration, DependencyResult, SourceMode};

const RULE_WIDTH: usize = 50;

pub(super) fn print_config(config: &Configuration) {
    print!("{}", render_config(config));
}

pub(super) fn print_dependencies(config: &Configuration, result: &DependencyResult) {
    print!("{}", render_dependencies(config, result));
}

fn render_config(config: &Configuration) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!("{rule}\nConfiguration:\n{rule}\n");
    for (key, value) in config.entries() {
        out.push_str(&format!("{:25}: {}\n", key, value));
    }
    out.push_str(&format!("{rule}\n"));
    out
}

fn render_dependencies(config: &Configuration, result: &DependencyResult) -> String {
    let mode = match config.source() {
        SourceMode::Registry { url } => format!("registry ({})", url),
        SourceMode::LocalFile { path } => format!("test (local file {})", path.display()),
    };
    let mut out = format!("Mode: {}\n", mode);

    if result.is_empty() {
        out.push_str(&format!("Package '{}' has no direct dependencies.\n", result.package()));
        return out;
    }

    out.push_str(&format!(
        "Direct dependencies of '{}' ({}):\n",
        result.package(),
        result.provenance()
    ));
    for name in result.dependencies() {
        out.push_str(&format!("  - {}\n", name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Provenance;
    use crate::domain::configuration::parse_config_content;

    fn config() -> Configuration {
        parse_config_content(
            "<config><package_name>mypkg</package_name><test_mode>TRUE</test_mode>\
             <test_repository_path>repo.txt</test_repository_path>\
             <output_filename>graph.png</output_filename></config>",
        )
        .unwrap()
    }

    #[test]
    fn config_dump_pads_keys() {
        let rendered = render_config(&config());
        assert!(rendered.contains(&format!("{:25}: mypkg", "package_name")));
        assert!(rendered.contains(&format!("{:25}: true", "test_mode")));
    }

    #[test]
    fn dependency_list_shows_each_entry() {
        let result = DependencyResult::new(
            "mypkg",
            vec!["a".into(), "b".into(), "a".into()],
            Provenance::LocalFile,
        );
        let rendered = render_dependencies(&config(), &result);

        assert!(rendered.contains("Mode: test (local file repo.txt)"));
        assert_eq!(rendered.matches("  - a\n").count(), 2);
    }

    #[test]
    fn empty_result_is_called_out() {
        let result = DependencyResult::new("mypkg", vec![], Provenance::LocalFile);
        assert!(render_dependencies(&config(), &result).contains("no direct dependencies"));
    }
}
