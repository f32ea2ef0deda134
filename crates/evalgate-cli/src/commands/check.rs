use evalgate_core::{EvalConfig, GateVerdict, ReportIndex, run_gate};
use evalgate_git::GitClient;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Gate config location, relative to the repository root.
const CONFIG_PATH: &str = "skills-evals/eval.config.json";
/// Report index location, relative to the repository root.
const INDEX_PATH: &str = "skills-evals/reports/index.json";

/// One-shot gate run. Inapplicable environments (missing tools, no
/// repository, no config, nothing required) skip with exit 0; stale or
/// malformed reports exit 1 after every failure has been reported.
pub fn run(repo_root: String, require_tool: Vec<String>) {
    if !GitClient::is_available() {
        warn("git is not installed; skipping eval gating.");
        return;
    }
    for tool in &require_tool {
        if !tool_available(tool) {
            warn(&format!("required tool '{tool}' is not installed; skipping eval gating."));
            return;
        }
    }

    let Ok(client) = GitClient::discover(&repo_root) else {
        warn("not in a git repository; skipping eval gating.");
        return;
    };

    let config_path = client.repo_root().join(CONFIG_PATH);
    if !config_path.exists() {
        warn("config not found; skipping eval gating.");
        return;
    }
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            warn(&format!("failed to read config: {err}"));
            std::process::exit(1);
        }
    };
    let required = config.required_models();
    if required.is_empty() {
        return;
    }

    let index_path = client.repo_root().join(INDEX_PATH);
    if !index_path.exists() {
        warn(&format!("report index missing at {}", index_path.display()));
        std::process::exit(1);
    }
    let index = match load_index(&index_path) {
        Ok(index) => index,
        Err(err) => {
            warn(&format!("failed to read report index: {err}"));
            std::process::exit(1);
        }
    };
    if index.is_empty() {
        warn("report index is empty.");
        std::process::exit(1);
    }

    match run_gate(required, &index, &client) {
        GateVerdict::Passed => {}
        GateVerdict::SkippedNoWatchedHistory => {
            warn("no commits found for skills/instructions; skipping eval gating.");
        }
        GateVerdict::Failed(failures) => {
            warn("eval reports are out of date:");
            for failure in &failures {
                eprintln!("  - {failure}");
            }
            std::process::exit(1);
        }
    }
}

// Diagnostics go to stderr; stdout stays empty.
fn warn(message: &str) {
    eprintln!("evalgate: {message}");
}

fn tool_available(name: &str) -> bool {
    Command::new(name)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn load_config(path: &Path) -> Result<EvalConfig, String> {
    let text = fs::read_to_string(path).map_err(|err| format!("{}: {err}", path.display()))?;
    serde_json::from_str::<EvalConfig>(&text).map_err(|err| format!("{}: {err}", path.display()))
}

fn load_index(path: &Path) -> Result<ReportIndex, String> {
    let text = fs::read_to_string(path).map_err(|err| format!("{}: {err}", path.display()))?;
    serde_json::from_str::<ReportIndex>(&text).map_err(|err| format!("{}: {err}", path.display()))
}
