//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's non-test sources for antipatterns. Every budget is
//! zero: the parser and layout engine promise never to panic for any
//! input, so nothing in `src/` may unwrap, expect, panic, or silently
//! discard errors. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

/// (pattern, budget) pairs checked against every production source line.
const BUDGETS: &[(&str, usize)] = &[
    // Panics — these crash the process.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0),
    (".ok()", 0),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn source_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|file| {
                let count = file
                    .content
                    .lines()
                    .filter(|line| line.contains(pattern))
                    .count();
                if count > 0 {
                    Some(format!("  {}: {count}", file.path))
                } else {
                    None
                }
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|f| f.content.lines().filter(|l| l.contains(pattern)).count())
            .sum();
        if total > *budget {
            violations.push(format!(
                "`{pattern}` budget exceeded: found {total}, max {budget}\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(violations.is_empty(), "{}", violations.join("\n"));
}
