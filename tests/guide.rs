use std::fs::{self};

use abacus::{display::FormatOptions, replay};
use walkdir::WalkDir;

struct Example {
    script:   String,
    expected: Option<String>,
}

#[test]
fn guide_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_key_blocks(&content).into_iter().enumerate() {
            count += 1;
            let screen = match replay(&example.script, FormatOptions::default()) {
                Ok(screen) => screen,
                Err(e) => panic!("Key example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 example.script,
                                 e),
            };
            if let Some(expected) = example.expected {
                assert_eq!(screen.primary, expected,
                           "Key example {} in {:?} displayed the wrong result:\n{}",
                           i + 1, path, example.script);
            }
        }
    }

    assert!(count > 0, "No key examples found in book/src");
}

/// Collects ```keys blocks. A line starting with `=>` inside a block holds the
/// expected primary display line rather than keys.
fn extract_key_blocks(content: &str) -> Vec<Example> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut script = String::new();
    let mut expected = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```keys") {
            inside = true;
            script.clear();
            expected = None;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(Example { script:   script.clone(),
                                  expected: expected.take(), });
            continue;
        }
        if inside {
            if let Some(result) = trimmed.strip_prefix("=>") {
                expected = Some(result.trim().to_string());
            } else {
                script.push_str(line);
                script.push('\n');
            }
        }
    }

    blocks
}

#[test]
fn example_script_runs() {
    let contents = fs::read_to_string("tests/example.keys").expect("missing file");
    let screen = replay(&contents, FormatOptions::default()).expect("script failed");

    assert_eq!(screen.secondary, "1,250 ÷");
    assert_eq!(screen.primary, "4");
}
