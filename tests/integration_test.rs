use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("konko_markup_{}_{}", nanos, name))
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_konko-markup"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--page-path"));
}

#[test]
fn test_cli_renders_file_with_page_path() {
    let input = temp_path("post.md");
    std::fs::write(&input, "**hi** [up](#top)").expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_konko-markup"))
        .arg(&input)
        .args(["--page-path", "/t/3"])
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&input);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "<strong>hi</strong> <a href=\"/t/3#top\" target=\"_self\">up</a>\n"
    );
}

#[test]
fn test_cli_writes_output_file_from_config() {
    let input = temp_path("code.md");
    let config = temp_path("konko.toml");
    let out = temp_path("code.html");
    std::fs::write(&input, "```rust\nx\n```").expect("write input");
    std::fs::write(&config, "code_block_class = \"src\"\n").expect("write config");

    let status = Command::new(env!("CARGO_BIN_EXE_konko-markup"))
        .arg(&input)
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .status()
        .expect("Failed to execute command");
    let written = std::fs::read_to_string(&out);
    for path in [&input, &config, &out] {
        let _ = std::fs::remove_file(path);
    }

    assert!(status.success());
    assert_eq!(
        written.expect("output file written"),
        "<pre class=\"src\"><code lang=\"rust\">x</code></pre>"
    );
}

#[test]
fn test_cli_to_markup() {
    let input = temp_path("post.html");
    std::fs::write(&input, "<b>a</b><br>&lt;b&gt;").expect("write input");

    let output = Command::new(env!("CARGO_BIN_EXE_konko-markup"))
        .arg(&input)
        .arg("--to-markup")
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&input);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "**a**\n<b>\n");
}

#[test]
fn test_cli_rejects_bad_config() {
    let input = temp_path("bad.md");
    let config = temp_path("bad.toml");
    std::fs::write(&input, "x").expect("write input");
    std::fs::write(&config, "slug_max_words = \"many\"").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_konko-markup"))
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&config);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
}

#[test]
fn test_cli_missing_input_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_konko-markup"))
        .arg(temp_path("missing.md"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error"));
}
