use std::fs;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn word_freq<P: AsRef<OsStr>>(args: &[P], flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_word-freq"))
        .args(args)
        .args(flags)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_min_occur_filters_low_counts() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "text.txt", "The cat sat. The cat ran!\n");

    let output = word_freq(&[&text], &["--min_occur", "2"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\"The,cat\" word(s) has occured 2 times in the text\n"
    );
}

#[test]
fn test_blacklist_file() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "text.txt", "The cat sat. The cat ran!\n");
    let blacklist = create_test_file(&dir, "blacklist.txt", "cat,sat");
    let blacklist = blacklist.to_str().unwrap();

    let output = word_freq(&[&text], &["--blacklist_file", blacklist]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\"The\" word(s) has occured 2 times in the text\n\
         \"ran\" word(s) has occured 1 times in the text\n"
    );
}

#[test]
fn test_blacklist_one_word_per_line() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "text.txt", "The cat sat. The cat ran!\n");
    let blacklist = create_test_file(&dir, "blacklist.txt", "cat\nsat\n");
    let blacklist = blacklist.to_str().unwrap();

    let output = word_freq(&[&text], &["--blacklist_file", blacklist]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\"The\" word(s) has occured 2 times in the text\n\
         \"ran\" word(s) has occured 1 times in the text\n"
    );
}

#[test]
fn test_negative_min_occur_reports_everything() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "text.txt", "one two two\n");

    let output = word_freq(&[&text], &["--min_occur", "-1"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\"two\" word(s) has occured 2 times in the text\n\
         \"one\" word(s) has occured 1 times in the text\n"
    );
}

#[test]
fn test_output_tokens_are_letters_and_apostrophes() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(
        &dir,
        "text.txt",
        "We'll see -- it's 42 o'clock, isn't_it? ' '' \"quoted\" x1y2z\n",
    );

    let output = word_freq(&[&text], &[]);
    assert!(output.status.success());

    for line in stdout_of(&output).lines() {
        let words = line.split('"').nth(1).unwrap();
        for word in words.split(',') {
            assert!(!word.is_empty());
            assert_ne!(word, "'");
            assert!(word.chars().all(|c| c.is_ascii_alphabetic() || c == '\''));
        }
    }
}

#[test]
fn test_missing_text_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = word_freq(&[&missing], &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("doesn't exist"));
}

#[test]
fn test_missing_blacklist_fails() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "text.txt", "words words words\n");
    let missing = dir.path().join("missing.txt");

    let output = word_freq(&[&text], &["--blacklist_file", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_directory_is_rejected() {
    let dir = TempDir::new().unwrap();

    let output = word_freq(&[dir.path()], &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a regular file"));
}

#[test]
fn test_empty_file_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "empty.txt", "");

    let output = word_freq(&[&text], &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_threads_and_sort() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "text.txt", "pear apple fig apple fig pear banana\n");

    let output = word_freq(&[&text], &["--sort", "--threads", "2"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\"apple,fig,pear\" word(s) has occured 2 times in the text\n\
         \"banana\" word(s) has occured 1 times in the text\n"
    );
}

#[test]
fn test_stats_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    let text = create_test_file(&dir, "text.txt", "one two two\n");

    let output = word_freq(&[&text], &["--stats"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "\"two\" word(s) has occured 2 times in the text\n\
         \"one\" word(s) has occured 1 times in the text\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Distinct words"));
}
