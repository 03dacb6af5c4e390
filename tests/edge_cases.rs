//! Edge case and error handling tests for dirmap


use harness::{TestDir, run_dirmap};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_listed_as_file() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "content");
    symlink(dir.path().join("target.txt"), dir.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success, "dirmap should succeed with file symlink");
    assert_eq!(
        dir.read("directory_tree.json"),
        r#"{"link.txt":{},"target.txt":{}}"#
    );
}

#[test]
fn test_symlink_to_directory_not_listed() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.txt", "");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success, "dirmap should succeed with directory symlink");

    let json = dir.read("directory_tree.json");
    assert_eq!(json, r#"{"realdir":{"file.txt":{}}}"#);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success, "dirmap should not hang on parent symlink");
    assert_eq!(dir.read("directory_tree.txt"), "└── subdir\n    └── file.txt\n");
}

#[test]
fn test_broken_symlink_listed_as_file() {
    let dir = TestDir::new();
    dir.add_file("real.txt", "");
    symlink("nonexistent.txt", dir.path().join("broken.txt"))
        .expect("Failed to create broken symlink");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success, "dirmap should handle broken symlinks");
    assert_eq!(
        dir.read("directory_tree.json"),
        r#"{"broken.txt":{},"real.txt":{}}"#
    );
}

// ============================================================================
// Exclusion Edge Cases
// ============================================================================

#[test]
fn test_file_named_git_is_kept() {
    // Worktrees and submodules use a `.git` file, not a directory
    let dir = TestDir::new();
    dir.add_file(".git", "gitdir: /elsewhere");
    dir.add_file("main.c", "");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success);
    assert_eq!(dir.read("directory_tree.txt"), "├── .git\n└── main.c\n");
}

#[test]
fn test_excluded_dir_deep_inside_tree() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/node_modules/x.js", "");
    dir.add_file("a/b/c/d/keep.js", "");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success);
    assert_eq!(
        dir.read("directory_tree.json"),
        r#"{"a":{"b":{"c":{"d":{"keep.js":{}}}}}}"#
    );
}

#[test]
fn test_similar_names_not_excluded() {
    let dir = TestDir::new();
    dir.add_file("venv2/x", "");
    dir.add_file("my_node_modules/y", "");
    dir.add_file(".github/z", "");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success);
    assert_eq!(
        dir.read("directory_tree.json"),
        r#"{".github":{"z":{}},"my_node_modules":{"y":{}},"venv2":{"x":{}}}"#
    );
}

// ============================================================================
// Name Edge Cases
// ============================================================================

#[test]
fn test_unicode_and_special_names() {
    let dir = TestDir::new();
    dir.add_file("日本語.txt", "");
    dir.add_file("with space.md", "");
    dir.add_file("quote\"name", "");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success);

    let text = dir.read("directory_tree.txt");
    assert!(text.contains("├── quote\"name\n"), "{}", text);
    assert!(text.contains("with space.md"));
    assert!(text.ends_with("└── 日本語.txt\n"), "{}", text);

    let value: serde_json::Value =
        serde_json::from_str(&dir.read("directory_tree.json")).expect("valid JSON");
    let map = value.as_object().expect("root is an object");
    assert!(map.contains_key("quote\"name"));
    assert!(map.contains_key("日本語.txt"));
}

#[test]
fn test_empty_subdirectories_render_as_leaves() {
    let dir = TestDir::new();
    dir.add_dir("empty_a");
    dir.add_dir("empty_b");

    let (_stdout, _stderr, success) = run_dirmap(dir.path(), &["--sort"]);
    assert!(success);
    assert_eq!(dir.read("directory_tree.txt"), "├── empty_a\n└── empty_b\n");
    assert_eq!(
        dir.read("directory_tree.json"),
        r#"{"empty_a":{},"empty_b":{}}"#
    );
}

#[test]
fn test_deep_nesting() {
    let dir = TestDir::new();
    let deep: Vec<String> = (0..40).map(|i| format!("d{}", i)).collect();
    dir.add_file(&format!("{}/leaf.txt", deep.join("/")), "");

    let (_stdout, stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success, "dirmap should handle deep trees: {}", stderr);

    let text = dir.read("directory_tree.txt");
    assert_eq!(text.lines().count(), 41);
    assert!(text.lines().last().unwrap().ends_with("└── leaf.txt"));
}

// ============================================================================
// Error Edge Cases
// ============================================================================

#[test]
fn test_root_is_a_file() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "");

    let (stdout, stderr, success) = run_dirmap(dir.path(), &["plain.txt"]);
    assert!(!success, "mapping a file should fail");
    assert!(stdout.is_empty());
    assert!(stderr.contains("not a directory"), "stderr: {}", stderr);
}

#[test]
fn test_unreadable_directory_aborts_run() {
    let dir = TestDir::new();
    dir.add_file("readable/file.txt", "");
    let unreadable = dir.add_dir("unreadable");
    dir.add_file("unreadable/secret.txt", "");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    // Privileged users can still read the directory
    let enforced = fs::read_dir(&unreadable).is_err();
    let out = TestDir::new();
    let (_stdout, stderr, success) = run_dirmap(
        dir.path(),
        &[".", "--out-dir", out.path().to_str().unwrap()],
    );

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    if !enforced {
        return;
    }

    assert!(!success, "unreadable directory should end the run");
    assert!(stderr.contains("cannot read directory"), "stderr: {}", stderr);
    assert!(!out.path().join("directory_tree.txt").exists());
}
