//! Tests for interactive mode, driven by fake chooser, clipboard and
//! notifier programs.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_copy_identifier_leaves_store_unchanged() {
    let t = Test::with_records(&[ALICE, BOB]);

    let output = t.pick_cmd(&[(menu_line(BOB).as_str(), 11)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.clipboard().as_deref(), Some("bob"));
    assert_eq!(t.notifications(), vec!["-t 1500 -- bob copied to clipboard"]);
    assert_eq!(t.read_store(), ALICE_BOB_FILE);
}

#[test]
fn test_confirm_copies_secret() {
    let t = Test::with_records(&[ALICE, BOB]);

    let output = t.pick_cmd(&[(menu_line(ALICE).as_str(), 0)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.clipboard().as_deref(), Some("p1"));
    assert_eq!(
        t.notifications(),
        vec!["-t 1500 -- secret for alice copied to clipboard"]
    );
}

#[test]
fn test_custom_one_copies_secret() {
    let t = Test::with_records(&[ALICE, BOB]);

    let output = t.pick_cmd(&[(menu_line(BOB).as_str(), 10)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.clipboard().as_deref(), Some("p2"));
}

#[test]
fn test_reveal_secret_in_notification() {
    let t = Test::with_records(&[ALICE]);
    t.write_config("[notify]\nreveal_secret = true\ntimeout_ms = 900\n");

    let output = t.pick_cmd(&[(menu_line(ALICE).as_str(), 0)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.notifications(), vec!["-t 900 -- p1 copied to clipboard"]);
}

#[test]
fn test_delete_rewrites_store_and_reopens_menu() {
    let t = Test::with_records(&[ALICE, BOB]);

    let output = t.pick_cmd(&[(menu_line(ALICE).as_str(), 12)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.read_store(), "bob\np2\nweb\n");
    assert_eq!(t.chooser_calls(), 2);
    assert_eq!(t.chooser_shown(1), vec![menu_line(ALICE), menu_line(BOB)]);
    assert_eq!(t.chooser_shown(2), vec![menu_line(BOB)]);
    assert!(t.clipboard().is_none());
}

#[test]
fn test_delete_then_copy() {
    let t = Test::with_records(&[ALICE, BOB]);

    let output = t
        .pick_cmd(&[(menu_line(BOB).as_str(), 12), (menu_line(ALICE).as_str(), 11)])
        .output()
        .unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.read_store(), "alice\np1\nssh\n");
    assert_eq!(t.clipboard().as_deref(), Some("alice"));
}

#[test]
fn test_delete_last_record_stops() {
    let t = Test::with_records(&[ALICE]);

    let output = t.pick_cmd(&[(menu_line(ALICE).as_str(), 12)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.read_store(), "");
    assert_eq!(t.chooser_calls(), 1);
    assert_stdout_excludes(&output, "no credentials stored");
}

#[test]
fn test_cancel_does_nothing() {
    let t = Test::with_records(&[ALICE, BOB]);

    let output = t.pick_cmd(&[("", 1)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert!(t.clipboard().is_none());
    assert!(t.notifications().is_empty());
    assert_eq!(t.read_store(), ALICE_BOB_FILE);
}

#[test]
fn test_unexpected_status_is_error() {
    let t = Test::with_records(&[ALICE, BOB]);

    let output = t.pick_cmd(&[(menu_line(ALICE).as_str(), 5)]).output().unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "unexpected exit status: 5");
    assert_eq!(t.read_store(), ALICE_BOB_FILE);
    assert!(t.clipboard().is_none());
}

#[test]
fn test_status_one_with_line_is_error() {
    let t = Test::with_records(&[ALICE]);

    let output = t.pick_cmd(&[(menu_line(ALICE).as_str(), 1)]).output().unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "unexpected exit status: 1");
}

#[test]
fn test_unmatched_line_does_nothing() {
    let t = Test::with_records(&[ALICE]);

    let output = t.pick_cmd(&[("typed by hand", 0)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert!(t.clipboard().is_none());
    assert_eq!(t.read_store(), "alice\np1\nssh\n");
}

#[test]
fn test_menu_is_sorted_case_insensitively() {
    let t = Test::with_records(&[("carol", "p3", ""), ("Bob", "p2", ""), ("alice", "p1", "")]);

    let output = t.pick_cmd(&[("", 1)]).output().unwrap();

    assert_exit_code(&output, 0);
    let shown = t.chooser_shown(1);
    assert_eq!(shown.len(), 3);
    assert!(shown[0].starts_with("alice"));
    assert!(shown[1].starts_with("Bob"));
    assert!(shown[2].starts_with("carol"));
}

#[test]
fn test_chooser_gets_key_bindings() {
    let t = Test::with_records(&[ALICE]);

    assert_success(&t.pick_cmd(&[("", 1)]).output().unwrap());

    assert_eq!(
        t.chooser_args(1),
        vec![
            "-dmenu",
            "-p",
            "cred",
            "-kb-custom-1",
            "Ctrl+c",
            "-kb-custom-2",
            "Ctrl+C",
            "-kb-custom-3",
            "Ctrl+D"
        ]
    );
}

#[test]
fn test_configured_width_changes_layout() {
    let t = Test::with_records(&[ALICE]);
    t.write_config("[selector]\nwidth = 8\n");

    let line = "alice   p1      ssh";
    let output = t.pick_cmd(&[(line, 11)]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_eq!(t.chooser_shown(1), vec![line]);
    assert_eq!(t.clipboard().as_deref(), Some("alice"));
}

#[test]
fn test_empty_store_skips_chooser() {
    let t = Test::new();

    let output = t.pick_cmd(&[]).output().unwrap();

    assert_exit_code(&output, 0);
    assert_stdout_contains(&output, "no credentials stored");
    assert_eq!(t.chooser_calls(), 0);
    assert_eq!(t.read_store(), "");
}

#[test]
fn test_missing_chooser_fails_before_menu() {
    let t = Test::with_records(&[ALICE]);

    let output = t
        .pick_cmd(&[])
        .env("CREDMENU_CHOOSER", "credmenu-no-such-chooser")
        .output()
        .unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "cannot find chooser 'credmenu-no-such-chooser'");
    assert_stdout_contains(&output, "CREDMENU_CHOOSER");
}

#[test]
fn test_missing_notifier_fails_before_menu() {
    let t = Test::with_records(&[ALICE]);

    let output = t
        .pick_cmd(&[(menu_line(ALICE).as_str(), 0)])
        .env("CREDMENU_NOTIFIER", "credmenu-no-such-notifier")
        .output()
        .unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "cannot find notifier");
    assert_eq!(t.chooser_calls(), 0);
    assert!(t.clipboard().is_none());
}

#[test]
fn test_missing_clipboard_fails_before_menu() {
    let t = Test::with_records(&[ALICE]);

    let output = t
        .pick_cmd(&[(menu_line(ALICE).as_str(), 0)])
        .env("CREDMENU_CLIPBOARD", "credmenu-no-such-clipboard")
        .output()
        .unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "cannot find clipboard tool");
    assert_eq!(t.chooser_calls(), 0);
}

#[test]
fn test_malformed_store_fails_before_menu() {
    let t = Test::new();
    std::fs::write(t.store_path(), "alice\np1\nssh\nbob\n").unwrap();

    let output = t.pick_cmd(&[("", 1)]).output().unwrap();

    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "malformed store");
    assert_eq!(t.chooser_calls(), 0);
}
