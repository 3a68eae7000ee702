mod common;
use common::*;

use pretty_assertions::assert_eq;

fn colon(cmd: &str) -> core_events::ScriptedKeys {
    script(&[Part::Text(":"), Part::Text(cmd), Part::Key(enter())])
}

fn file_workspace(content: &str) -> (tempfile::TempDir, std::path::PathBuf, core_model::Workspace) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    std::fs::write(&path, content).unwrap();
    let mut ws = empty_workspace();
    ws.open_tab(&path).unwrap();
    (dir, path, ws)
}

#[test]
fn write_saves_and_reports_bytes() {
    let (_dir, path, mut ws) = file_workspace("abc\n");
    run(&mut ws, script(&[Part::Text("iX"), Part::Key(esc())]));
    run(&mut ws, colon("w"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Xabc\n");
    assert_eq!(ws.status.text(), "5 bytes written to disk");
    assert!(!ws.active_doc().unwrap().is_dirty());
}

#[test]
fn quit_refuses_when_dirty() {
    let (_dir, _path, mut ws) = file_workspace("abc\n");
    run(&mut ws, script(&[Part::Text("iX"), Part::Key(esc())]));
    let out = run(&mut ws, colon("q"));
    assert!(!out.last.unwrap().quit);
    assert!(ws.status.text().contains(":q!"));
}

#[test]
fn quit_when_clean() {
    let (_dir, _path, mut ws) = file_workspace("abc\n");
    assert!(run(&mut ws, colon("q")).last.unwrap().quit);
}

#[test]
fn force_quit_discards() {
    let (_dir, path, mut ws) = file_workspace("abc\n");
    run(&mut ws, script(&[Part::Text("iX"), Part::Key(esc())]));
    assert!(run(&mut ws, colon("q!")).last.unwrap().quit);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc\n");
}

#[test]
fn write_quit_saves_then_quits() {
    let (_dir, path, mut ws) = file_workspace("abc\n");
    run(&mut ws, script(&[Part::Text("iX"), Part::Key(esc())]));
    assert!(run(&mut ws, colon("wq")).last.unwrap().quit);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Xabc\n");
}

#[test]
fn write_quit_stays_when_save_fails() {
    let mut ws = workspace("abc\n");
    let out = run(&mut ws, colon("wq"));
    assert!(!out.last.unwrap().quit);
    assert!(!ws.status.text().is_empty());
}

#[test]
fn numeric_command_goes_to_line() {
    let mut ws = workspace("a\nb\nc\nd\n");
    run(&mut ws, colon("3"));
    assert_eq!(ws.active_doc().unwrap().cursor(), (0, 2));
    run(&mut ws, colon("99"));
    assert_eq!(ws.active_doc().unwrap().cursor(), (0, 3));
}

#[test]
fn theme_switch_and_unknown() {
    let mut ws = workspace("a\n");
    run(&mut ws, colon("theme nope"));
    assert_eq!(ws.status.text(), "Unknown theme: nope");
    assert_eq!(ws.theme_name(), "default");
    run(&mut ws, colon("theme default"));
    assert_eq!(ws.status.text(), "Theme: default");
    run(&mut ws, colon("theme"));
    assert!(ws.status.text().starts_with("Themes: default"));
}

#[test]
fn unknown_command_reported() {
    let mut ws = workspace("a\n");
    run(&mut ws, colon("frobnicate"));
    assert_eq!(ws.status.text(), "Unknown command: frobnicate");
}

#[test]
fn backup_written_before_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("b.txt");
    std::fs::write(&path, "old\n").unwrap();
    let cfg = core_config::Config::default();
    let mut settings = cfg.settings();
    settings.backup = true;
    let mut ws = core_model::Workspace::new(settings, cfg.themes(), "default".into(), SCREEN);
    ws.open_tab(&path).unwrap();
    run(&mut ws, script(&[Part::Text("dy")]));
    run(&mut ws, colon("w"));
    assert_eq!(std::fs::read_to_string(dir.path().join(".b.txt.swp")).unwrap(), "old\n");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}
