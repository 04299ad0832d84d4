use std::process::Command;

fn render(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_render-regions"))
        .args(args)
        .output()
        .expect("run render-regions")
}

#[test]
fn empty_board_goes_to_stdout() {
    let output = render(&["--height", "2", "--width", "3", "--turn", "0", "--turn", "4"]);
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let svg = String::from_utf8_lossy(&output.stdout);
    assert!(svg.contains(r#"viewBox="0 0 72 48""#));
    assert!(svg.contains("<polygon"));
}

#[test]
fn snapshot_regions_are_written_to_the_output_file() {
    let temp = tempfile::tempdir().unwrap();
    let snapshot = temp.path().join("snapshot.json");
    let output = temp.path().join("board.svg");
    std::fs::write(
        &snapshot,
        r#"{
            "height": 6,
            "width": 6,
            "regions": [{ "id": 3, "owner": 1, "boundary": [[1, 1], [1, 4], [4, 4], [4, 1]] }]
        }"#,
    )
    .unwrap();

    let result = render(&[
        "--snapshot",
        snapshot.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    assert!(
        result.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert!(result.stdout.is_empty());

    let svg = std::fs::read_to_string(output).unwrap();
    assert!(svg.contains(r#"id="region-3""#));
    assert!(svg.contains("url(#player-2-pattern)"));
    assert_eq!(svg.matches("<path").count(), 2);
}

#[test]
fn rejected_turns_are_logged_but_still_drawn() {
    let output = render(&["--height", "2", "--width", "2", "-t", "1", "-t", "1"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already taken"));
}

#[test]
fn bad_config_fails() {
    let temp = tempfile::tempdir().unwrap();
    let config = temp.path().join("config.json");
    std::fs::write(&config, r#"{ "corner_radius": -1 }"#).unwrap();
    let output = render(&["--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn played_positions_can_be_saved() {
    let temp = tempfile::tempdir().unwrap();
    let saved = temp.path().join("saved.json");
    let output = render(&[
        "--height",
        "2",
        "--width",
        "2",
        "-t",
        "0",
        "-t",
        "3",
        "--save",
        saved.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let snapshot = std::fs::read_to_string(&saved).unwrap();
    let replay = render(&["--snapshot", saved.to_str().unwrap(), "-t", "0"]);
    assert!(snapshot.contains(r#""height": 2"#));
    // the loaded board still has cell 0 taken
    assert!(String::from_utf8_lossy(&replay.stderr).contains("already taken"));
}

#[test]
fn oversized_snapshots_fail_cleanly() {
    let temp = tempfile::tempdir().unwrap();
    let snapshot = temp.path().join("huge.json");
    std::fs::write(
        &snapshot,
        r#"{ "height": 4294967296, "width": 4294967296, "scores": [] }"#,
    )
    .unwrap();
    let output = render(&["--snapshot", snapshot.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("over the limit"));
}
