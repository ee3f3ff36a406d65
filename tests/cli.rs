use assert_cmd::Command;

fn run(args: &[&str]) -> String {
    let assert = Command::cargo_bin("predstruct")
        .unwrap()
        .args(args)
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn prints_selected_structure() {
    let out = run(&["-l", "5", "-p", "2", "-r", "4"]);
    assert!(out.starts_with("Random Access period 32 extent 32 leading 31 init 1 steady 32"));
}

#[test]
fn verbose_prints_every_entry() {
    let out = run(&["-l", "2", "-p", "1", "-r", "2", "-v"]);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("Low Delay B period 4"));
    assert!(lines[1..].iter().all(|l| l.contains(" L0 ")));
}

#[test]
fn all_lists_every_structure() {
    let out = run(&["--all"]);
    assert_eq!(out.lines().count(), 6 * 3 * 4);
}

#[test]
fn rejects_out_of_range_reference_count() {
    Command::cargo_bin("predstruct")
        .unwrap()
        .args(&["-r", "5"])
        .assert()
        .failure();
}

#[test]
fn rejects_pred_structure_past_u8() {
    for pred in ["3", "258"].iter() {
        Command::cargo_bin("predstruct")
            .unwrap()
            .args(&["-p", *pred])
            .assert()
            .failure();
    }
}
