use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn city_file(content: &str) -> NamedTempFile
{
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn ring_sir() -> Command
{
    assert_cmd::cargo::cargo_bin_cmd!("ring_sir")
}

fn stdout_of(cmd: &mut Command) -> String
{
    let output = cmd.assert().success().get_output().clone();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn no_vax_prints_final_city_and_days()
{
    let file = city_file("S 0\nI 0\nS 0\n");
    let stdout = stdout_of(ring_sir().arg(file.path()));
    assert_eq!(
        stdout,
        "Running simulation ...\nFinal city: [(I, 0), (I, 1), (I, 0)]\nDays simulated: 1\n"
    );
}

#[test]
fn days_contagious_changes_the_outcome()
{
    let file = city_file("I 0\nS 0\nS 0\nS 0\nS 0\n");
    let stdout = stdout_of(ring_sir().arg(file.path()).args(["--days-contagious", "1"]));
    // the first infected recovers before passing it on further than its neighbors
    assert!(stdout.contains("Final city: [(R, 1), (R, 0), (I, 0), (I, 0), (R, 0)]"), "{stdout}");
    assert!(stdout.contains("Days simulated: 2"), "{stdout}");
}

#[test]
fn single_vax_run_with_eager_city()
{
    let file = city_file("S 0 1.0\nI 0 0.0\nS 0 1.0\nS 2 0.0\n");
    let stdout = stdout_of(
        ring_sir().arg(file.path()).args(["--task-type", "vax", "--random-seed", "20170217"])
    );
    assert!(stdout.starts_with("Running one vax clinic and simulation ...\n"));
    assert!(stdout.contains("Final city: [(V, 0), (I, 0), (V, 0), (S, 2)]"), "{stdout}");
    assert!(stdout.contains("Days simulated: 0"));
}

#[test]
fn multiple_trials_print_only_the_median()
{
    let file = city_file("I 0 0.0\nS 0 0.0\nS 0 0.0\nS 0 0.0\nS 0 0.0\n");
    let stdout = stdout_of(
        ring_sir().arg(file.path()).args(["--task-type", "vax", "--num-trials", "5", "--random-seed", "1"])
    );
    assert_eq!(
        stdout,
        "Running multiple trials of the vax clinic and simulation ...\n\
        Median number of days until infection transmission stops: 2\n"
    );
}

#[test]
fn seeded_trials_are_reproducible()
{
    let mut content = String::new();
    for i in 0..60{
        if i % 15 == 0 {
            content.push_str("I 0 0.0\n");
        } else {
            content.push_str("S 0 0.4\n");
        }
    }
    let file = city_file(&content);
    let run = || stdout_of(
        ring_sir().arg(file.path()).args([
            "--task-type", "vax", "--num-trials", "11", "--random-seed", "42", "--num-threads", "3"
        ])
    );
    assert_eq!(run(), run());
}

#[test]
fn malformed_line_fails_the_load()
{
    let file = city_file("S 0\nI x\nS 0\n");
    let assert = ring_sir().arg(file.path()).assert().failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error in line 1"), "{stderr}");
}

#[test]
fn vax_file_needs_eagerness()
{
    let file = city_file("S 0\nI 0\n");
    let assert = ring_sir().arg(file.path()).args(["--task-type", "vax"]).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Error in line 0"), "{stderr}");
    assert!(stderr.contains("floating point value between 0 and 1.0"), "{stderr}");
}

#[test]
fn missing_file_fails_with_io_error()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let assert = ring_sir().arg(&path).assert().failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not open"), "{stderr}");
}

#[test]
fn invalid_task_type_is_a_usage_error()
{
    let file = city_file("S 0\n");
    ring_sir().arg(file.path()).args(["--task-type", "sometimes"]).assert().failure();
}

#[test]
fn print_params_shows_layered_configuration()
{
    let json = city_file(r#"{"days_contagious": 6, "num_trials": 3}"#);
    let stdout = stdout_of(
        ring_sir()
            .arg("unused.txt")
            .args(["--json"])
            .arg(json.path())
            .args(["--num-trials", "7", "--print-params"])
    );
    let params: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(params["days_contagious"], 6);
    assert_eq!(params["num_trials"], 7);
    assert_eq!(params["task_type"], "no_vax");
    assert!(params["random_seed"].is_null());
}

#[test]
fn out_file_gets_the_final_city()
{
    let file = city_file("S 0\nI 0\nS 0\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("result.dat");
    ring_sir().arg(file.path()).arg("--out").arg(&out).assert().success();
    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert!(lines[0].starts_with("#{"));
    assert_eq!(lines[1], "#days_simulated 1");
    assert_eq!(&lines[3..], &["0 I 0", "1 I 1", "2 I 0"]);
}

#[test]
fn unwritable_out_file_reports_a_write_error()
{
    let file = city_file("S 0\nI 0\nS 0\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no_such_dir").join("result.dat");
    let assert = ring_sir().arg(file.path()).arg("--out").arg(&out).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("could not write"), "{stderr}");
    assert!(!stderr.contains("could not open"), "{stderr}");
}
