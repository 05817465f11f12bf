mod common;

use std::fs;

use predicates::str::contains;

use common::{script_cli, temp_home};

#[test]
fn help_lists_commands() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("delete-all"))
        .stdout(contains("roll"));
}

#[test]
fn version_reports_package_version() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains(format!("Okozukai {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("histroy\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `histroy`"))
        .stdout(contains("Suggestion: `history`?"));
}

#[test]
fn full_day_is_tracked_and_archived() {
    let home = temp_home();
    let script = "\
range 1000 1000
roll
start
add 300 lunch
add 800 \"late taxi\"
status
complete
history
";
    script_cli(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Today's budget: ¥1,000"))
        .stdout(contains("Challenge started with ¥1,000."))
        .stdout(contains("Remaining : -¥100"))
        .stdout(contains("over budget by ¥100"))
        .stdout(contains("1 completed, 0 within budget, 1 over"));

    let archive = fs::read_to_string(home.join("data").join("okozukai-challenges.json"))
        .expect("archive written");
    assert!(archive.contains("\"actualBudget\":1000"));
    assert!(archive.contains("\"late taxi\""));
    assert!(archive.contains("\"completed\":true"));

    let active = fs::read_to_string(home.join("data").join("okozukai-current-challenge.json"))
        .expect("active slot written");
    assert_eq!(active.trim(), "null");
}

#[test]
fn active_challenge_survives_restart() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("range 2000 2000\nroll\nstart\nadd 450 coffee\n")
        .assert()
        .success();

    script_cli(&home)
        .write_stdin("status\nstart\n")
        .assert()
        .success()
        .stdout(contains("coffee"))
        .stdout(contains("Remaining : ¥1,550"))
        .stdout(contains("A challenge is already running"));
}

#[test]
fn expense_commands_need_an_active_challenge() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("add 100 snack\ncomplete\n")
        .assert()
        .success()
        .stdout(contains("No challenge in progress.").count(2));
}

#[test]
fn edit_and_remove_by_position() {
    let home = temp_home();
    let script = "\
range 3000 3000
roll
start
add 500 bento
add 200 tea
edit 1 650 \"bento set\"
remove 2
status
";
    script_cli(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Updated expense: ¥650 for bento set."))
        .stdout(contains("Removed ¥200 for tea."))
        .stdout(contains("Remaining : ¥2,350"));
}

#[test]
fn locked_bound_rejects_range_change() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("range 1500 4000\nlock min\nrange 1000 4000\nbudget\n")
        .assert()
        .success()
        .stdout(contains("minimum is locked at 1500"))
        .stdout(contains("Minimum : ¥1,500 (locked)"));
}

#[test]
fn delete_all_requires_yes_in_script_mode() {
    let home = temp_home();
    let script = "\
range 1000 1000
roll
start
complete
delete-all
history
delete-all --yes
history
";
    script_cli(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("pass --yes"))
        .stdout(contains("Deleted 1 challenges."))
        .stdout(contains("No completed challenges."));

    let archive = fs::read_to_string(home.join("data").join("okozukai-challenges.json"))
        .expect("archive written");
    assert_eq!(archive.trim(), "[]");
}

#[test]
fn config_shows_paths_under_home() {
    let home = temp_home();
    script_cli(&home)
        .write_stdin("config\n")
        .assert()
        .success()
        .stdout(contains("Currency    : JPY"))
        .stdout(contains(home.join("data").display().to_string()));
}

#[test]
fn completing_returns_to_budget_setup() {
    let home = temp_home();
    let output = script_cli(&home)
        .write_stdin("range 1000 1000\nroll\nstart\nadd 200 tea\ncomplete\n")
        .output()
        .expect("run shell");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let completed = stdout
        .find("within budget with ¥800 to spare")
        .expect("completion message");
    let setup = stdout.rfind("Budget setup").expect("budget setup shown");
    assert!(setup > completed);
    assert!(stdout[completed..].contains("not rolled yet"));
}
