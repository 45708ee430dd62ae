use memfs::config::ShellConfig;
use memfs::error::CommandError;
use memfs::shell::Shell;

fn shell() -> Shell {
    Shell::new(&ShellConfig::default())
}

#[test]
fn session_builds_a_tree_and_reports_paths() {
    let mut sh = shell();
    assert_eq!(sh.execute("pwd").unwrap(), Some("/".to_string()));
    assert_eq!(sh.execute("mkdir -p math/homework").unwrap(), None);
    sh.execute("cd math/homework").unwrap();
    assert_eq!(sh.execute("pwd").unwrap(), Some("/math/homework".to_string()));
    sh.execute("cd ..").unwrap();
    assert_eq!(sh.execute("pwd").unwrap(), Some("/math".to_string()));
    assert_eq!(sh.execute("ls").unwrap(), Some("homework".to_string()));
}

#[test]
fn write_and_read_quoted_content_with_spaces() {
    let mut sh = shell();
    sh.execute("mkfile notes").unwrap();
    sh.execute("write notes \"hello there world\"").unwrap();
    assert_eq!(
        sh.execute("read notes").unwrap(),
        Some("hello there world".to_string())
    );
}

#[test]
fn mkfile_renames_instead_of_failing() {
    let mut sh = shell();
    sh.execute("mkfile report").unwrap();
    sh.execute("mkfile report").unwrap();
    assert_eq!(sh.execute("ls").unwrap(), Some("report report(1)".to_string()));
}

#[test]
fn move_and_find_compose_across_commands() {
    let mut sh = shell();
    sh.execute("mkdir -p math/homework").unwrap();
    sh.execute("mkfile math/homework/assignment1").unwrap();
    sh.execute("mkfile math/homework/assignment2").unwrap();
    sh.execute("mkdir -p biology/homework").unwrap();
    sh.execute("mkfile biology/homework/assignment1").unwrap();

    assert_eq!(
        sh.execute("find homework").unwrap(),
        Some("/math/homework /biology/homework".to_string())
    );

    sh.execute("mv /biology/homework /math").unwrap();
    assert_eq!(
        sh.execute("ls /math/homework").unwrap(),
        Some("assignment1 assignment2 assignment1(1)".to_string())
    );
    assert_eq!(sh.execute("ls /biology").unwrap(), Some("".to_string()));
}

#[test]
fn unknown_command_is_a_parse_error() {
    let mut sh = shell();
    let err = sh.execute("copy a b").unwrap_err();
    assert!(matches!(err, CommandError::Parse(_)));
}

#[test]
fn missing_argument_is_a_parse_error() {
    let mut sh = shell();
    assert!(matches!(
        sh.execute("cd").unwrap_err(),
        CommandError::Parse(_)
    ));
    assert!(matches!(
        sh.execute("mv lonely").unwrap_err(),
        CommandError::Parse(_)
    ));
    assert!(matches!(
        sh.execute("write notes").unwrap_err(),
        CommandError::Parse(_)
    ));
}

#[test]
fn failed_command_leaves_the_session_usable() {
    let mut sh = shell();
    let err = sh.execute("cd missing").unwrap_err();
    assert_eq!(err.to_string(), "directory does not exist: missing");

    sh.execute("mkdir docs").unwrap();
    sh.execute("cd docs").unwrap();
    assert_eq!(sh.execute("pwd").unwrap(), Some("/docs".to_string()));
}

#[test]
fn script_mode_continues_after_errors_and_stops_at_exit() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("session.txt");
    std::fs::write(
        &path,
        "mkdir a\ncd nowhere\nmkdir a/b\n\nexit\nmkdir after_exit\n",
    )
    .unwrap();

    let mut sh = shell();
    sh.run_script(&path).unwrap();

    assert_eq!(sh.execute("ls a").unwrap(), Some("b".to_string()));
    assert!(matches!(
        sh.execute("ls after_exit").unwrap_err(),
        CommandError::Fs(_)
    ));
}
