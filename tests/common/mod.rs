use assert_cmd::Command;

pub fn jotr_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jotr").unwrap();
    cmd.env_remove("JOTR_FILE");
    cmd
}
