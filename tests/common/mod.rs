use assert_cmd::Command;

pub fn wixdom_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wixdom").unwrap();
    cmd.env_remove("WIXDOM_SETTINGS");
    cmd.env_remove("RUST_LOG");
    cmd
}
