//! End-to-end generation from a manifest on disk.

use bindgen::{check, config::Config, generate, write};
use std::{fs, path::PathBuf};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn artifacts() -> PathBuf {
    workspace_root().join("crates/binding/artifacts")
}

const MANIFEST: &str = r#"
out_dir = "src/contracts"
artifacts_dir = "artifacts"
include_dir = "../../artifacts"

[[contracts]]
name = "StorageSetter"
abi = "StorageSetter.abi.json"
bin = "StorageSetter.bin"

[[contracts]]
name = "L2ToL2CrossDomainMessenger"
abi = "L2ToL2CrossDomainMessenger.abi.json"
"#;

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("artifacts")).unwrap();
    for file in [
        "StorageSetter.abi.json",
        "StorageSetter.bin",
        "L2ToL2CrossDomainMessenger.abi.json",
    ] {
        fs::copy(artifacts().join(file), dir.path().join("artifacts").join(file)).unwrap();
    }
    fs::write(dir.path().join("bindgen.toml"), MANIFEST).unwrap();
    dir
}

#[test]
fn test_generate_and_check() {
    let dir = project();
    let config = Config::from_file(dir.path().join("bindgen.toml")).unwrap();
    let out_dir = dir.path().join("src/contracts");

    let files = generate(&config).unwrap();
    let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        [
            out_dir.join("storage_setter.rs"),
            out_dir.join("l2_to_l2_cross_domain_messenger.rs"),
            out_dir.join("mod.rs"),
        ]
    );

    assert_eq!(check(&files).unwrap().len(), 3);
    write(&files).unwrap();
    assert!(check(&files).unwrap().is_empty());

    let setter = &files[0].contents;
    assert!(setter.contains("        function setBytes32(Slot[] memory slots) external;\n"));
    assert!(setter.contains("    pub fn set_bytes32_0(\n"));
    assert!(setter.contains("    pub fn set_bytes32_1(\n"));
    assert!(setter.contains("include_str!(\"../../artifacts/StorageSetter.bin\")"));

    let messenger = &files[1].contents;
    assert!(messenger.contains("event SentMessage(uint256 destination, address target, bytes message, bytes data) anonymous;"));
    assert!(messenger.contains(
        "    pub fn initial_balance(\n        &self,\n    ) -> bind::CallBuilder<'_, IL2ToL2CrossDomainMessenger::INITIAL_BALANCECall> {\n"
    ));
    assert!(messenger.contains("            .view(IL2ToL2CrossDomainMessenger::successfulMessagesCall(arg0))\n"));
    assert!(files.iter().all(|f| f.contents.lines().all(|line| line.len() <= 100)));
    assert!(messenger.contains("    \"\",\n"));
    assert!(!messenger.contains("pub async fn deploy"));

    fs::write(&files[0].path, "// edited\n").unwrap();
    assert_eq!(check(&files).unwrap(), [files[0].path.clone()]);
}

#[test]
fn test_invalid_artifacts_are_reported() {
    let dir = project();
    fs::write(dir.path().join("artifacts/StorageSetter.bin"), "0xnothex").unwrap();
    let config = Config::from_file(dir.path().join("bindgen.toml")).unwrap();

    let err = generate(&config).unwrap_err();
    assert!(format!("{err:#}").contains("StorageSetter.bin"));

    fs::write(dir.path().join("artifacts/StorageSetter.bin"), "0x6080").unwrap();
    fs::write(
        dir.path().join("artifacts/StorageSetter.abi.json"),
        r#"[{"type":"function","name":"f","inputs":[{"name":"x","type":"tuple","components":[]}],"outputs":[],"stateMutability":"view"}]"#,
    )
    .unwrap();
    assert!(generate(&config).is_err());
}

#[test]
fn test_committed_bindings_are_current() {
    let config = Config::from_file(workspace_root().join("bindgen.toml")).unwrap();
    let files = generate(&config).unwrap();

    let stale = check(&files).unwrap();
    assert!(stale.is_empty(), "stale bindings, rerun bindgen: {stale:?}");
}
