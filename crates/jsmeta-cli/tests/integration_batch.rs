//! End-to-end tests for `jsmeta batch`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn jsmeta(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jsmeta").unwrap();
    cmd.current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("JSMETA_FORMAT")
        .env_remove("JSMETA_EXTENSIONS")
        .env_remove("JSMETA_OUTPUT_SUFFIX")
        .env_remove("JSMETA_FAIL_FAST")
        .env_remove("JSMETA_ALLOW_PARSE_ERRORS");
    cmd
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn lwc_tree(root: &Path) {
    write(
        root,
        "lwc/propertyTile/propertyTile.js",
        "import { LightningElement } from 'lwc';\nexport default class PropertyTile extends LightningElement {}\n",
    );
    write(
        root,
        "lwc/utils/format.js",
        "export function formatCurrency(value, { currency }) {}\n",
    );
    write(root, "lwc/propertyTile/propertyTile.html", "<template></template>\n");
}

#[test]
fn analyzes_every_matching_file() {
    let temp = TempDir::new().unwrap();
    lwc_tree(&temp.path().join("force-app"));

    jsmeta(temp.path())
        .args(["batch", "force-app", "--out-dir", "meta"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Total files:").and(predicate::str::contains("Failed:")));

    let tile = temp.path().join("meta/lwc/propertyTile/propertyTile_ast.xml");
    let format = temp.path().join("meta/lwc/utils/format_ast.xml");
    assert!(tile.exists());
    assert!(format.exists());
    assert!(!temp.path().join("meta/lwc/propertyTile/propertyTile_ast.html").exists());

    let xml = fs::read_to_string(format).unwrap();
    assert!(xml.contains(r#"<Parameter name="ObjectPattern" />"#));
}

#[test]
fn failing_file_makes_the_run_fail_but_others_are_written() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    lwc_tree(&src);
    write(&src, "lwc/broken/broken.js", "export default class {}\n");

    jsmeta(temp.path())
        .args(["batch", "src", "--out-dir", "meta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.js").and(predicate::str::contains("1 of 3 files failed")));

    assert!(temp.path().join("meta/lwc/utils/format_ast.xml").exists());
    assert!(!temp.path().join("meta/lwc/broken/broken_ast.xml").exists());
}

#[test]
fn same_stem_sources_are_not_overwritten() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("src"), "widget.js", "export class Widget {}\n");
    write(&temp.path().join("src"), "widget.mjs", "export class ModuleWidget {}\n");

    jsmeta(temp.path())
        .args(["batch", "src", "--out-dir", "out"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("would be written by widget.js, widget.mjs")
                .and(predicate::str::contains("2 of 2 files failed")),
        );

    assert!(!temp.path().join("out/widget_ast.xml").exists());
}

#[test]
fn fail_fast_from_environment() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("src"), "a.js", "export default class {}\n");

    jsmeta(temp.path())
        .env("JSMETA_FAIL_FAST", "true")
        .args(["batch", "src", "--out-dir", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 1 files failed"));
}

#[test]
fn suffix_extension_and_format_flags() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("src"), "service.ts", "export class Service {}\n");
    write(&temp.path().join("src"), "ignored.js", "export class Ignored {}\n");

    jsmeta(temp.path())
        .args([
            "batch", "src", "--out-dir", "out", "--ext", "ts", "--suffix", "_meta", "--format",
            "json",
        ])
        .assert()
        .success();

    assert!(temp.path().join("out/service_meta.json").exists());
    assert!(!temp.path().join("out/ignored_meta.json").exists());
}

#[test]
fn environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("src"), "a.js", "class A {}\n");
    fs::write(
        temp.path().join("jsmeta.config.json"),
        r#"{ "outputSuffix": "_file" }"#,
    )
    .unwrap();

    jsmeta(temp.path())
        .env("JSMETA_OUTPUT_SUFFIX", "_env")
        .args(["batch", "src", "--out-dir", "out"])
        .assert()
        .success();

    assert!(temp.path().join("out/a_env.xml").exists());
}

#[test]
fn invalid_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("src"), "a.js", "class A {}\n");
    fs::write(temp.path().join("jsmeta.config.json"), r#"{ "extensions": [] }"#).unwrap();

    jsmeta(temp.path())
        .args(["batch", "src", "--out-dir", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("extensions"));
}

#[test]
fn input_must_be_a_directory() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.js", "class A {}\n");

    jsmeta(temp.path())
        .args(["batch", "a.js", "--out-dir", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
