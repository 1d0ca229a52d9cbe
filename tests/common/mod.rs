#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Stand-in for `brssl ta`: one DN array per certificate argument, then the
/// anchor table, the way BearSSL lays it out.
pub const FAKE_BRSSL: &str = r##"#!/usr/bin/env sh
[ "$1" = "ta" ] || exit 2
shift
echo "Reading file '$1'" >&2
echo '#include <bearssl.h>'
i=0
for f in "$@"; do
  echo ""
  echo "static const unsigned char TA${i}_DN[] = {"
  echo "	0x30, 0x0$i"
  echo "};"
  i=$((i+1))
done
echo ""
echo "static const br_x509_trust_anchor TAs[$i] = {"
echo "};"
echo ""
echo "#define TAs_NUM   $i"
"##;

/// Stand-in for `openssl x509 -noout -text -in <file>` and `openssl version`.
pub const FAKE_OPENSSL: &str = r##"#!/usr/bin/env sh
if [ "$1" = "version" ]; then
  echo "OpenSSL 3.0.0 (fake)"
  exit 0
fi
[ "$1" = "x509" ] || exit 2
for last; do :; done
echo "Certificate:"
echo "    Subject: CN = $(basename "$last" .cer)"
"##;

/// Emits one declaration and then fails.
pub const FAILING_BRSSL: &str = r##"#!/usr/bin/env sh
echo "static const unsigned char TA0_DN[] = {"
exit 3
"##;

/// Claims an anchor for which there is no certificate.
pub const OUT_OF_RANGE_BRSSL: &str = r##"#!/usr/bin/env sh
echo "static const unsigned char TA7_DN[] = {"
echo "};"
"##;

pub const FAILING_OPENSSL: &str = r##"#!/usr/bin/env sh
echo "unable to load certificate" >&2
exit 1
"##;

/// Every fake tool, by the name `TestEnv` looks it up with.
pub const SCRIPTS: &[(&str, &str)] = &[
    ("brssl", FAKE_BRSSL),
    ("openssl", FAKE_OPENSSL),
    ("brssl-failing", FAILING_BRSSL),
    ("brssl-out-of-range", OUT_OF_RANGE_BRSSL),
    ("openssl-failing", FAILING_OPENSSL),
];

static TOOLS: OnceLock<TempDir> = OnceLock::new();

/// Directory holding every script in `SCRIPTS`, written once per test binary.
///
/// Writing an executable while another test thread forks can leave the
/// write descriptor open in the child, and exec then fails with ETXTBSY.
/// All scripts are therefore written before any test can spawn one.
pub fn tools_dir() -> &'static Path {
    TOOLS
        .get_or_init(|| {
            let dir = tempfile::Builder::new()
                .prefix("mkanchors-tools")
                .tempdir()
                .expect("create tools dir");
            for (name, body) in SCRIPTS {
                write_script(dir.path(), name, body);
            }
            dir
        })
        .path()
}

/// Path of the fake tool registered as `name` in `SCRIPTS`.
pub fn tool(name: &str) -> PathBuf {
    assert!(
        SCRIPTS.iter().any(|(n, _)| *n == name),
        "unknown fake tool {name}"
    );
    tools_dir().join(name)
}

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub certs: PathBuf,
    pub output: PathBuf,
    pub brssl: PathBuf,
    pub openssl: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let certs = root.join("certs");
        fs::create_dir_all(&certs).expect("create certs dir");

        Self {
            output: root.join("tls-anchors.h"),
            _tmp: tmp,
            root,
            certs,
            brssl: tool("brssl"),
            openssl: tool("openssl"),
        }
    }

    pub fn with_certs(names: &[&str]) -> Self {
        let env = Self::new();
        for name in names {
            env.add_cert(name);
        }
        env
    }

    pub fn add_cert(&self, name: &str) {
        fs::write(self.certs.join(name), "not really DER").expect("write cert");
    }

    pub fn use_brssl(&mut self, name: &str) {
        self.brssl = tool(name);
    }

    pub fn use_openssl(&mut self, name: &str) {
        self.openssl = tool(name);
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mkanchors");
        cmd.arg("--certs-dir")
            .arg(&self.certs)
            .arg("--output")
            .arg(&self.output)
            .arg("--brssl")
            .arg(&self.brssl)
            .arg("--openssl")
            .arg(&self.openssl);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn header(&self) -> String {
        fs::read_to_string(&self.output).expect("read generated header")
    }
}

pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("stat script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod script");
    }
    path
}
