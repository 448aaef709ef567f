use super::translator_with;
use crate::compile::PRELUDE;
use crate::loader::MemoryLoader;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use std::path::PathBuf;
use std::process::{Command, Output};

/// translates a program along with the prelude and builds it with g++
fn check(data: &str, trace: bool) -> PathBuf {
    let loader = MemoryLoader::default().with(PRELUDE, include_str!("../../lib/core/prelude.xc"));
    let code = translator_with(loader, data, trace)
        .unwrap()
        .with_includes(vec![PRELUDE.to_string()])
        .translate()
        .unwrap();

    let file = thread_rng()
        .sample_iter(Alphanumeric)
        .take(7)
        .map(char::from)
        .collect::<String>();
    let exe = std::env::temp_dir().join(file);
    let cpp = exe.with_extension("cpp");
    std::fs::write(&cpp, code + "\n").unwrap();

    let status = Command::new("g++")
        .arg("-std=c++11")
        .arg(&cpp)
        .arg("-o")
        .arg(&exe)
        .status()
        .unwrap();
    std::fs::remove_file(&cpp).unwrap();
    assert!(status.success(), "g++ failed (trace = {}) on\n{}", trace, data);
    exe
}

fn run(exe: PathBuf) -> Output {
    let output = Command::new(&exe).output().unwrap();
    std::fs::remove_file(exe).unwrap();
    output
}

#[test]
fn fixtures() {
    for data in [
        include_str!("../../test/classes.xc"),
        include_str!("../../test/control.xc"),
    ]
    .iter()
    {
        for &trace in [false, true].iter() {
            std::fs::remove_file(check(data, trace)).unwrap();
        }
    }
}

#[test]
fn map_literals_under_trace() {
    let data = "
        fn pairs[] Map(String, Int) {
          return $String, Int[\"b\": 2]
        }
        fn main[] {
          var m = $String, Int[\"a\": 1]
          $String, Int[]
          assert[pairs[].size[] == 1]
        }
        ";
    for &trace in [false, true].iter() {
        let output = run(check(data, trace));
        assert!(output.status.success(), "trace = {}", trace);
    }
}

#[test]
fn self_as_a_value() {
    let data = "
        class C {
          var other C
          fn same[o C] Bool {
            return self is o and not (self is nil)
          }
          fn keep[] {
            self.other = self
          }
        }
        fn main[] {
          var c = new C[]
          var d = new C[]
          assert[c.same[c]]
          assert[not d.same[c]]
          c.keep[]
          assert[c.other is c]
        }
        ";
    for &trace in [false, true].iter() {
        let output = run(check(data, trace));
        assert!(output.status.success(), "trace = {}", trace);
    }
}

#[test]
fn failed_assert_prints_the_message_then_the_stack() {
    let data = "fn main[] { assert[1 == 2, \"nope\"] }";

    let output = run(check(data, false));
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "AssertionError: nope\n<Trace is off>\n"
    );

    let output = run(check(data, true));
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        concat!(
            "AssertionError: nope\n",
            "Traceback (most recent call last):\n",
            "  File \"t.xc\", line 1, in main\n"
        )
    );
}
