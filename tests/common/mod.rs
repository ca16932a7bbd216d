use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub const EXAMPLE: &str = "ID\tg1\tg2\tg3\nA\t1\t2\t3\nB\t1\t5\t3\nC\t0\t2\t9\n";

/// Fresh directory for one test, removed on drop
pub struct Workdir {
    pub dir: PathBuf,
}

impl Workdir {
    pub fn new(label: &str) -> io::Result<Self> {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join("cgmlst-dists-tests").join(format!(
            "{}-{}-{}",
            std::process::id(),
            id,
            label
        ));
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

pub fn run(args: &[&str], input: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cgmlst-dists"));
    cmd.args(args);
    if let Some(path) = input {
        cmd.arg(path);
    }
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("failed to run cgmlst-dists")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
