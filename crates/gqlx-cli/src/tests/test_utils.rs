use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// A scratch directory under the system temp dir, removed on drop.
pub(super) struct ScratchDir {
    path: PathBuf,
}
impl ScratchDir {
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let path = std::env::temp_dir().join(format!(
            "gqlx-cli-tests-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed),
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `contents` to `relative_path`, creating parent directories.
    pub fn write(&self, relative_path: &str, contents: &str) -> PathBuf {
        let path = self.path.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}
impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Parses `args` as a command line and runs its subcommand.
pub(super) async fn run_cli(args: &[&str]) -> CommandResult {
    let mut cli = Cli::parse_from(std::iter::once("gqlx").chain(args.iter().copied()));
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}
