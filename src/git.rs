//! Thin git pass-through operations.
//!
//! Each helper issues whole `git` commands and aborts on nonzero exit; no
//! retries and no inspection of the repository beyond the exit status.

use std::path::Path;

use crate::runner::{error_text, CommandRunner};
use crate::{Error, Result};

fn git(runner: &dyn CommandRunner, dir: &Path, args: &[&str], context: &str) -> Result<()> {
    let output = runner.run(dir, "git", args)?;
    if !output.success {
        return Err(Error::Git(format!("{}: {}", context, error_text(&output))));
    }
    Ok(())
}

/// Switch the repository at `dir` to another branch.
pub fn checkout(runner: &dyn CommandRunner, dir: &Path, branch: &str) -> Result<()> {
    git(runner, dir, &["checkout", branch], "git checkout")
}

/// Merge a branch into the currently checked-out branch.
pub fn merge(runner: &dyn CommandRunner, dir: &Path, branch: &str) -> Result<()> {
    git(runner, dir, &["merge", branch], "git merge")
}

/// Stage all changes and commit them with the given message.
pub fn commit_all(runner: &dyn CommandRunner, dir: &Path, message: &str) -> Result<()> {
    git(runner, dir, &["add", "."], "git add")?;
    git(runner, dir, &["commit", "-m", message], "git commit")
}

/// Push local commits to a remote branch.
pub fn push(runner: &dyn CommandRunner, dir: &Path, remote: &str, branch: &str) -> Result<()> {
    git(runner, dir, &["push", remote, branch], "git push")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use super::*;
    use crate::runner::CommandOutput;

    struct FakeGit {
        calls: RefCell<Vec<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl FakeGit {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on,
            }
        }
    }

    impl CommandRunner for FakeGit {
        fn run(&self, _dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
            assert_eq!(program, "git");
            self.calls
                .borrow_mut()
                .push(args.iter().map(|s| s.to_string()).collect());

            if self.fail_on.is_some_and(|sub| args.first() == Some(&sub)) {
                return Ok(CommandOutput {
                    stdout: String::new(),
                    stderr: "fatal: boom".to_string(),
                    success: false,
                    exit_code: 128,
                });
            }
            Ok(CommandOutput {
                success: true,
                ..Default::default()
            })
        }

        fn run_interactive(&self, _dir: &Path, _program: &str, _args: &[&str]) -> Result<i32> {
            unreachable!("git helpers capture output");
        }
    }

    #[test]
    fn commit_all_stages_then_commits() {
        let fake = FakeGit::new(None);
        commit_all(&fake, &PathBuf::from("/repo"), "Publication now").unwrap();

        let calls = fake.calls.borrow();
        assert_eq!(calls[0], vec!["add", "."]);
        assert_eq!(calls[1], vec!["commit", "-m", "Publication now"]);
    }

    #[test]
    fn push_targets_remote_and_branch() {
        let fake = FakeGit::new(None);
        push(&fake, &PathBuf::from("/repo"), "origin", "master").unwrap();

        assert_eq!(fake.calls.borrow()[0], vec!["push", "origin", "master"]);
    }

    #[test]
    fn checkout_and_merge_pass_branch_through() {
        let fake = FakeGit::new(None);
        checkout(&fake, &PathBuf::from("/repo"), "gh-pages").unwrap();
        merge(&fake, &PathBuf::from("/repo"), "drafts").unwrap();

        let calls = fake.calls.borrow();
        assert_eq!(calls[0], vec!["checkout", "gh-pages"]);
        assert_eq!(calls[1], vec!["merge", "drafts"]);
    }

    #[test]
    fn failed_commit_surfaces_stderr() {
        let fake = FakeGit::new(Some("commit"));
        let err = commit_all(&fake, &PathBuf::from("/repo"), "msg").unwrap_err();

        assert_eq!(err.code(), "GIT_COMMAND_FAILED");
        assert!(err.to_string().contains("fatal: boom"));
    }
}
