//! Shared testing utilities for codeowners-report CLI tests.

use assert_cmd::Command;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ORG: &str = "acme";

/// Testing harness providing an isolated working directory and a mock GitHub API.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    server: ServerGuard,
    mocks: Vec<Mock>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, server: Server::new(), mocks: Vec::new() }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Default report location inside the work directory.
    pub fn output_path(&self) -> PathBuf {
        self.work_dir().join("codeowners.csv")
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("report should have been written")
    }

    /// Build a command for invoking the compiled binary against the mock API.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("codeowners-report").expect("Failed to locate codeowners-report");
        cmd.current_dir(self.work_dir())
            .env("GITHUB_TOKEN", "test-token")
            .env("RUST_LOG", "warn")
            .env("CODEOWNERS_ORG", ORG)
            .args(["--api-url", &self.server_url()]);
        cmd
    }

    /// Serve `pages` of repositories followed by an empty page.
    pub fn mock_repository_pages(&mut self, pages: &[&[(&str, &str)]]) {
        let last: &[(&str, &str)] = &[];
        for (idx, page) in pages.iter().copied().chain(std::iter::once(last)).enumerate() {
            let body = serde_json::Value::Array(
                page.iter()
                    .map(|(name, branch)| {
                        serde_json::json!({
                            "full_name": format!("{}/{}", ORG, name),
                            "default_branch": branch,
                        })
                    })
                    .collect(),
            );
            let mock = self
                .server
                .mock("GET", format!("/orgs/{}/repos", ORG).as_str())
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("archived".into(), "false".into()),
                    Matcher::UrlEncoded("per_page".into(), "100".into()),
                    Matcher::UrlEncoded("page".into(), (idx + 1).to_string()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect_at_least(1)
                .create();
            self.mocks.push(mock);
        }
    }

    pub fn mock_head(&mut self, repo: &str, branch: &str, sha: &str) {
        let mock = self
            .server
            .mock("GET", format!("/repos/{}/{}/git/refs/heads/{}", ORG, repo, branch).as_str())
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "ref": format!("refs/heads/{}", branch),
                    "object": { "sha": sha, "type": "commit" },
                })
                .to_string(),
            )
            .expect_at_least(1)
            .create();
        self.mocks.push(mock);
    }

    /// Serve a recursive tree; a path ending in `/` is listed as a directory.
    pub fn mock_tree(&mut self, repo: &str, sha: &str, paths: &[&str]) {
        let entries: Vec<serde_json::Value> = paths
            .iter()
            .map(|path| match path.strip_suffix('/') {
                Some(dir) => serde_json::json!({ "path": dir, "type": "tree" }),
                None => serde_json::json!({ "path": path, "type": "blob" }),
            })
            .collect();
        let mock = self
            .server
            .mock("GET", format!("/repos/{}/{}/git/trees/{}", ORG, repo, sha).as_str())
            .match_query(Matcher::UrlEncoded("recursive".into(), "true".into()))
            .with_status(200)
            .with_body(
                serde_json::json!({ "sha": sha, "tree": entries, "truncated": false }).to_string(),
            )
            .expect_at_least(1)
            .create();
        self.mocks.push(mock);
    }

    pub fn mock_tree_failure(&mut self, repo: &str, sha: &str, status: usize) {
        let mock = self
            .server
            .mock("GET", format!("/repos/{}/{}/git/trees/{}", ORG, repo, sha).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(r#"{"message":"Server Error"}"#)
            .expect_at_least(1)
            .create();
        self.mocks.push(mock);
    }

    pub fn mock_file(&mut self, repo: &str, path: &str, text: &str) {
        let mock = self
            .server
            .mock("GET", format!("/repos/{}/{}/contents/{}", ORG, repo, path).as_str())
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "path": path,
                    "content": format!("{}\n", STANDARD.encode(text)),
                    "encoding": "base64",
                })
                .to_string(),
            )
            .expect_at_least(1)
            .create();
        self.mocks.push(mock);
    }

    pub fn mock_missing_file(&mut self, repo: &str, path: &str) {
        let mock = self
            .server
            .mock("GET", format!("/repos/{}/{}/contents/{}", ORG, repo, path).as_str())
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .expect_at_least(1)
            .create();
        self.mocks.push(mock);
    }

    /// Assert every registered mock was requested.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
