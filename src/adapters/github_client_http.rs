//! GitHub REST API client implementation using reqwest.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, EntryKind, GitHubApiConfig, Repository, RepositoryTree, TreeEntry};
use crate::ports::{FileContents, GitHubPort};

/// Environment variable holding the organization access token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("codeowners-report/", env!("CARGO_PKG_VERSION"));
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP transport for the GitHub REST API.
///
/// Each call performs a single blocking request. There is no retry layer.
#[derive(Clone)]
pub struct HttpGitHubClient {
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a new HTTP client with the given token and configuration.
    pub fn new(token: &str, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let credential = STANDARD.encode(token.as_bytes());
        let mut authorization = HeaderValue::from_str(&format!("Basic {}", credential))
            .map_err(|e| AppError::config_error(format!("Invalid GitHub token: {}", e)))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::GitHubApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    /// Create from `GITHUB_TOKEN` with custom configuration.
    pub fn from_env_with_config(config: &GitHubApiConfig) -> Result<Self, AppError> {
        let token = std::env::var(GITHUB_TOKEN_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(GITHUB_TOKEN_ENV.into()))?;

        Self::new(&token, config)
    }

    /// Build an endpoint URL below the configured base.
    ///
    /// Each part may itself contain `/`-separated segments (`org/name`, `.github/CODEOWNERS`).
    fn endpoint(&self, parts: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("api_url '{}' cannot be a base", self.api_url))
            })?
            .pop_if_empty()
            .extend(parts.iter().flat_map(|part| part.split('/')).filter(|s| !s.is_empty()));
        Ok(url)
    }

    fn send(&self, url: Url) -> Result<(StatusCode, String), AppError> {
        let response = self.client.get(url).send().map_err(|e| AppError::GitHubApi {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| AppError::GitHubApi {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;
        Ok((status, body))
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let (status, body) = self.send(url)?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        parse_body(status, &body)
    }
}

fn parse_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::GitHubApi {
        message: format!("Failed to parse response: {}", e),
        status: Some(status.as_u16()),
    })
}

fn status_error(status: StatusCode, body: &str) -> AppError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        if status == StatusCode::NOT_FOUND {
            "Not Found".to_string()
        } else if status.is_server_error() {
            "Server error".to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    AppError::GitHubApi { message, status: Some(status.as_u16()) }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

#[derive(Debug, Deserialize)]
struct ApiRepository {
    full_name: String,
    default_branch: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiRefResponse {
    Single(ApiRef),
    /// Returned when the name is only a prefix of existing refs.
    Many(Vec<ApiRef>),
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    name: String,
    object: ApiRefObject,
}

#[derive(Debug, Deserialize)]
struct ApiRefObject {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ApiTree {
    tree: Vec<ApiTreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct ApiTreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct ApiContents {
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: String,
}

impl GitHubPort for HttpGitHubClient {
    fn list_repositories(
        &self,
        organization: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, AppError> {
        let mut url = self.endpoint(&["orgs", organization, "repos"])?;
        url.query_pairs_mut()
            .append_pair("archived", "false")
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        let repos: Vec<ApiRepository> = self.get_json(url)?;
        Ok(repos
            .into_iter()
            .map(|repo| Repository::new(repo.full_name, repo.default_branch))
            .collect())
    }

    fn get_branch_sha(&self, repository: &str, branch: &str) -> Result<String, AppError> {
        let url = self.endpoint(&["repos", repository, "git/refs/heads", branch])?;

        match self.get_json::<ApiRefResponse>(url)? {
            ApiRefResponse::Single(reference) => Ok(reference.object.sha),
            ApiRefResponse::Many(references) => {
                let wanted = format!("refs/heads/{}", branch);
                references
                    .into_iter()
                    .find(|reference| reference.name == wanted)
                    .map(|reference| reference.object.sha)
                    .ok_or_else(|| AppError::GitHubApi {
                        message: format!("Branch '{}' not found in {}", branch, repository),
                        status: Some(StatusCode::NOT_FOUND.as_u16()),
                    })
            }
        }
    }

    fn get_tree(&self, repository: &str, sha: &str) -> Result<RepositoryTree, AppError> {
        let mut url = self.endpoint(&["repos", repository, "git/trees", sha])?;
        url.query_pairs_mut().append_pair("recursive", "true");

        let tree: ApiTree = self.get_json(url)?;
        Ok(RepositoryTree {
            entries: tree
                .tree
                .into_iter()
                .map(|entry| TreeEntry::new(entry.path, EntryKind::parse(&entry.kind)))
                .collect(),
            truncated: tree.truncated,
        })
    }

    fn get_file_contents(
        &self,
        repository: &str,
        path: &str,
    ) -> Result<Option<FileContents>, AppError> {
        let url = self.endpoint(&["repos", repository, "contents", path])?;
        let (status, body) = self.send(url)?;

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let contents: ApiContents = parse_body(status, &body)?;
        Ok(Some(FileContents { content: contents.content, encoding: contents.encoding }))
    }
}
