//! GitHub REST API implementation of [`CommentPlatform`].

use async_trait::async_trait;
use reqwest::{
    RequestBuilder, Response,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Deserialize;
use serde_json::json;

use super::{Comment, CommentPlatform, PlatformError, PlatformResult};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const PER_PAGE: usize = 100;
const MAX_ERROR_BODY_CHARS: usize = 800;

/// An `owner/name` repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> PlatformResult<Self> {
        let trimmed = raw.trim();
        match trimmed.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(PlatformError::Config(format!(
                "repository must look like owner/name, got \"{}\"",
                trimmed
            ))),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GithubIssueComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    user: Option<GithubUser>,
}

impl From<GithubIssueComment> for Comment {
    fn from(comment: GithubIssueComment) -> Self {
        Comment {
            id: comment.id,
            author: comment.user.map(|u| u.login).unwrap_or_default(),
            body: comment.body.unwrap_or_default(),
        }
    }
}

pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    repo: RepoRef,
}

impl GithubClient {
    /// Build a client for `repo`. Requests are unauthenticated when `token` is `None`.
    pub fn new(api_base: &str, repo: RepoRef, token: Option<&str>) -> PlatformResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("extrack"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| PlatformError::Config("invalid GitHub token".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| PlatformError::Transport {
                operation: "build http client",
                source,
            })?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            repo,
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_base, self.repo.owner, self.repo.name, path
        )
    }

    async fn send(&self, operation: &'static str, request: RequestBuilder) -> PlatformResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| PlatformError::Transport { operation, source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(PlatformError::Status {
            operation,
            status: status.as_u16(),
            body: truncate_for_error(&body, MAX_ERROR_BODY_CHARS),
        })
    }
}

#[async_trait]
impl CommentPlatform for GithubClient {
    async fn list_comments(&self, issue: u64) -> PlatformResult<Vec<Comment>> {
        let mut page = 1_u32;
        let mut comments = Vec::new();
        loop {
            let request = self
                .http
                .get(self.repo_url(&format!("issues/{}/comments", issue)))
                .query(&[
                    ("per_page", PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ]);
            let chunk: Vec<GithubIssueComment> = self
                .send("list comments", request)
                .await?
                .json()
                .await
                .map_err(|source| PlatformError::Decode {
                    operation: "list comments",
                    source,
                })?;

            let chunk_len = chunk.len();
            comments.extend(chunk.into_iter().map(Comment::from));
            if chunk_len < PER_PAGE {
                break;
            }
            page = page.saturating_add(1);
        }
        Ok(comments)
    }

    async fn create_comment(&self, issue: u64, body: &str) -> PlatformResult<()> {
        let request = self
            .http
            .post(self.repo_url(&format!("issues/{}/comments", issue)))
            .json(&json!({ "body": body }));
        self.send("create comment", request).await?;
        Ok(())
    }

    async fn update_comment(&self, _issue: u64, comment_id: u64, body: &str) -> PlatformResult<()> {
        let request = self
            .http
            .patch(self.repo_url(&format!("issues/comments/{}", comment_id)))
            .json(&json!({ "body": body }));
        self.send("update comment", request).await?;
        Ok(())
    }

    async fn add_labels(&self, issue: u64, labels: &[String]) -> PlatformResult<()> {
        let request = self
            .http
            .post(self.repo_url(&format!("issues/{}/labels", issue)))
            .json(&json!({ "labels": labels }));
        self.send("add labels", request).await?;
        Ok(())
    }
}

fn truncate_for_error(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body.to_string();
    }
    let truncated: String = body.chars().take(max_chars).collect();
    format!("{}...", truncated)
}
