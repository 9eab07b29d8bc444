pub mod github_client_http;
pub mod report_file;
