use assert_cmd::Command;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// Isolated workspace with `schemas/` and `prompts/` directories
pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        fs::create_dir(tmp.path().join("schemas")).expect("create schemas dir");
        fs::create_dir(tmp.path().join("prompts")).expect("create prompts dir");
        Self { tmp }
    }

    /// The foo/bar fixture: only `foo` forms a valid pair
    pub fn foo_bar() -> Self {
        let env = Self::new();
        env.schema("foo.json", r#"{"type":"object"}"#);
        env.schema("bar.json", "{");
        env.prompt("foo.txt", "describe a foo");
        env.prompt("bar.txt", "describe a bar");
        env
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn schemas_dir(&self) -> PathBuf {
        self.root().join("schemas")
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.root().join("prompts")
    }

    pub fn schema(&self, name: &str, content: &str) {
        fs::write(self.schemas_dir().join(name), content).expect("write schema");
    }

    pub fn prompt(&self, name: &str, content: &str) {
        fs::write(self.prompts_dir().join(name), content).expect("write prompt");
    }

    /// Command with a clean environment pointing at this workspace
    pub fn cmd(&self, api_url: &str) -> Command {
        let mut cmd = Command::cargo_bin("schemashield-ci").expect("binary built");
        cmd.env_clear()
            .current_dir(self.root())
            .env("NO_COLOR", "1")
            .env("INPUT_TOKEN", "tok-123")
            .env("INPUT_PROVIDER", "openai")
            .env("INPUT_MODEL", "gpt-4o")
            .env("INPUT_SCHEMAS_DIR", self.schemas_dir())
            .env("INPUT_PROMPTS_DIR", self.prompts_dir())
            .env("INPUT_API_URL", api_url);
        cmd
    }
}

/// One-shot HTTP server answering with a canned response.
///
/// The join handle yields the raw request once a client has connected.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write response");
        request
    });

    (format!("http://{}", addr), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Body part of a raw HTTP request
pub fn request_body(request: &str) -> &str {
    request.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or("")
}
