// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::builder::{Capture, ProcessBuilder, ProcessOutput, Stream};
use crate::error::{ProcessError, Result};

fn stdio(stream: Stream) -> Stdio {
    match stream {
        Stream::Terminal => Stdio::inherit(),
        Stream::Piped(capture) if capture.is_empty() => Stdio::null(),
        Stream::Piped(_) => Stdio::piped(),
    }
}

/// Reads a piped stream to the end so the child never blocks on a full pipe.
fn drain<R>(stream: Option<R>, capture: Capture, label: &str, source: &'static str) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let label = label.to_string();
    tokio::spawn(async move {
        let Some(stream) = stream else {
            return String::new();
        };
        let mut kept = Vec::new();
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if capture.contains(Capture::TRACE) {
                trace!(tool = %label, source, "{line}");
            }
            if capture.contains(Capture::KEEP) {
                kept.push(line);
            }
        }
        kept.join("\n")
    })
}

impl ProcessBuilder {
    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command.envs(self.env.iter().map(|(k, v)| (k, v)));

        // An interactive child (pnpm dev) needs the keyboard as well.
        command.stdin(if self.stdout == Stream::Terminal {
            Stdio::inherit()
        } else {
            Stdio::null()
        });
        command.stdout(stdio(self.stdout));
        command.stderr(stdio(self.stderr));
        command.kill_on_drop(true);
        command
    }

    /// Spawns the child and waits for it.
    ///
    /// # Errors
    ///
    /// Returns a [`ProcessError`] if the program cannot be spawned, times
    /// out, or exits with a non-zero code.
    pub async fn run(self) -> Result<ProcessOutput> {
        let shown = self.to_string();
        debug!(cwd = ?self.cwd, "running {shown}");

        let mut child = self.command().spawn().map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ProcessError::ExecutableNotFound {
                name: self.label.clone(),
            },
            _ => ProcessError::SpawnFailed {
                command: shown.clone(),
                source,
            },
        })?;

        let stdout = drain(child.stdout.take(), self.stdout.capture(), &self.label, "stdout");
        let stderr = drain(child.stderr.take(), self.stderr.capture(), &self.label, "stderr");

        let status = match self.timeout {
            None => child.wait().await,
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    warn!(tool = %self.label, ?limit, "killing unresponsive process");
                    child.kill().await?;
                    return Err(ProcessError::TimedOut {
                        command: shown,
                        limit,
                    }
                    .into());
                }
            },
        }
        .with_context(|| format!("failed waiting for {}", self.label))?;

        let output = ProcessOutput {
            code: status.code().unwrap_or(-1),
            stdout: stdout.await.unwrap_or_default(),
            stderr: stderr.await.unwrap_or_default(),
        };

        if !output.success() {
            if !output.stderr.is_empty() {
                debug!(tool = %self.label, stderr = %output.stderr, "failed");
            }
            return Err(ProcessError::NonZeroExit {
                command: shown,
                code: output.code,
            }
            .into());
        }
        trace!(tool = %self.label, "finished");
        Ok(output)
    }
}
