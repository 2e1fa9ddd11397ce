use std::path::PathBuf;
use tokio::process::Command;

use nodeswitch_backend::BackendError;

#[derive(Debug, Clone)]
pub enum NvmEnvironment {
    /// Shell-function nvm: sourced from `$NVM_DIR/nvm.sh`.
    Unix { nvm_dir: PathBuf },
    /// nvm-windows: a standalone executable.
    Windows { nvm_exe: PathBuf },
}

#[derive(Debug, Clone)]
pub struct NvmClient {
    pub environment: NvmEnvironment,
}

impl NvmClient {
    pub fn unix(nvm_dir: PathBuf) -> Self {
        Self {
            environment: NvmEnvironment::Unix { nvm_dir },
        }
    }

    pub fn windows(nvm_exe: PathBuf) -> Self {
        Self {
            environment: NvmEnvironment::Windows { nvm_exe },
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self.environment, NvmEnvironment::Windows { .. })
    }

    fn build_command(&self, args: &[&str]) -> Command {
        match &self.environment {
            NvmEnvironment::Unix { nvm_dir } => {
                let script = format!(
                    "export NVM_DIR=\"{}\"; [ -s \"$NVM_DIR/nvm.sh\" ] && \\. \"$NVM_DIR/nvm.sh\"; nvm {}",
                    nvm_dir.display(),
                    args.join(" ")
                );
                let mut cmd = Command::new("bash");
                cmd.args(["-c", &script]);
                cmd.env("TERM", "dumb");
                cmd.env("NO_COLOR", "1");
                cmd
            }
            NvmEnvironment::Windows { nvm_exe } => {
                let mut cmd = Command::new(nvm_exe);
                cmd.args(args);
                cmd
            }
        }
    }

    /// Runs one nvm invocation and returns its combined stdout+stderr
    /// text. A non-zero exit carries the same combined text in the
    /// error so callers can show the tool's own message.
    pub async fn run(&self, args: &[&str]) -> Result<String, BackendError> {
        let output = self.build_command(args).output().await?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&stderr);
        }

        if output.status.success() {
            Ok(combined)
        } else {
            Err(BackendError::CommandFailed { output: combined })
        }
    }

    pub async fn version(&self) -> Result<String, BackendError> {
        let output = if self.is_windows() {
            self.run(&["version"]).await?
        } else {
            self.run(&["--version"]).await?
        };
        Ok(output.trim().to_string())
    }
}
