use crate::domain::speech::{Platform, SpeechServiceError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

/// Placeholder replaced by the audio file path in player arguments
const FILE_PLACEHOLDER: &str = "{file}";

/// Players tried in order on Linux and other unix systems
const UNIX_PLAYERS: &[(&str, &[&str])] = &[
    ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "error"]),
    ("mpv", &["--no-video", "--really-quiet"]),
    ("mpg123", &["-q"]),
];

/// Plays an audio file to completion.
///
/// Implementations acquire their output (device handle, child process) for
/// the duration of a single call and release it before returning, whether
/// playback finished or failed.
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    fn name(&self) -> &str;

    async fn play(&self, path: &Path) -> Result<(), SpeechServiceError>;
}

/// Plays audio by running an external player program and waiting for it.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    /// `args` may contain `{file}`; otherwise the path is appended.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Default player for the platform. `program` overrides the binary,
    /// in which case the file path is its only argument.
    pub fn for_platform(platform: &Platform, program: Option<&str>) -> Self {
        if let Some(program) = program {
            return Self::new(program, Vec::new());
        }

        match platform {
            Platform::Windows => Self::new(
                "powershell",
                vec![
                    "-NoProfile".to_string(),
                    "-NonInteractive".to_string(),
                    "-Command".to_string(),
                    format!("(New-Object Media.SoundPlayer '{}').PlaySync()", FILE_PLACEHOLDER),
                ],
            ),
            Platform::MacOs => Self::new("afplay", Vec::new()),
            Platform::Linux | Platform::Other(_) => Self::first_installed(std::env::var_os("PATH")),
        }
    }

    /// First of the unix players that is an executable on `search_path`,
    /// falling back to `ffplay` so the error names a real player.
    fn first_installed(search_path: Option<OsString>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let (program, args) = UNIX_PLAYERS
            .iter()
            .find(|(program, _)| which::which_in(program, search_path.as_ref(), &cwd).is_ok())
            .unwrap_or(&UNIX_PLAYERS[0]);
        Self::new(*program, args.iter().map(|a| a.to_string()).collect())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for playing `path`, placeholder substituted.
    pub fn args_for(&self, path: &Path) -> Vec<String> {
        let file = path.display().to_string();
        if self.args.iter().any(|a| a.contains(FILE_PLACEHOLDER)) {
            self.args
                .iter()
                .map(|a| a.replace(FILE_PLACEHOLDER, &powershell_safe(&file, &self.program)))
                .collect()
        } else {
            let mut args = self.args.clone();
            args.push(file);
            args
        }
    }
}

#[async_trait]
impl AudioPlayer for CommandPlayer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn play(&self, path: &Path) -> Result<(), SpeechServiceError> {
        let args = self.args_for(path);
        tracing::debug!(
            player = %self.program,
            args = ?args,
            "Starting audio playback"
        );

        // kill_on_drop ties the player process to this call
        let child = tokio::process::Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SpeechServiceError::Playback(format!(
                        "audio player '{}' not found; install it or set GLT_PLAYER",
                        self.program
                    ))
                } else {
                    SpeechServiceError::Playback(format!(
                        "failed to start '{}': {}",
                        self.program, e
                    ))
                }
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| SpeechServiceError::Playback(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                player = %self.program,
                status = ?output.status.code(),
                stderr = %stderr.trim(),
                "Audio player exited with an error"
            );
            return Err(SpeechServiceError::Playback(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        tracing::debug!(player = %self.program, "Audio playback finished");
        Ok(())
    }
}

/// Single quotes are doubled when the path lands inside a PowerShell
/// single-quoted string.
fn powershell_safe(file: &str, program: &str) -> String {
    if program.eq_ignore_ascii_case("powershell") || program.eq_ignore_ascii_case("pwsh") {
        file.replace('\'', "''")
    } else {
        file.to_string()
    }
}
