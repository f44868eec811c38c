pub mod runner {
    use std::io::{ErrorKind, Write};
    use std::process::{Command, Stdio};
    use std::thread;

    use crate::config::config::config::InterpreterConfig;
    use crate::editor::error::error::EditorError;

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct RunOutput {
        pub stdout: String,
        pub stderr: String,
    }

    /// Executes buffer text as untrusted program source.
    ///
    /// Whatever runs behind this trait has the full privileges of the user
    /// running the editor. Implementations must not panic on bad source; every
    /// failure comes back as `EditorError::RuntimeFault`.
    pub trait CodeRunner {
        fn execute(&self, source: &str) -> Result<RunOutput, EditorError>;

        fn name(&self) -> &str;
    }

    /// Runs source through an external interpreter that reads its program
    /// from stdin, e.g. `python3 -`.
    pub struct SubprocessRunner {
        program: String,
        args: Vec<String>,
    }

    impl SubprocessRunner {
        pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
            Self {
                program: program.into(),
                args,
            }
        }

        pub fn from_config(config: &InterpreterConfig) -> Self {
            Self::new(config.program.clone(), config.args.clone())
        }
    }

    impl CodeRunner for SubprocessRunner {
        fn execute(&self, source: &str) -> Result<RunOutput, EditorError> {
            let mut child = Command::new(&self.program)
                .args(&self.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .map_err(|e| {
                    EditorError::RuntimeFault(format!("failed to start {}: {}", self.program, e))
                })?;

            // Feed stdin from its own thread so an interpreter that writes while
            // it reads cannot fill both pipes and stall.
            let writer = child.stdin.take().map(|mut stdin| {
                let source = source.to_owned();
                thread::spawn(move || match stdin.write_all(source.as_bytes()) {
                    // An interpreter that exits before reading everything closes
                    // the pipe; its exit status carries the real error.
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                    other => other,
                })
            });

            let output = child.wait_with_output().map_err(|e| {
                EditorError::RuntimeFault(format!("failed to wait for {}: {}", self.program, e))
            })?;

            if let Some(writer) = writer {
                match writer.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        return Err(EditorError::RuntimeFault(format!(
                            "failed to send code to {}: {}",
                            self.program, e
                        )));
                    }
                    Err(_) => {
                        return Err(EditorError::RuntimeFault(format!(
                            "failed to send code to {}",
                            self.program
                        )));
                    }
                }
            }

            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();

            if !output.status.success() {
                let detail = stderr
                    .lines()
                    .rev()
                    .find(|line| !line.trim().is_empty())
                    .map(|line| line.trim().to_string())
                    .unwrap_or_else(|| match output.status.code() {
                        Some(code) => format!("{} exited with code {}", self.program, code),
                        None => format!("{} was terminated by a signal", self.program),
                    });
                return Err(EditorError::RuntimeFault(detail));
            }

            Ok(RunOutput { stdout, stderr })
        }

        fn name(&self) -> &str {
            &self.program
        }
    }
}
