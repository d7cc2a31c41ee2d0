//! Annotator backed by an external process.
//!
//! The process reads one utterance on stdin and writes one doc JSON object
//! on stdout (see [`crate::doc`]). A typical sidecar is a short spaCy script.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use anyhow::{bail, Context};
use medvoice_core::annotator::{AnnotateError, AnnotateResult, Annotator};
use medvoice_core::models::Annotation;

use crate::doc::parse_doc_json;

/// Utterance used by [`CommandAnnotator::probe`].
pub const PROBE_TEXT: &str = "Take aspirin daily.";

/// Runs an external annotator once per utterance.
#[derive(Debug, Clone)]
pub struct CommandAnnotator {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandAnnotator {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Annotate a fixed utterance so hosts can fail fast at startup.
    pub fn probe(&self) -> AnnotateResult<()> {
        let annotation = self.annotate(PROBE_TEXT)?;
        if annotation.is_empty() {
            return Err(AnnotateError::InvalidOutput(
                "probe produced no tokens".into(),
            ));
        }
        tracing::info!(
            program = %self.program.display(),
            tokens = annotation.len(),
            "external annotator ready"
        );
        Ok(())
    }

    fn spawn(&self) -> AnnotateResult<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AnnotateError::Unavailable(format!("{}: {}", self.program.display(), e))
            })
    }

    /// Feed `text` to a running child and collect its stdout.
    fn collect(mut child: Child, text: &str) -> anyhow::Result<String> {
        let mut stdin = child.stdin.take().context("child stdin not captured")?;
        let input = text.to_owned();
        // Write on another thread so a chatty child cannot fill stdout and stall
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .context("failed waiting for annotator")?;

        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::debug!(error = %e, "annotator closed stdin early"),
            Err(_) => bail!("stdin writer panicked"),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("annotator exited with {}: {}", output.status, stderr.trim());
        }

        String::from_utf8(output.stdout).context("annotator output is not UTF-8")
    }
}

impl Annotator for CommandAnnotator {
    fn annotate(&self, text: &str) -> AnnotateResult<Annotation> {
        let child = self.spawn()?;

        let stdout = Self::collect(child, text)
            .map_err(|e| AnnotateError::InvalidOutput(format!("{:#}", e)))?;
        let annotation =
            parse_doc_json(&stdout).map_err(|e| AnnotateError::InvalidOutput(e.to_string()))?;

        if annotation.text != text {
            return Err(AnnotateError::InvalidOutput(
                "annotated text differs from the input utterance".into(),
            ));
        }

        tracing::debug!(
            program = %self.program.display(),
            tokens = annotation.len(),
            entities = annotation.entities.len(),
            "external annotation complete"
        );
        Ok(annotation)
    }

    fn name(&self) -> &str {
        "command"
    }
}
