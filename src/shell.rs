//! Interactive shell: dispatches parsed requests against a namespace.

use crate::command::{self, Action};
use crate::config::ShellConfig;
use crate::error::CommandError;
use crate::namespace::Namespace;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Line-oriented command interpreter over one [`Namespace`].
pub struct Shell {
    namespace: Namespace,
    prompt: String,
}

impl Shell {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            namespace: Namespace::new(),
            prompt: config.prompt.clone(),
        }
    }

    /// Execute one command line. Returns rendered output for the commands
    /// that produce any (`pwd`, `ls`, `read`, `find`); mutations are silent.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, CommandError> {
        let request = command::parse(line)?;
        match request.action {
            Action::Cd => {
                let path = require_path(request.src_path, "cd")?;
                self.namespace.change_directory(&path)?;
                Ok(None)
            }
            Action::Pwd => Ok(Some(self.namespace.working_directory())),
            Action::Mkdir => {
                let path = require_path(request.src_path, "mkdir")?;
                let recursive = request.option.as_deref() == Some("p");
                self.namespace.make_directory(&path, recursive)?;
                Ok(None)
            }
            Action::Ls => Ok(Some(self.namespace.list_contents(request.src_path.as_deref())?)),
            Action::Rm => {
                let path = require_path(request.src_path, "rm")?;
                self.namespace.remove(&path)?;
                Ok(None)
            }
            Action::Mkfile => {
                let path = require_path(request.src_path, "mkfile")?;
                self.namespace.create_file(&path)?;
                Ok(None)
            }
            Action::Write => {
                let path = require_path(request.src_path, "write")?;
                let content = request
                    .content
                    .ok_or_else(|| CommandError::Parse("write expects quoted content".to_string()))?;
                self.namespace.write_content(&path, &content)?;
                Ok(None)
            }
            Action::Read => {
                let path = require_path(request.src_path, "read")?;
                Ok(Some(self.namespace.read_content(&path)?.to_string()))
            }
            Action::Mv => {
                let src = require_path(request.src_path, "mv")?;
                let dest = request
                    .dest_path
                    .ok_or_else(|| CommandError::Parse("mv expects a destination path".to_string()))?;
                self.namespace.move_node(&src, &dest)?;
                Ok(None)
            }
            Action::Find => {
                let path = require_path(request.src_path, "find")?;
                Ok(Some(self.namespace.find(&path[0])))
            }
        }
    }

    /// Prompt, read, execute, repeat. Errors are printed and the loop
    /// resumes; only `exit` (or end of input) terminates the session.
    pub fn run_interactive(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            write!(stdout, "{} ", self.prompt.cyan())?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line == "exit" {
                break;
            }
            if line.is_empty() {
                continue;
            }
            match self.execute(line) {
                Ok(Some(output)) => writeln!(stdout, "{}", output)?,
                Ok(None) => {}
                Err(err) => writeln!(stdout, "{}", err.to_string().red())?,
            }
        }
        Ok(())
    }

    /// Run a file of commands line by line with the interactive error
    /// discipline: a failing line is reported and the script continues.
    pub fn run_script(&mut self, path: &Path) -> io::Result<()> {
        let file = std::fs::File::open(path)?;
        let mut stdout = io::stdout();
        for line in io::BufReader::new(file).lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "exit" {
                break;
            }
            match self.execute(line) {
                Ok(Some(output)) => writeln!(stdout, "{}", output)?,
                Ok(None) => {}
                Err(err) => writeln!(stdout, "{}", err.to_string().red())?,
            }
        }
        Ok(())
    }
}

fn require_path(path: Option<Vec<String>>, verb: &str) -> Result<Vec<String>, CommandError> {
    path.ok_or_else(|| CommandError::Parse(format!("{} expects a path argument", verb)))
}
