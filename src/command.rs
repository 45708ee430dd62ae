//! Command parsing: raw input lines into structured requests.

use crate::error::CommandError;

/// Command verbs understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cd,
    Pwd,
    Mkdir,
    Ls,
    Rm,
    Mkfile,
    Write,
    Read,
    Mv,
    Find,
}

impl Action {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "cd" => Some(Self::Cd),
            "pwd" => Some(Self::Pwd),
            "mkdir" => Some(Self::Mkdir),
            "ls" => Some(Self::Ls),
            "rm" => Some(Self::Rm),
            "mkfile" => Some(Self::Mkfile),
            "write" => Some(Self::Write),
            "read" => Some(Self::Read),
            "mv" => Some(Self::Mv),
            "find" => Some(Self::Find),
            _ => None,
        }
    }
}

/// A parsed command: the verb plus whichever arguments the line carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub action: Action,
    pub src_path: Option<Vec<String>>,
    pub dest_path: Option<Vec<String>>,
    pub content: Option<String>,
    pub option: Option<String>,
}

/// Split a `/`-delimited path into segments. A leading empty segment encodes
/// an absolute path; a trailing empty segment (trailing slash) is dropped.
pub fn parse_path(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = path.split('/').map(str::to_string).collect();
    if segments.len() > 1 && segments.last().map(String::as_str) == Some("") {
        segments.pop();
    }
    segments
}

/// Parse one raw input line.
///
/// The first token is the verb. A quoted `"..."` span anywhere on the line is
/// the content argument; a `-x` token is the option. Unknown verbs and
/// missing arguments fail with a parse error.
pub fn parse(line: &str) -> Result<Request, CommandError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    let word = tokens[0];
    let action = Action::from_word(word)
        .ok_or_else(|| CommandError::Parse(format!("unknown command: {}", word)))?;

    let mut request = Request {
        action,
        src_path: None,
        dest_path: None,
        content: None,
        option: None,
    };
    if tokens.len() == 1 {
        return Ok(request);
    }

    if let Some(content) = quoted_span(line) {
        request.content = Some(content.to_string());
        request.src_path = Some(parse_path(tokens[1]));
        return Ok(request);
    }

    if tokens[1].starts_with('-') && tokens[1].len() >= 2 {
        request.option = Some(tokens[1].chars().skip(1).take(1).collect());
        let path = tokens
            .get(2)
            .ok_or_else(|| CommandError::Parse(format!("{} expects a path after the option", word)))?;
        request.src_path = Some(parse_path(path));
        return Ok(request);
    }

    request.src_path = Some(parse_path(tokens[1]));
    if let Some(dest) = tokens.get(2) {
        request.dest_path = Some(parse_path(dest));
    }
    Ok(request)
}

/// First `"..."` span on the line, quotes stripped.
fn quoted_span(line: &str) -> Option<&str> {
    let start = line.find('"')?;
    let rest = &line[start + 1..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}
