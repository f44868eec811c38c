use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CliAction {
    Help,
    Version,
    Edit(Option<PathBuf>),
}

/// Parses everything after the program name.
pub(crate) fn parse_cmd_args<I>(args: I) -> Result<CliAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut file = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {}", flag));
            }
            _ => {
                if file.is_some() {
                    return Err("only one file can be opened at a time".to_string());
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }
    Ok(CliAction::Edit(file))
}
