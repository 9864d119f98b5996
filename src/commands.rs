use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::types::BedwarsMode;

static USERNAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{1,16}$").unwrap());

/// A console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/bw <player> [mode]`
    Stats {
        username: String,
        mode: Option<BedwarsMode>,
    },
    SetApiKey(String),
    SetMyNick(String),
    SetMode(BedwarsMode),
    SetBedwarsLove(bool),
    SetBedwarsLoveUrl(String),
    ShowSettings,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: /bw <player> [overall|solo|doubles|threes|fours]")]
    StatsUsage,

    #[error("Usage: /bwm settings <apikey|mynick|mode|bedwarslove|bedwarsloveurl> [value]")]
    SettingsUsage,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Unknown command: {0}")]
    Unknown(String),
}

fn parse_toggle(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "enable" | "yes" => Some(true),
        "off" | "false" | "disable" | "no" => Some(false),
        _ => None,
    }
}

fn parse_mode(value: &str) -> Result<BedwarsMode, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::UnknownMode(value.to_string()))
}

fn parse_settings(args: &[&str]) -> Result<Command, CommandError> {
    let (setting, value) = match args {
        [] => return Ok(Command::ShowSettings),
        [setting] => (setting.to_lowercase(), None),
        [setting, value] => (setting.to_lowercase(), Some(*value)),
        _ => return Err(CommandError::SettingsUsage),
    };

    match (setting.as_str(), value) {
        ("apikey", Some(key)) => Ok(Command::SetApiKey(key.to_string())),
        // No value clears the nick
        ("mynick", value) => {
            let nick = value.unwrap_or_default();
            if !nick.is_empty() && !USERNAME.is_match(nick) {
                return Err(CommandError::InvalidUsername(nick.to_string()));
            }
            Ok(Command::SetMyNick(nick.to_string()))
        }
        ("mode", Some(mode)) => Ok(Command::SetMode(parse_mode(mode)?)),
        ("bedwarslove", Some(toggle)) => parse_toggle(toggle)
            .map(Command::SetBedwarsLove)
            .ok_or(CommandError::SettingsUsage),
        ("bedwarsloveurl", Some(url)) => Ok(Command::SetBedwarsLoveUrl(url.to_string())),
        _ => Err(CommandError::SettingsUsage),
    }
}

/// Parses one line of console input
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((head, args)) = parts.split_first() else {
        return Err(CommandError::Unknown(String::new()));
    };

    match head.to_lowercase().as_str() {
        "/bw" | "/bws" | "/stats" => match args {
            [username] | [username, _] if !USERNAME.is_match(username) => {
                Err(CommandError::InvalidUsername(username.to_string()))
            }
            [username] => Ok(Command::Stats {
                username: username.to_string(),
                mode: None,
            }),
            [username, mode] => Ok(Command::Stats {
                username: username.to_string(),
                mode: Some(parse_mode(mode)?),
            }),
            _ => Err(CommandError::StatsUsage),
        },
        "/bwm" => match args.split_first() {
            Some((sub, rest)) if sub.eq_ignore_ascii_case("settings") => parse_settings(rest),
            Some((sub, _)) if sub.eq_ignore_ascii_case("help") => Ok(Command::Help),
            None => Ok(Command::Help),
            _ => Err(CommandError::SettingsUsage),
        },
        "/help" => Ok(Command::Help),
        _ => Err(CommandError::Unknown(input.trim().to_string())),
    }
}
