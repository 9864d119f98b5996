use std::str::FromStr;

/// The sixteen Minecraft chat colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl ChatColor {
    const ALL: [ChatColor; 16] = [
        ChatColor::Black,
        ChatColor::DarkBlue,
        ChatColor::DarkGreen,
        ChatColor::DarkAqua,
        ChatColor::DarkRed,
        ChatColor::DarkPurple,
        ChatColor::Gold,
        ChatColor::Gray,
        ChatColor::DarkGray,
        ChatColor::Blue,
        ChatColor::Green,
        ChatColor::Aqua,
        ChatColor::Red,
        ChatColor::LightPurple,
        ChatColor::Yellow,
        ChatColor::White,
    ];

    /// Legacy formatting code, the character after `§`
    pub fn code(&self) -> char {
        match self {
            ChatColor::Black => '0',
            ChatColor::DarkBlue => '1',
            ChatColor::DarkGreen => '2',
            ChatColor::DarkAqua => '3',
            ChatColor::DarkRed => '4',
            ChatColor::DarkPurple => '5',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::DarkGray => '8',
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::LightPurple => 'd',
            ChatColor::Yellow => 'e',
            ChatColor::White => 'f',
        }
    }

    /// Name as used by the Hypixel API (`rankPlusColor`)
    pub fn name(&self) -> &'static str {
        match self {
            ChatColor::Black => "BLACK",
            ChatColor::DarkBlue => "DARK_BLUE",
            ChatColor::DarkGreen => "DARK_GREEN",
            ChatColor::DarkAqua => "DARK_AQUA",
            ChatColor::DarkRed => "DARK_RED",
            ChatColor::DarkPurple => "DARK_PURPLE",
            ChatColor::Gold => "GOLD",
            ChatColor::Gray => "GRAY",
            ChatColor::DarkGray => "DARK_GRAY",
            ChatColor::Blue => "BLUE",
            ChatColor::Green => "GREEN",
            ChatColor::Aqua => "AQUA",
            ChatColor::Red => "RED",
            ChatColor::LightPurple => "LIGHT_PURPLE",
            ChatColor::Yellow => "YELLOW",
            ChatColor::White => "WHITE",
        }
    }

    /// 24-bit ANSI foreground escape matching the in-game palette
    pub fn ansi(&self) -> &'static str {
        match self {
            ChatColor::Black => "\x1b[38;2;0;0;0m",
            ChatColor::DarkBlue => "\x1b[38;2;0;0;170m",
            ChatColor::DarkGreen => "\x1b[38;2;0;170;0m",
            ChatColor::DarkAqua => "\x1b[38;2;0;170;170m",
            ChatColor::DarkRed => "\x1b[38;2;170;0;0m",
            ChatColor::DarkPurple => "\x1b[38;2;170;0;170m",
            ChatColor::Gold => "\x1b[38;2;255;170;0m",
            ChatColor::Gray => "\x1b[38;2;170;170;170m",
            ChatColor::DarkGray => "\x1b[38;2;85;85;85m",
            ChatColor::Blue => "\x1b[38;2;85;85;255m",
            ChatColor::Green => "\x1b[38;2;85;255;85m",
            ChatColor::Aqua => "\x1b[38;2;85;255;255m",
            ChatColor::Red => "\x1b[38;2;255;85;85m",
            ChatColor::LightPurple => "\x1b[38;2;255;85;255m",
            ChatColor::Yellow => "\x1b[38;2;255;255;85m",
            ChatColor::White => "\x1b[38;2;255;255;255m",
        }
    }
}

impl FromStr for ChatColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChatColor::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_names() {
        assert_eq!("LIGHT_PURPLE".parse::<ChatColor>(), Ok(ChatColor::LightPurple));
        assert_eq!("DARK_GREEN".parse::<ChatColor>(), Ok(ChatColor::DarkGreen));
        assert!("light_purple".parse::<ChatColor>().is_err());
        assert!("RAINBOW".parse::<ChatColor>().is_err());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<char> = ChatColor::ALL.iter().map(|c| c.code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), 16);
    }
}
