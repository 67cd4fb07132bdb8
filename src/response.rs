//! IRC numeric response codes recognised by this client.
//!
//! Servers report command results as three-digit numerics. This client
//! understands the closed set below; numerics outside it fail command
//! parsing and the line is dropped.

#![allow(non_camel_case_types)]

use std::str::FromStr;

/// IRC server response code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    // === Connection registration (001-099) ===
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO = 4,
    /// 005 - Server supported features (ISUPPORT)
    RPL_ISUPPORT = 5,

    // === Command replies (200-399) ===
    /// 315 - End of WHO
    RPL_ENDOFWHO = 315,
    /// 331 - No topic is set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 352 - WHO reply
    RPL_WHOREPLY = 352,
    /// 353 - NAMES reply
    RPL_NAMREPLY = 353,
    /// 354 - WHOX reply
    RPL_WHOSPCRPL = 354,
    /// 366 - End of NAMES
    RPL_ENDOFNAMES = 366,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,

    // === Error replies (400-599) ===
    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 482 - Channel operator privileges needed
    ERR_CHANOPRIVSNEEDED = 482,
}

impl Response {
    /// The numeric code for this response.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Look up a response by numeric code.
    pub fn from_code(code: u16) -> Option<Response> {
        Some(match code {
            1 => Response::RPL_WELCOME,
            2 => Response::RPL_YOURHOST,
            3 => Response::RPL_CREATED,
            4 => Response::RPL_MYINFO,
            5 => Response::RPL_ISUPPORT,
            315 => Response::RPL_ENDOFWHO,
            331 => Response::RPL_NOTOPIC,
            332 => Response::RPL_TOPIC,
            352 => Response::RPL_WHOREPLY,
            353 => Response::RPL_NAMREPLY,
            354 => Response::RPL_WHOSPCRPL,
            366 => Response::RPL_ENDOFNAMES,
            376 => Response::RPL_ENDOFMOTD,
            401 => Response::ERR_NOSUCHNICK,
            403 => Response::ERR_NOSUCHCHANNEL,
            432 => Response::ERR_ERRONEUSNICKNAME,
            482 => Response::ERR_CHANOPRIVSNEEDED,
            _ => return None,
        })
    }

    /// Check if this is an error response (4xx/5xx).
    #[inline]
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u16 = s.parse().map_err(|_| ParseResponseError::InvalidFormat)?;
        Response::from_code(code).ok_or(ParseResponseError::UnknownCode(code))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Error when parsing a response code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseResponseError {
    /// The string was not a valid number.
    InvalidFormat,
    /// The numeric code is not a recognised response.
    UnknownCode(u16),
}

impl std::fmt::Display for ParseResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid response code format"),
            Self::UnknownCode(code) => write!(f, "unknown response code: {}", code),
        }
    }
}

impl std::error::Error for ParseResponseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_code() {
        assert_eq!(Response::RPL_WELCOME.code(), 1);
        assert_eq!(Response::RPL_ENDOFMOTD.code(), 376);
        assert_eq!(Response::ERR_CHANOPRIVSNEEDED.code(), 482);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Response::from_code(332), Some(Response::RPL_TOPIC));
        assert_eq!(Response::from_code(401), Some(Response::ERR_NOSUCHNICK));
        assert_eq!(Response::from_code(999), None);
        // 433 is a real IRC numeric, but outside this client's set.
        assert_eq!(Response::from_code(433), None);
    }

    #[test]
    fn test_is_error() {
        assert!(!Response::RPL_WELCOME.is_error());
        assert!(!Response::RPL_TOPIC.is_error());
        assert!(Response::ERR_NOSUCHCHANNEL.is_error());
        assert!(Response::ERR_ERRONEUSNICKNAME.is_error());
    }

    #[test]
    fn test_parse() {
        assert_eq!("001".parse::<Response>().unwrap(), Response::RPL_WELCOME);
        assert_eq!("376".parse::<Response>().unwrap(), Response::RPL_ENDOFMOTD);
        assert_eq!(
            "999".parse::<Response>(),
            Err(ParseResponseError::UnknownCode(999))
        );
        assert_eq!(
            "abc".parse::<Response>(),
            Err(ParseResponseError::InvalidFormat)
        );
    }

    #[test]
    fn test_display_pads_to_three_digits() {
        assert_eq!(format!("{}", Response::RPL_WELCOME), "001");
        assert_eq!(format!("{}", Response::RPL_TOPIC), "332");
    }
}
