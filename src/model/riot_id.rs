use std::{fmt, str::FromStr};

use crate::error::AppError;

/// A player handle of the form `name#tag`.
///
/// The parts are kept exactly as the user typed them; encoding for the account
/// lookup url happens in the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RiotId {
    pub name: String,
    pub tag: String,
}

impl FromStr for RiotId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, tag) = s
            .split_once('#')
            .ok_or_else(|| AppError::Validation(format!("Invalid riotId '{}', expected name#tag", s)))?;

        if name.is_empty() || tag.is_empty() || tag.contains('#') {
            return Err(AppError::Validation(format!(
                "Invalid riotId '{}', expected name#tag",
                s
            )));
        }

        Ok(Self {
            name: name.to_string(),
            tag: tag.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}

/// User facing server label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Server {
    Euw,
    Eune,
}

impl Server {
    /// Provider platform code used as the host prefix of platform endpoints.
    pub fn platform_code(self) -> &'static str {
        match self {
            Server::Euw => "euw1",
            Server::Eune => "eun1",
        }
    }
}

impl FromStr for Server {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euw" => Ok(Server::Euw),
            "eune" => Ok(Server::Eune),
            _ => Err(AppError::Validation("Invalid server".into())),
        }
    }
}

/// Validates the raw `riotId` and `server` inputs of a rank request.
///
/// The server label is checked first so that an unknown server never reaches the
/// handle parsing or the network.
pub fn parse_rank_target(riot_id: &str, server: &str) -> Result<(RiotId, Server), AppError> {
    let server = server.parse::<Server>()?;
    let riot_id = riot_id.parse::<RiotId>()?;

    Ok((riot_id, server))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_separator() {
        let id: RiotId = "HALABYA111#111".parse().unwrap();
        assert_eq!(id.name, "HALABYA111");
        assert_eq!(id.tag, "111");
    }

    #[test]
    fn keeps_parts_unencoded() {
        let id: RiotId = "Señor Ñ#EUW 1".parse().unwrap();
        assert_eq!(id.name, "Señor Ñ");
        assert_eq!(id.tag, "EUW 1");
        assert_eq!(id.to_string(), "Señor Ñ#EUW 1");
    }

    #[test]
    fn rejects_malformed_handles() {
        for raw in ["", "name", "#tag", "name#", "#", "a#b#c"] {
            let err = raw.parse::<RiotId>().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{raw:?} -> {err:?}");
        }
    }

    #[test]
    fn maps_known_servers() {
        assert_eq!("euw".parse::<Server>().unwrap().platform_code(), "euw1");
        assert_eq!("eune".parse::<Server>().unwrap().platform_code(), "eun1");
    }

    #[test]
    fn rejects_unknown_servers() {
        for raw in ["", "na", "EUW", "euw1", " euw"] {
            match raw.parse::<Server>() {
                Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid server"),
                other => panic!("{raw:?} -> {other:?}"),
            }
        }
    }

    #[test]
    fn server_is_checked_before_handle() {
        match parse_rank_target("not-a-handle", "kr") {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid server"),
            other => panic!("unexpected {other:?}"),
        }

        let (id, server) = parse_rank_target("X#1", "eune").unwrap();
        assert_eq!(id, RiotId { name: "X".into(), tag: "1".into() });
        assert_eq!(server, Server::Eune);
    }
}
