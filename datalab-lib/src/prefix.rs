use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::Error;

/// Short code identifying a campaign family. Plan names are built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter)]
pub enum Prefix {
    #[strum(serialize = "BOG")]
    Bog,
    #[strum(serialize = "MT")]
    Mt,
    #[strum(serialize = "M")]
    M,
    #[strum(serialize = "LTE")]
    Lte,
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Prefix::iter()
            .find(|p| p.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPrefix(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let codes: Vec<String> = Prefix::iter().map(|p| p.to_string()).collect();
        assert_eq!(codes, ["BOG", "MT", "M", "LTE"]);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("lte".parse::<Prefix>().unwrap(), Prefix::Lte);
        assert_eq!(" Bog ".parse::<Prefix>().unwrap(), Prefix::Bog);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "LTH".parse::<Prefix>(),
            Err(Error::UnknownPrefix(code)) if code == "LTH"
        ));
    }
}
