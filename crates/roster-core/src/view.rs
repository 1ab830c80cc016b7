use serde::{Deserialize, Serialize};

/// Active comparator for the bot lists. Process-wide: one mode applies to
/// both partitions and the canonical list.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListOrder {
    #[default]
    ByName,
    ByDate,
}

impl std::fmt::Display for ListOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByName => write!(f, "by_name"),
            Self::ByDate => write!(f, "by_date"),
        }
    }
}

impl std::str::FromStr for ListOrder {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by_name" => Ok(Self::ByName),
            "by_date" => Ok(Self::ByDate),
            other => Err(format!("unknown list order: {other}")),
        }
    }
}

/// Display mode requested by the presentation layer. Anything that is not
/// `List` maps to a `false` list-mode emission.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    #[default]
    List,
    Card,
}

impl std::fmt::Display for ListMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Card => write!(f, "card"),
        }
    }
}

impl std::str::FromStr for ListMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "card" => Ok(Self::Card),
            other => Err(format!("unknown list mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_order_display_parse_roundtrip() {
        for order in [ListOrder::ByName, ListOrder::ByDate] {
            let s = order.to_string();
            let parsed: ListOrder = s.parse().unwrap();
            assert_eq!(order, parsed);
        }
    }

    #[test]
    fn list_mode_display_parse_roundtrip() {
        for mode in [ListMode::List, ListMode::Card] {
            let s = mode.to_string();
            let parsed: ListMode = s.parse().unwrap();
            assert_eq!(mode, parsed);
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(ListOrder::default(), ListOrder::ByName);
        assert_eq!(ListMode::default(), ListMode::List);
    }

    #[test]
    fn unknown_strings_rejected() {
        assert!("by_size".parse::<ListOrder>().is_err());
        assert!("grid".parse::<ListMode>().is_err());
    }
}
