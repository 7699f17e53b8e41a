//! Persisted design preference (page-reference placement variant).

use std::fmt;
use std::str::FromStr;

use dioxus::logger::tracing::warn;

use crate::error::{Error, Result};

pub const DESIGN_STORAGE_KEY: &str = "blt-design-choice";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DesignChoice {
    Inline,
    AbsBottom,
    FlexBottom,
    #[default]
    GridBottom,
    Offset,
    Hidden,
}

impl DesignChoice {
    pub const ALL: [DesignChoice; 6] = [
        DesignChoice::Inline,
        DesignChoice::AbsBottom,
        DesignChoice::FlexBottom,
        DesignChoice::GridBottom,
        DesignChoice::Offset,
        DesignChoice::Hidden,
    ];

    /// Stored value and CSS class on the newspaper root.
    pub fn as_str(self) -> &'static str {
        match self {
            DesignChoice::Inline => "sidref-inline",
            DesignChoice::AbsBottom => "sidref-absbotten",
            DesignChoice::FlexBottom => "sidref-flexbotten",
            DesignChoice::GridBottom => "sidref-gridbotten",
            DesignChoice::Offset => "sidref-offset",
            DesignChoice::Hidden => "sidref-dold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DesignChoice::Inline => "Sidref i texten",
            DesignChoice::AbsBottom => "Sidref längst ner",
            DesignChoice::FlexBottom => "Sidref nedtryckt",
            DesignChoice::GridBottom => "Sidref i rutnät",
            DesignChoice::Offset => "Sidref förskjuten",
            DesignChoice::Hidden => "Dold sidref",
        }
    }
}

impl fmt::Display for DesignChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignChoice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DesignChoice::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(())
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| Error::Storage("no window".into()))?
        .local_storage()
        .map_err(|e| Error::Storage(format!("{e:?}")))?
        .ok_or_else(|| Error::Storage("localStorage disabled".into()))
}

/// Stored choice, or the default when nothing (or garbage) is stored.
pub fn load_design() -> DesignChoice {
    let stored = local_storage().and_then(|storage| {
        storage
            .get_item(DESIGN_STORAGE_KEY)
            .map_err(|e| Error::Storage(format!("{e:?}")))
    });
    match stored {
        Ok(Some(value)) => value.parse().unwrap_or_default(),
        Ok(None) => DesignChoice::default(),
        Err(e) => {
            warn!(error = %e, "design preference not readable");
            DesignChoice::default()
        }
    }
}

pub fn store_design(choice: DesignChoice) -> Result<()> {
    local_storage()?
        .set_item(DESIGN_STORAGE_KEY, choice.as_str())
        .map_err(|e| Error::Storage(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!("sidref-dold".parse(), Ok(DesignChoice::Hidden));
        assert_eq!("blt-original".parse::<DesignChoice>(), Err(()));
    }

    #[test]
    fn default_is_grid_bottom() {
        assert_eq!(DesignChoice::default().as_str(), "sidref-gridbotten");
    }
}
