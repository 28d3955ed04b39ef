use yewdux::prelude::*;

const APPEARANCE_KEY: &str = "manager-appearance";

/// Presentation of the assignment manager. Both layouts share the same
/// behaviour; only the classes differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagerAppearance {
    #[default]
    Card,
    Plain,
}

impl ManagerAppearance {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Plain => "plain",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "plain" => Self::Plain,
            _ => Self::Card,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Card => Self::Plain,
            Self::Plain => Self::Card,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card layout",
            Self::Plain => "Plain layout",
        }
    }
}

/// UI preferences shared across pages. Server data is never cached here;
/// each page fetches its own.
#[derive(Clone, PartialEq, Store)]
pub struct State {
    pub appearance: ManagerAppearance,
}

impl Default for State {
    fn default() -> Self {
        Self {
            appearance: stored_appearance(),
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn stored_appearance() -> ManagerAppearance {
    local_storage()
        .and_then(|storage| storage.get_item(APPEARANCE_KEY).ok().flatten())
        .map(|value| ManagerAppearance::from_key(&value))
        .unwrap_or_default()
}

pub fn store_appearance(appearance: ManagerAppearance) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(APPEARANCE_KEY, appearance.key()) {
            tracing::warn!("Failed to store appearance preference: {e:?}");
        }
    }
}
