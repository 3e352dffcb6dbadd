use soroban_sdk::contracterror;

/// Codes map to [`Error::reason`]: 1 set by non-owner, 2 remove by non-owner, 3 key not found.
#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    SetNotOwner = 1,
    RemoveNotOwner = 2,
    NotFound = 3,
}

impl Error {
    /// Human-readable reason, stable across releases.
    pub const fn reason(&self) -> &'static str {
        match self {
            Error::SetNotOwner => "AccountStorage.set: Message sender not an owner",
            Error::RemoveNotOwner => "AccountStorage.remove: Message sender not an owner",
            Error::NotFound => "AccountStorage.get: Key not found",
        }
    }

    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Error::SetNotOwner | Error::RemoveNotOwner)
    }
}
