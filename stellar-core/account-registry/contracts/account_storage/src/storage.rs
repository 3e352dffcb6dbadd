use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Size,
    /// Key address -> [`Entry`]
    Entry(Address),
    /// Slot in the key order -> key address
    KeyAt(u32),
}

/// Value stored against a key, along with the key's slot in the key order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub value: Address,
    pub index: u32,
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_size(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Size).unwrap_or(0)
}

pub fn set_size(env: &Env, size: u32) {
    env.storage().instance().set(&DataKey::Size, &size);
}

/// Extend an entry together with the key-order slot it points at, so the
/// two never expire apart.
fn extend_entry(env: &Env, key: &DataKey, index: u32) {
    extend_persistent(env, key);

    let slot = DataKey::KeyAt(index);
    if env.storage().persistent().has(&slot) {
        extend_persistent(env, &slot);
    }
}

pub fn get_entry(env: &Env, key: &Address) -> Option<Entry> {
    let key = DataKey::Entry(key.clone());
    let entry: Option<Entry> = env.storage().persistent().get(&key);
    if let Some(entry) = &entry {
        extend_entry(env, &key, entry.index);
    }
    entry
}

pub fn set_entry(env: &Env, key: &Address, entry: &Entry) {
    let key = DataKey::Entry(key.clone());
    env.storage().persistent().set(&key, entry);
    extend_entry(env, &key, entry.index);
}

pub fn has_entry(env: &Env, key: &Address) -> bool {
    get_entry(env, key).is_some()
}

pub fn remove_entry(env: &Env, key: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Entry(key.clone()));
}

pub fn get_key_at(env: &Env, index: u32) -> Option<Address> {
    let key = DataKey::KeyAt(index);
    let addr = env.storage().persistent().get(&key);
    if addr.is_some() {
        extend_persistent(env, &key);
    }
    addr
}

pub fn set_key_at(env: &Env, index: u32, addr: &Address) {
    let key = DataKey::KeyAt(index);
    env.storage().persistent().set(&key, addr);
    extend_persistent(env, &key);
}

pub fn remove_key_at(env: &Env, index: u32) {
    env.storage().persistent().remove(&DataKey::KeyAt(index));
}
