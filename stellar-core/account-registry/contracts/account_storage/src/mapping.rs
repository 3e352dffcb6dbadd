//! Address-to-address map with enumeration.
//!
//! Entries live under `DataKey::Entry`, the key order under `DataKey::KeyAt`
//! slots `0..size`. Each entry remembers its slot so removal is a
//! swap-with-last and pop. Every mutating function updates entries, slots and
//! size together before returning.

use soroban_sdk::{Address, Env, Vec};

use crate::storage::{self, Entry};

pub fn contains(env: &Env, key: &Address) -> bool {
    storage::has_entry(env, key)
}

pub fn value_of(env: &Env, key: &Address) -> Option<Address> {
    storage::get_entry(env, key).map(|entry| entry.value)
}

pub fn len(env: &Env) -> u32 {
    storage::get_size(env)
}

/// Insert or overwrite `key`. Returns `true` if the key was not present.
pub fn insert(env: &Env, key: &Address, value: &Address) -> bool {
    if let Some(mut entry) = storage::get_entry(env, key) {
        entry.value = value.clone();
        storage::set_entry(env, key, &entry);
        return false;
    }

    let index = storage::get_size(env);
    storage::set_entry(
        env,
        key,
        &Entry {
            value: value.clone(),
            index,
        },
    );
    storage::set_key_at(env, index, key);
    storage::set_size(env, index + 1);
    true
}

/// Remove `key`, returning its value. Absent keys leave storage untouched.
pub fn remove(env: &Env, key: &Address) -> Option<Address> {
    let entry = storage::get_entry(env, key)?;
    let last = storage::get_size(env) - 1;

    if entry.index != last {
        let moved = storage::get_key_at(env, last).unwrap();
        let mut moved_entry = storage::get_entry(env, &moved).unwrap();
        moved_entry.index = entry.index;
        storage::set_entry(env, &moved, &moved_entry);
        storage::set_key_at(env, entry.index, &moved);
    }

    storage::remove_key_at(env, last);
    storage::remove_entry(env, key);
    storage::set_size(env, last);

    Some(entry.value)
}

pub fn keys(env: &Env) -> Vec<Address> {
    let mut keys = Vec::new(env);
    for i in 0..storage::get_size(env) {
        keys.push_back(storage::get_key_at(env, i).unwrap());
    }
    keys
}
