use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const SET: Symbol = symbol_short!("set");
pub const REMOVE: Symbol = symbol_short!("remove");

/// Topics `(set, key)`, data: the stored value
pub fn emit_set(env: &Env, key: &Address, value: &Address) {
    env.events().publish((SET, key.clone()), value.clone());
}

/// Topics `(remove, key)`, data: the value that was removed
pub fn emit_remove(env: &Env, key: &Address, value: &Address) {
    env.events().publish((REMOVE, key.clone()), value.clone());
}
