#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod error;
mod events;
mod mapping;
mod storage;


pub use error::Error;

/// Registry of account address -> contract address, writable only by its owner.
#[contract]
pub struct AccountStorage;

#[contractimpl]
impl AccountStorage {
    /// Fix the owner for the lifetime of the contract
    pub fn __constructor(env: Env, owner: Address) {
        storage::set_owner(&env, &owner);
        storage::set_size(&env, 0);
        storage::extend_instance(&env);
    }

    // ========================================================================
    // Owner Operations
    // ========================================================================

    /// Store `value` against `key`, overwriting any previous value
    pub fn set(env: Env, caller: Address, key: Address, value: Address) -> Result<(), Error> {
        storage::extend_instance(&env);
        Self::require_owner(&env, &caller, Error::SetNotOwner)?;

        mapping::insert(&env, &key, &value);
        events::emit_set(&env, &key, &value);

        Ok(())
    }

    /// Remove `key`. Removing a key that is not present does nothing.
    pub fn remove(env: Env, caller: Address, key: Address) -> Result<(), Error> {
        storage::extend_instance(&env);
        Self::require_owner(&env, &caller, Error::RemoveNotOwner)?;

        if let Some(value) = mapping::remove(&env, &key) {
            events::emit_remove(&env, &key, &value);
        }

        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Value stored against `key`; `Error::NotFound` when absent
    pub fn get(env: Env, key: Address) -> Result<Address, Error> {
        storage::extend_instance(&env);
        mapping::value_of(&env, &key).ok_or(Error::NotFound)
    }

    pub fn has(env: Env, key: Address) -> bool {
        storage::extend_instance(&env);
        mapping::contains(&env, &key)
    }

    /// All stored keys. Order is stable between writes but removal may
    /// move the last key into the freed slot.
    pub fn list_keys(env: Env) -> Vec<Address> {
        storage::extend_instance(&env);
        mapping::keys(&env)
    }

    pub fn size(env: Env) -> u32 {
        storage::extend_instance(&env);
        mapping::len(&env)
    }

    pub fn owner(env: Env) -> Address {
        storage::extend_instance(&env);
        storage::get_owner(&env)
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn require_owner(env: &Env, caller: &Address, err: Error) -> Result<(), Error> {
        caller.require_auth();

        if *caller != storage::get_owner(env) {
            log!(env, "caller is not the owner", caller.clone());
            return Err(err);
        }

        Ok(())
    }
}
