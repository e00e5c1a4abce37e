//! # Ownable
//!
//! Owner lives under a single key as its `0x` string. The zero address,
//! an empty value and an absent key all mean "no owner"; once renounced,
//! owner-gated calls fail for everyone.

use crate::domain::errors::OwnableError;
use crate::domain::events::{OwnershipTransferred, OWNERSHIP_TRANSFERRED};
use crate::domain::initializable::{InitError, Initializable};
use crate::ports::inbound::OwnableApi;
use shared_types::{is_empty_address, Address, AddressError, TransactionContext, WorldState};
use tracing::{info, warn};

pub const OWNER_KEY: &str = "owner~account";
pub const OWNABLE_INITIALIZED_KEY: &str = "owner~initialized";

#[derive(Clone, Debug)]
pub struct Ownable {
    initializable: Initializable,
    owner_key: String,
}

impl Default for Ownable {
    fn default() -> Self {
        Self::new(OWNER_KEY, OWNABLE_INITIALIZED_KEY)
    }
}

impl Ownable {
    pub fn new(owner_key: impl Into<String>, initialized_key: impl Into<String>) -> Self {
        Self {
            initializable: Initializable::new(initialized_key),
            owner_key: owner_key.into(),
        }
    }

    fn write_owner(
        &self,
        ctx: &mut TransactionContext<'_>,
        previous_owner: Address,
        new_owner: Address,
    ) -> Result<(), OwnableError> {
        ctx.put_state(&self.owner_key, new_owner.to_string().into_bytes())?;
        ctx.emit_event(
            OWNERSHIP_TRANSFERRED,
            &OwnershipTransferred {
                previous_owner,
                new_owner,
            },
        )?;
        info!(previous = %previous_owner, new = %new_owner, "ownership transferred");
        Ok(())
    }
}

impl OwnableApi for Ownable {
    fn initialize(&self, ctx: &mut TransactionContext<'_>) -> Result<(), OwnableError> {
        let operator = ctx.operator();
        if operator.is_zero() {
            return Err(AddressError::NullAddress.into());
        }

        self.initializable
            .try_initialize(ctx.state())
            .map_err(|e| match e {
                InitError::AlreadyInitialized => OwnableError::AlreadyInitialized,
                InitError::State(inner) => OwnableError::State(inner),
            })?;

        self.write_owner(ctx, Address::ZERO, operator)
    }

    fn owner(&self, state: &dyn WorldState) -> Result<Address, OwnableError> {
        let Some(raw) = state.get_state(&self.owner_key)? else {
            return Ok(Address::ZERO);
        };
        let stored = std::str::from_utf8(&raw)
            .map_err(|_| OwnableError::Corrupted("owner is not utf-8".into()))?;
        if is_empty_address(stored) {
            return Ok(Address::ZERO);
        }
        Address::decode(stored).map_err(|e| OwnableError::Corrupted(e.to_string()))
    }

    fn only_owner(&self, ctx: &TransactionContext<'_>) -> Result<Address, OwnableError> {
        let owner = self.owner(ctx.state())?;
        let caller = ctx.operator();
        if owner.is_zero() || owner != caller {
            warn!(caller = %caller, owner = %owner, "owner check failed");
            return Err(OwnableError::NotOwner { caller });
        }
        Ok(owner)
    }

    fn transfer_ownership(
        &self,
        ctx: &mut TransactionContext<'_>,
        new_owner: &str,
    ) -> Result<(), OwnableError> {
        let new_owner = Address::parse(new_owner)?;
        let previous = self.only_owner(ctx)?;
        self.write_owner(ctx, previous, new_owner)
    }

    fn renounce_ownership(&self, ctx: &mut TransactionContext<'_>) -> Result<(), OwnableError> {
        let previous = self.only_owner(ctx)?;
        self.write_owner(ctx, previous, Address::ZERO)
    }
}
