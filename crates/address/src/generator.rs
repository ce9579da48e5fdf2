//! Contract address generators
//!
//! A generator computes the address assigned to a new contract instance from
//! inputs available before execution. Two strategies exist:
//!
//! | Generator | Key | Predictable |
//! |-----------|-----|-------------|
//! | `ClassicAddressGenerator` | `be_u64(code_id) \|\| be_u64(instance_id)` | no |
//! | `PredictableAddressGenerator` | `lp(checksum) \|\| lp(creator) \|\| lp(salt) \|\| lp(msg)` | yes |
//!
//! `lp(x)` is `x` prefixed with its big-endian u64 length. Both keys are
//! hashed with [`module_address`] under the `wasm` module.
//!
//! Generators never check whether an address is already taken; the base
//! keeper does that and fails with `DuplicateContract`.

use std::fmt;
use wasmgate_core::{
    validate_salt, AccountAddress, Checksum, CodeId, KeeperError, KeeperResult, MAX_ADDRESS_BYTES,
};

use crate::module::{length_prefixed, module_address, CONTRACT_ADDRESS_LEN, MODULE_NAME};

/// State a generator may draw on while a contract is being created
pub trait CreationContext {
    /// Next value of the chain-wide instance sequence
    ///
    /// Strictly increasing; the first value handed out is 1.
    fn next_instance_id(&mut self) -> u64;
}

/// Strategy producing the address of a new contract instance
pub trait AddressGenerator: fmt::Debug + Send + Sync {
    /// Compute the address for a contract instantiated from `code_id`
    fn generate(
        &self,
        ctx: &mut dyn CreationContext,
        code_id: CodeId,
        checksum: &Checksum,
    ) -> KeeperResult<AccountAddress>;
}

/// Sequence-based generator
///
/// Each call consumes one instance id, so addresses never repeat within a
/// chain and cannot be known before the instantiating transaction runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicAddressGenerator;

impl AddressGenerator for ClassicAddressGenerator {
    fn generate(
        &self,
        ctx: &mut dyn CreationContext,
        code_id: CodeId,
        _checksum: &Checksum,
    ) -> KeeperResult<AccountAddress> {
        let instance_id = ctx.next_instance_id();
        Ok(build_contract_address_classic(code_id, instance_id))
    }
}

/// Salt-based generator with addresses computable off-chain
///
/// The address depends on `(checksum, creator, salt)` and, when `fix_msg`
/// is set, on the instantiate message as well.
#[derive(Clone, PartialEq, Eq)]
pub struct PredictableAddressGenerator {
    creator: AccountAddress,
    salt: Vec<u8>,
    init_msg: Vec<u8>,
    fix_msg: bool,
}

impl PredictableAddressGenerator {
    /// Bind the caller-supplied inputs of a predictable instantiation
    pub fn new(
        creator: AccountAddress,
        salt: impl Into<Vec<u8>>,
        init_msg: impl Into<Vec<u8>>,
        fix_msg: bool,
    ) -> Self {
        Self {
            creator,
            salt: salt.into(),
            init_msg: init_msg.into(),
            fix_msg,
        }
    }

    /// The message bytes that enter the derivation
    fn derivation_msg(&self) -> &[u8] {
        if self.fix_msg {
            self.init_msg.as_slice()
        } else {
            &[]
        }
    }
}

impl fmt::Debug for PredictableAddressGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictableAddressGenerator")
            .field("creator", &self.creator.to_string())
            .field("salt_len", &self.salt.len())
            .field("fix_msg", &self.fix_msg)
            .finish()
    }
}

impl AddressGenerator for PredictableAddressGenerator {
    fn generate(
        &self,
        _ctx: &mut dyn CreationContext,
        _code_id: CodeId,
        checksum: &Checksum,
    ) -> KeeperResult<AccountAddress> {
        build_contract_address_predictable(
            checksum,
            &self.creator,
            &self.salt,
            self.derivation_msg(),
        )
    }
}

/// Address of the `instance_id`-th contract, instantiated from `code_id`
pub fn build_contract_address_classic(code_id: CodeId, instance_id: u64) -> AccountAddress {
    let mut key = [0u8; 16];
    key[..8].copy_from_slice(&code_id.to_be_bytes());
    key[8..].copy_from_slice(&instance_id.to_be_bytes());
    let hash = module_address(MODULE_NAME, &key);
    AccountAddress::new(&hash[..CONTRACT_ADDRESS_LEN])
}

/// Deterministic address for `(checksum, creator, salt, msg)`
///
/// Pass an empty `msg` to derive from `(checksum, creator, salt)` only.
///
/// # Errors
///
/// Returns `InvalidInput` if `creator` is empty or longer than 255 bytes,
/// or if `salt` is empty or longer than 64 bytes.
pub fn build_contract_address_predictable(
    checksum: &Checksum,
    creator: &AccountAddress,
    salt: &[u8],
    msg: &[u8],
) -> KeeperResult<AccountAddress> {
    if creator.is_empty() || creator.len() > MAX_ADDRESS_BYTES {
        return Err(KeeperError::invalid_input(format!(
            "creator address must be 1-{} bytes, got {}",
            MAX_ADDRESS_BYTES,
            creator.len()
        )));
    }
    validate_salt(salt)?;

    let mut key = Vec::with_capacity(32 + creator.len() + salt.len() + msg.len() + 4 * 8);
    key.extend(length_prefixed(checksum.as_bytes()));
    key.extend(length_prefixed(creator.as_bytes()));
    key.extend(length_prefixed(salt));
    key.extend(length_prefixed(msg));

    let hash = module_address(MODULE_NAME, &key);
    Ok(AccountAddress::new(&hash[..CONTRACT_ADDRESS_LEN]))
}
