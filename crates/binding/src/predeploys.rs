//! Addresses the bound contracts live at on every OP Stack chain.

use alloy_primitives::{address, Address};

/// `GasPriceOracle` predeploy.
pub const GAS_PRICE_ORACLE: Address = address!("0x420000000000000000000000000000000000000F");

/// `SequencerFeeVault` predeploy.
pub const SEQUENCER_FEE_VAULT: Address = address!("0x4200000000000000000000000000000000000011");

/// `L1Block` predeploy.
pub const L1_BLOCK: Address = address!("0x4200000000000000000000000000000000000015");

/// `L2ToL1MessagePasser` predeploy.
pub const L2_TO_L1_MESSAGE_PASSER: Address =
    address!("0x4200000000000000000000000000000000000016");

/// `BaseFeeVault` predeploy.
pub const BASE_FEE_VAULT: Address = address!("0x4200000000000000000000000000000000000019");

/// `L1FeeVault` predeploy.
pub const L1_FEE_VAULT: Address = address!("0x420000000000000000000000000000000000001A");

/// `L2ToL2CrossDomainMessenger` predeploy.
pub const L2_TO_L2_CROSS_DOMAIN_MESSENGER: Address =
    address!("0x4200000000000000000000000000000000000023");

/// `Multicall3`, deployed at the same address on most EVM chains.
pub const MULTICALL3: Address = address!("0xcA11bde05977b3631167028862bE2a173976CA11");

/// Predeploy address of the contract called `name`, if it has one.
pub fn by_name(name: &str) -> Option<Address> {
    Some(match name {
        "GasPriceOracle" => GAS_PRICE_ORACLE,
        "SequencerFeeVault" => SEQUENCER_FEE_VAULT,
        "L1Block" => L1_BLOCK,
        "L2ToL1MessagePasser" => L2_TO_L1_MESSAGE_PASSER,
        "BaseFeeVault" => BASE_FEE_VAULT,
        "L1FeeVault" => L1_FEE_VAULT,
        "L2ToL2CrossDomainMessenger" => L2_TO_L2_CROSS_DOMAIN_MESSENGER,
        "Multicall3" => MULTICALL3,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("L1Block"), Some(L1_BLOCK));
        assert_eq!(by_name("DelayedVetoable"), None);
        assert_eq!(
            L2_TO_L1_MESSAGE_PASSER,
            "0x4200000000000000000000000000000000000016".parse::<Address>().unwrap()
        );
    }
}
