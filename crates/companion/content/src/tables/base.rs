use companion_core::{
    AbilityKind::*, ClassAbilities, CompanionClass, CompanionClass::*, RuleSet,
};

use super::{BASE_MASTER as S, unlock};

const G: &[CompanionClass] = &[Guard];
const K: &[CompanionClass] = &[Knight];
const GK: &[CompanionClass] = &[Guard, Knight];

pub(super) fn rules() -> RuleSet {
    RuleSet {
        abilities: vec![
            ClassAbilities {
                class: Guard,
                abilities: vec![Block, OneHanded, HeavyArmor, Alteration],
            },
            ClassAbilities {
                class: Knight,
                abilities: vec![OneHanded, TwoHanded, HeavyArmor, LightArmor, Alteration],
            },
        ],
        unlocks: vec![
            // ================================================================
            // Block
            // ================================================================
            unlock(0x0BCCAE, S, Block, 0, G),
            unlock(0x079355, S, Block, 20, G),
            unlock(0x0D8C33, S, Block, 30, G),
            unlock(0x058F68, S, Block, 30, G),
            unlock(0x058F67, S, Block, 30, G),
            unlock(0x079356, S, Block, 40, G),
            unlock(0x058F69, S, Block, 50, G),
            unlock(0x05F594, S, Block, 50, G),
            unlock(0x079357, S, Block, 60, G),
            unlock(0x106253, S, Block, 70, G),
            unlock(0x058F66, S, Block, 70, G),
            unlock(0x079358, S, Block, 80, G),
            unlock(0x058F6A, S, Block, 100, G),
            // ================================================================
            // One-handed
            // ================================================================
            unlock(0x0BABE4, S, OneHanded, 0, GK),
            unlock(0x079343, S, OneHanded, 20, GK),
            unlock(0x052D50, S, OneHanded, 20, GK),
            unlock(0x106256, S, OneHanded, 30, K),
            unlock(0x05F56F, S, OneHanded, 30, GK),
            unlock(0x05F592, S, OneHanded, 30, GK),
            unlock(0x03FFFA, S, OneHanded, 30, GK),
            unlock(0x079342, S, OneHanded, 40, GK),
            unlock(0x106257, S, OneHanded, 50, K),
            unlock(0x0CB406, S, OneHanded, 50, GK),
            unlock(0x03AF81, S, OneHanded, 50, GK),
            unlock(0x079344, S, OneHanded, 60, GK),
            unlock(0x0C1E90, S, OneHanded, 60, GK),
            unlock(0x0C1E92, S, OneHanded, 60, GK),
            unlock(0x0C3678, S, OneHanded, 60, GK),
            unlock(0x106258, S, OneHanded, 70, K),
            unlock(0x079345, S, OneHanded, 80, GK),
            unlock(0x0C1E91, S, OneHanded, 90, GK),
            unlock(0x0C1E93, S, OneHanded, 90, GK),
            unlock(0x0C3679, S, OneHanded, 90, GK),
            unlock(0x03AFA6, S, OneHanded, 100, GK),
            // ================================================================
            // Two-handed
            // ================================================================
            unlock(0x0BABE8, S, TwoHanded, 0, K),
            unlock(0x079346, S, TwoHanded, 20, K),
            unlock(0x052D51, S, TwoHanded, 20, K),
            unlock(0x03AF83, S, TwoHanded, 30, K),
            unlock(0x0C5C05, S, TwoHanded, 30, K),
            unlock(0x03AF84, S, TwoHanded, 30, K),
            unlock(0x079347, S, TwoHanded, 40, K),
            unlock(0x052D52, S, TwoHanded, 50, K),
            unlock(0x0CB407, S, TwoHanded, 50, K),
            unlock(0x079348, S, TwoHanded, 60, K),
            unlock(0x0C1E94, S, TwoHanded, 60, K),
            unlock(0x0C5C06, S, TwoHanded, 60, K),
            unlock(0x0C1E96, S, TwoHanded, 60, K),
            unlock(0x03AF9E, S, TwoHanded, 70, K),
            unlock(0x079349, S, TwoHanded, 80, K),
            unlock(0x0C1E95, S, TwoHanded, 90, K),
            unlock(0x0C5C07, S, TwoHanded, 90, K),
            unlock(0x0C1E97, S, TwoHanded, 90, K),
            unlock(0x03AFA7, S, TwoHanded, 100, K),
            // ================================================================
            // Heavy armor
            // ================================================================
            unlock(0x0BCD2A, S, HeavyArmor, 0, GK),
            unlock(0x07935E, S, HeavyArmor, 20, GK),
            unlock(0x058F6E, S, HeavyArmor, 30, GK),
            unlock(0x058F6F, S, HeavyArmor, 30, GK),
            unlock(0x079361, S, HeavyArmor, 40, GK),
            unlock(0x0BCD2B, S, HeavyArmor, 50, GK),
            unlock(0x058F6C, S, HeavyArmor, 50, GK),
            unlock(0x079362, S, HeavyArmor, 60, GK),
            unlock(0x058F6D, S, HeavyArmor, 70, GK),
            unlock(0x107832, S, HeavyArmor, 70, GK),
            unlock(0x079374, S, HeavyArmor, 80, GK),
            unlock(0x105F33, S, HeavyArmor, 100, GK),
            // ================================================================
            // Light armor
            // ================================================================
            unlock(0x0BE123, S, LightArmor, 0, K),
            unlock(0x079376, S, LightArmor, 20, K),
            unlock(0x051B1B, S, LightArmor, 30, K),
            unlock(0x079389, S, LightArmor, 40, K),
            unlock(0x051B1C, S, LightArmor, 50, K),
            unlock(0x079391, S, LightArmor, 60, K),
            unlock(0x105F22, S, LightArmor, 60, K),
            unlock(0x051B17, S, LightArmor, 70, K),
            unlock(0x079392, S, LightArmor, 80, K),
            unlock(0x107831, S, LightArmor, 100, K),
            // ================================================================
            // Alteration
            // ================================================================
            unlock(0x053128, S, Alteration, 30, GK),
            unlock(0x053129, S, Alteration, 50, GK),
            unlock(0x05312A, S, Alteration, 70, GK),
            unlock(0x0581F7, S, Alteration, 100, GK),
        ],
        items: Vec::new(),
    }
}
