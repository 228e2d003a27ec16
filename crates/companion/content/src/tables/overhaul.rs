use companion_core::{
    AbilityKind::*, ClassAbilities, CompanionClass, CompanionClass::*, RuleSet,
};

use super::{BASE_MASTER as S, OVERHAUL_MARKER as R, item, unlock};

const G: &[CompanionClass] = &[Guard];
const K: &[CompanionClass] = &[Knight];
const W: &[CompanionClass] = &[Warlock];
const GK: &[CompanionClass] = &[Guard, Knight];
const KW: &[CompanionClass] = &[Knight, Warlock];
const GKW: &[CompanionClass] = &[Guard, Knight, Warlock];

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
            ClassAbilities {
                class: Warlock,
                abilities: vec![
                    OneHanded,
                    LightArmor,
                    Alteration,
                    Conjuration,
                    Destruction,
                    Restoration,
                    Enchanting,
                ],
            },
        ],
        unlocks: vec![
            // ================================================================
            // Block
            // ================================================================
            unlock(0x0BCCAE, S, Block, 0, G),
            unlock(0x058F68, S, Block, 15, G),
            unlock(0x079355, S, Block, 20, G),
            unlock(0x058F67, S, Block, 25, G),
            unlock(0x058F69, S, Block, 50, G),
            unlock(0x05F594, S, Block, 50, G),
            unlock(0x106253, S, Block, 75, G),
            unlock(0x058F66, S, Block, 75, G),
            unlock(0x058F6A, S, Block, 100, G),
            // ================================================================
            // One-handed
            // ================================================================
            unlock(0x0BABE4, S, OneHanded, 0, GKW),
            unlock(0x079343, S, OneHanded, 0, GKW),
            unlock(0x052D50, S, OneHanded, 20, GKW),
            unlock(0xAD399A, R, OneHanded, 25, GKW),
            unlock(0x03FFFA, S, OneHanded, 25, GK),
            unlock(0x05F592, S, OneHanded, 25, GK),
            unlock(0x05F56F, S, OneHanded, 25, GK),
            unlock(0x106256, S, OneHanded, 25, K),
            unlock(0xAD3999, R, OneHanded, 50, GKW),
            unlock(0x0C3678, S, OneHanded, 50, GK),
            unlock(0x0C1E92, S, OneHanded, 50, GK),
            unlock(0x0C1E90, S, OneHanded, 50, GK),
            unlock(0x03AF81, S, OneHanded, 50, GK),
            unlock(0x0CB406, S, OneHanded, 50, GK),
            unlock(0x106257, S, OneHanded, 50, K),
            unlock(0xAD3998, R, OneHanded, 75, GKW),
            unlock(0x0C3679, S, OneHanded, 75, GK),
            unlock(0x0C1E93, S, OneHanded, 75, GK),
            unlock(0x0C1E91, S, OneHanded, 75, GK),
            unlock(0x106258, S, OneHanded, 75, K),
            unlock(0x03AFA6, S, OneHanded, 100, GK),
            // ================================================================
            // Two-handed
            // ================================================================
            unlock(0x0BABE8, S, TwoHanded, 0, K),
            unlock(0x079346, S, TwoHanded, 0, K),
            unlock(0x052D51, S, TwoHanded, 20, K),
            unlock(0xADDFB0, R, TwoHanded, 25, K),
            unlock(0x0C5C05, S, TwoHanded, 25, K),
            unlock(0x03AF83, S, TwoHanded, 25, K),
            unlock(0x03AF84, S, TwoHanded, 25, K),
            unlock(0xADDFB1, R, TwoHanded, 50, K),
            unlock(0x0C5C06, S, TwoHanded, 50, K),
            unlock(0x0C1E94, S, TwoHanded, 50, K),
            unlock(0x0C1E96, S, TwoHanded, 50, K),
            unlock(0x0CB407, S, TwoHanded, 50, K),
            unlock(0x052D52, S, TwoHanded, 50, K),
            unlock(0xADDFB2, R, TwoHanded, 75, K),
            unlock(0x0C5C07, S, TwoHanded, 75, K),
            unlock(0x0C1E95, S, TwoHanded, 75, K),
            unlock(0x0C1E97, S, TwoHanded, 75, K),
            unlock(0x03AF9E, S, TwoHanded, 75, K),
            unlock(0x03AFA7, S, TwoHanded, 100, K),
            unlock(0x182F9B, R, TwoHanded, 100, K),
            // ================================================================
            // Heavy armor
            // ================================================================
            unlock(0x0BCD2A, S, HeavyArmor, 0, GK),
            unlock(0x07935E, S, HeavyArmor, 20, GK),
            unlock(0x058F6F, S, HeavyArmor, 25, GK),
            unlock(0x058F6C, S, HeavyArmor, 50, GK),
            unlock(0x107832, S, HeavyArmor, 75, GK),
            unlock(0x105F33, S, HeavyArmor, 100, GK),
            // ================================================================
            // Evasion (light armor)
            // ================================================================
            unlock(0x0BE123, S, LightArmor, 0, KW),
            unlock(0x079376, S, LightArmor, 20, KW),
            unlock(0x051B1B, S, LightArmor, 25, KW),
            unlock(0x18A66F, R, LightArmor, 30, W),
            unlock(0x051B1C, S, LightArmor, 50, KW),
            unlock(0x18F5A8, R, LightArmor, 50, KW),
            unlock(0x105F22, S, LightArmor, 75, KW),
            unlock(0x051B17, S, LightArmor, 75, KW),
            unlock(0x107831, S, LightArmor, 100, KW),
            // ================================================================
            // Alteration
            // ================================================================
            unlock(0x0D7999, S, Alteration, 25, W),
            unlock(0x053128, S, Alteration, 25, GKW),
            unlock(0x0581FC, S, Alteration, 50, W),
            unlock(0x053129, S, Alteration, 50, GKW),
            unlock(0x21792B, R, Alteration, 75, W),
            unlock(0x21792A, R, Alteration, 75, W),
            unlock(0x05312A, S, Alteration, 75, GKW),
            unlock(0x21792C, R, Alteration, 100, W),
            unlock(0x0581F7, S, Alteration, 100, GKW),
            // ================================================================
            // Conjuration
            // ================================================================
            unlock(0x105F30, S, Conjuration, 25, W),
            unlock(0xAD385A, R, Conjuration, 35, W),
            unlock(0x0CB419, S, Conjuration, 50, W),
            unlock(0x0CB41A, S, Conjuration, 75, W),
            // ================================================================
            // Destruction
            // ================================================================
            unlock(0x0581E7, S, Destruction, 25, W),
            unlock(0x0581EA, S, Destruction, 25, W),
            unlock(0x058200, S, Destruction, 25, W),
            unlock(0x10FCF8, S, Destruction, 50, W),
            unlock(0x10FCF9, S, Destruction, 50, W),
            unlock(0x10FCFA, S, Destruction, 50, W),
            unlock(0x0153D2, S, Destruction, 50, W),
            unlock(0x0F392E, S, Destruction, 75, W),
            unlock(0x0F3933, S, Destruction, 75, W),
            unlock(0x0F3F0E, S, Destruction, 75, W),
            unlock(0x179121, R, Destruction, 100, W),
            unlock(0x179123, R, Destruction, 100, W),
            unlock(0x179124, R, Destruction, 100, W),
            // ================================================================
            // Restoration
            // ================================================================
            unlock(0x0581F4, S, Restoration, 25, W),
            unlock(0x068BCC, S, Restoration, 75, W),
            // ================================================================
            // Enchanting
            // ================================================================
            unlock(0x0BEE97, S, Enchanting, 0, W),
            unlock(0x0C367C, S, Enchanting, 20, W),
            unlock(0x058F80, S, Enchanting, 25, W),
            unlock(0x058F7C, S, Enchanting, 25, W),
            unlock(0x058F81, S, Enchanting, 50, W),
            unlock(0x058F7E, S, Enchanting, 50, W),
            unlock(0x058F82, S, Enchanting, 75, W),
            unlock(0x058F7D, S, Enchanting, 75, W),
            unlock(0x058F7F, S, Enchanting, 100, W),
        ],
        items: vec![
            item(0x0204C5, S, Conjuration, 75.0, 100.0),
            item(0x012FCD, S, Destruction, 0.0, 74.0),
            item(0x02B96B, S, Destruction, 0.0, 74.0),
            item(0x02DD2A, S, Destruction, 0.0, 74.0),
            item(0x012FD0, S, Destruction, 25.0, 74.0),
            item(0x02B96C, S, Destruction, 25.0, 74.0),
            item(0x02DD29, S, Destruction, 25.0, 74.0),
            item(0x01C789, S, Destruction, 50.0, 100.0),
            item(0x045F9C, S, Destruction, 50.0, 100.0),
            item(0x045F9D, S, Destruction, 50.0, 100.0),
            item(0x10F7ED, S, Destruction, 75.0, 100.0),
            item(0x10F7EC, S, Destruction, 75.0, 100.0),
            item(0x10F7EE, S, Destruction, 75.0, 100.0),
            // Ward ranks III and IV overlap from 75 up.
            item(0x225F3B, R, Restoration, 0.0, 24.0),
            item(0x013018, S, Restoration, 25.0, 49.0),
            item(0x0211F1, S, Restoration, 50.0, 100.0),
            item(0x0211F0, S, Restoration, 75.0, 100.0),
        ],
    }
}
