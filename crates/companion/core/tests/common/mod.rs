#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use companion_core::{
    AbilityKind, ActorHost, ActorId, AssetSource, CatalogSource, ClassAbilities, ClassRefs, CompanionClass, FormId, FormKind, FormRecord, FormRef, HostError, ItemEntry,
    PackageRefs, RuleSet, UnlockEntry,
};

pub const PLUGIN: &str = "Trinity.esp";
pub const OVERHAUL: &str = "Overhaul.esp";
pub const BASE: &str = "Base.esm";

pub const PLAYER: ActorId = ActorId(0x14);
pub const GUARD_ACTOR: ActorId = ActorId(0x100);
pub const WARLOCK_ACTOR: ActorId = ActorId(0x300);

/// Asset ids are `source index << 24 | local id`.
pub fn id_of(form: &FormRef) -> FormId {
    let index = match form.source.as_str() {
        BASE => 0x00,
        OVERHAUL => 0x01,
        _ => 0x02,
    };
    FormId(index << 24 | form.local_id)
}

#[derive(Default)]
pub struct MemoryAssets {
    records: HashMap<FormRef, FormRecord>,
    sources: HashSet<String>,
}

impl MemoryAssets {
    pub fn with_source(mut self, file: &str) -> Self {
        self.sources.insert(file.to_string());
        self
    }

    pub fn insert(&mut self, form: &FormRef, kind: FormKind, name: &str) {
        self.records
            .insert(form.clone(), FormRecord::new(id_of(form), kind, name));
    }

    pub fn remove(&mut self, form: &FormRef) {
        self.records.remove(form);
    }

    /// Registers every reference in `source` with the kind the catalog expects.
    pub fn covering(source: &CatalogSource) -> Self {
        let mut assets = Self::default().with_source(BASE).with_source(PLUGIN);
        for class in [&source.classes.guard, &source.classes.knight, &source.classes.warlock] {
            assets.insert(class, FormKind::Npc, "companion");
        }
        let packages = &source.packages;
        for form in [&packages.heal, &packages.heal_guard, &packages.heal_knight, &packages.heal_self] {
            assets.insert(form, FormKind::Package, "package");
        }
        for rules in [&source.base, &source.overhaul] {
            for unlock in &rules.unlocks {
                assets.insert(&unlock.form, FormKind::Perk, &format!("perk {:X}", unlock.form.local_id));
            }
            for item in &rules.items {
                assets.insert(&item.form, FormKind::Spell, &format!("spell {:X}", item.form.local_id));
            }
        }
        assets
    }
}

impl AssetSource for MemoryAssets {
    fn lookup(&self, form: &FormRef) -> Option<FormRecord> {
        if !self.sources.contains(&form.source) {
            return None;
        }
        self.records.get(form).cloned()
    }

    fn has_source(&self, file: &str) -> bool {
        self.sources.contains(file)
    }
}

pub fn unlock(local_id: u32, ability: AbilityKind, gate: u8, holders: &[CompanionClass]) -> UnlockEntry {
    UnlockEntry {
        form: FormRef::new(local_id, BASE),
        ability,
        gate,
        holders: holders.to_vec(),
    }
}

pub fn item(local_id: u32, ability: AbilityKind, min: f32, max: f32) -> ItemEntry {
    ItemEntry {
        form: FormRef::new(local_id, BASE),
        ability,
        min,
        max,
    }
}

/// Small hand-written source: the guard mirrors Block and OneHanded, the
/// warlock mirrors Restoration and receives two restoration spells.
pub fn sample_source() -> CatalogSource {
    use AbilityKind::*;
    use CompanionClass::*;

    let base = RuleSet {
        abilities: vec![
            ClassAbilities {
                class: Guard,
                abilities: vec![Block, OneHanded],
            },
            ClassAbilities {
                class: Warlock,
                abilities: vec![Restoration],
            },
        ],
        unlocks: vec![
            unlock(0xB01, Block, 0, &[Guard]),
            unlock(0xB02, Block, 50, &[Guard]),
            unlock(0xB03, Block, 70, &[Guard]),
            unlock(0xA01, OneHanded, 0, &[Guard, Knight]),
            unlock(0xA02, OneHanded, 30, &[Guard, Knight]),
        ],
        items: vec![
            item(0xE01, Restoration, 0.0, 49.0),
            item(0xE02, Restoration, 50.0, 100.0),
        ],
    };

    let mut overhaul = base.clone();
    overhaul.unlocks.push(UnlockEntry {
        form: FormRef::new(0x0C1, OVERHAUL),
        ability: Block,
        gate: 90,
        holders: vec![Guard],
    });

    CatalogSource {
        classes: ClassRefs {
            guard: FormRef::new(0x31, PLUGIN),
            knight: FormRef::new(0x32, PLUGIN),
            warlock: FormRef::new(0x33, PLUGIN),
        },
        packages: PackageRefs {
            heal: FormRef::new(0xF00004, PLUGIN),
            heal_guard: FormRef::new(0xF00005, PLUGIN),
            heal_knight: FormRef::new(0xF00006, PLUGIN),
            heal_self: FormRef::new(0xF00007, PLUGIN),
        },
        overhaul_marker: OVERHAUL.to_string(),
        base,
        overhaul,
    }
}

/// Mutations observed by [`MemoryActors`], in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    SetAbility(ActorId, AbilityKind, f32),
    GrantUnlock(ActorId, FormId),
    GrantItem(ActorId, FormId),
}

#[derive(Default)]
struct ActorState {
    abilities: HashMap<(ActorId, AbilityKind), f32>,
    unlocks: HashSet<(ActorId, FormId)>,
    items: HashSet<(ActorId, FormId)>,
    /// Unlocks whose conditions are met for the companion.
    eligible: HashSet<FormId>,
    refuse_grants: HashSet<FormId>,
    unreadable: HashSet<AbilityKind>,
    mutations: Vec<Mutation>,
    /// Unlocks whose conditions were evaluated, in call order.
    condition_checks: Vec<FormId>,
}

/// In-memory actor host. Conditions are met only for unlocks marked eligible.
#[derive(Default)]
pub struct MemoryActors {
    state: Mutex<ActorState>,
}

impl MemoryActors {
    pub fn set(&self, actor: ActorId, kind: AbilityKind, value: f32) {
        self.state.lock().unwrap().abilities.insert((actor, kind), value);
    }

    pub fn ability(&self, actor: ActorId, kind: AbilityKind) -> f32 {
        self.state
            .lock()
            .unwrap()
            .abilities
            .get(&(actor, kind))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn make_eligible(&self, unlock: FormId) {
        self.state.lock().unwrap().eligible.insert(unlock);
    }

    pub fn give_unlock(&self, actor: ActorId, unlock: FormId) {
        self.state.lock().unwrap().unlocks.insert((actor, unlock));
    }

    pub fn give_item(&self, actor: ActorId, item: FormId) {
        self.state.lock().unwrap().items.insert((actor, item));
    }

    pub fn refuse(&self, form: FormId) {
        self.state.lock().unwrap().refuse_grants.insert(form);
    }

    pub fn break_ability(&self, kind: AbilityKind) {
        self.state.lock().unwrap().unreadable.insert(kind);
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.state.lock().unwrap().mutations.clone()
    }

    pub fn condition_checks(&self) -> Vec<FormId> {
        self.state.lock().unwrap().condition_checks.clone()
    }

    pub fn clear_mutations(&self) {
        self.state.lock().unwrap().mutations.clear();
    }
}

impl ActorHost for MemoryActors {
    fn player(&self) -> ActorId {
        PLAYER
    }

    fn base_form(&self, _actor: ActorId) -> Option<FormId> {
        None
    }

    fn is_dead(&self, _actor: ActorId) -> bool {
        false
    }

    fn base_ability(&self, actor: ActorId, kind: AbilityKind) -> Result<f32, HostError> {
        let state = self.state.lock().unwrap();
        if state.unreadable.contains(&kind) {
            return Err(HostError::NoValueOwner { actor });
        }
        Ok(state.abilities.get(&(actor, kind)).copied().unwrap_or(0.0))
    }

    fn set_base_ability(&self, actor: ActorId, kind: AbilityKind, value: f32) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        state.abilities.insert((actor, kind), value);
        state.mutations.push(Mutation::SetAbility(actor, kind, value));
        Ok(())
    }

    fn has_unlock(&self, actor: ActorId, unlock: FormId) -> bool {
        self.state.lock().unwrap().unlocks.contains(&(actor, unlock))
    }

    fn unlock_conditions_met(&self, _actor: ActorId, unlock: FormId) -> bool {
        let mut state = self.state.lock().unwrap();
        state.condition_checks.push(unlock);
        state.eligible.contains(&unlock)
    }

    fn grant_unlock(&self, actor: ActorId, unlock: FormId) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        if state.refuse_grants.contains(&unlock) {
            return Err(HostError::Rejected {
                operation: "grant_unlock",
                actor,
                form: unlock,
            });
        }
        state.unlocks.insert((actor, unlock));
        state.mutations.push(Mutation::GrantUnlock(actor, unlock));
        Ok(())
    }

    fn has_item(&self, actor: ActorId, item: FormId) -> bool {
        self.state.lock().unwrap().items.contains(&(actor, item))
    }

    fn grant_item(&self, actor: ActorId, item: FormId) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        if state.refuse_grants.contains(&item) {
            return Err(HostError::Rejected {
                operation: "grant_item",
                actor,
                form: item,
            });
        }
        state.items.insert((actor, item));
        state.mutations.push(Mutation::GrantItem(actor, item));
        Ok(())
    }
}
