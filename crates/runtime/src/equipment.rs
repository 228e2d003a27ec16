//! Equipping companions without stacking armor on occupied slots.

use std::sync::Arc;
use std::time::Duration;

use companion_core::{ActorId, ExtraDataId, FormId, HostError, ItemForm, conflicts};
use tracing::{debug, trace, warn};

use crate::host::{EquipRequest, HandlePolicy, InventoryHost};

/// What an equip request ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EquipOutcome {
    /// Not armor; nothing was touched.
    Ignored,
    /// No handle could be obtained; nothing was touched.
    Abandoned(HostError),
    /// The host acknowledged the equip after the listed pieces were removed.
    Equipped { unequipped: Vec<FormId> },
    /// Conflicting pieces were removed but the equip itself failed.
    Failed(HostError),
}

#[derive(Clone)]
pub struct EquipmentResolver {
    inventory: Arc<dyn InventoryHost>,
    handles: Arc<dyn HandlePolicy>,
    ack_timeout: Option<Duration>,
}

impl EquipmentResolver {
    pub fn new(
        inventory: Arc<dyn InventoryHost>,
        handles: Arc<dyn HandlePolicy>,
        ack_timeout: Option<Duration>,
    ) -> Self {
        Self {
            inventory,
            handles,
            ack_timeout,
        }
    }

    /// Unequips every worn piece sharing a slot with `item`, then equips it.
    pub async fn equip(&self, actor: ActorId, item: &ItemForm) -> EquipOutcome {
        let Some(armor) = item.as_armor() else {
            return EquipOutcome::Ignored;
        };

        let handle = match self.handles.handle_for(actor) {
            Ok(handle) => handle,
            Err(error) => {
                warn!(%actor, item = %armor.id, %error, "equip abandoned");
                return EquipOutcome::Abandoned(error);
            }
        };

        let worn = self.inventory.inventory(actor);
        let mut unequipped = Vec::new();
        for (piece, extra) in conflicts(armor, &worn) {
            trace!(%actor, piece = %piece.id, name = %piece.name, "unequip conflicting armor");
            self.inventory.unequip(actor, piece.id, extra);
            unequipped.push(piece.id);
        }

        let request = EquipRequest::new(armor.id);
        let result = match self.ack_timeout {
            Some(limit) => tokio::time::timeout(limit, self.inventory.equip(handle, request))
                .await
                .unwrap_or(Err(HostError::AckTimeout {
                    function: "EquipItemEx",
                })),
            None => self.inventory.equip(handle, request).await,
        };

        match result {
            Ok(()) => {
                self.inventory.refresh_inventory_ui();
                debug!(%actor, item = %armor.id, replaced = unequipped.len(), "equipped");
                EquipOutcome::Equipped { unequipped }
            }
            Err(error) => {
                warn!(%actor, item = %armor.id, %error, "equip failed");
                EquipOutcome::Failed(error)
            }
        }
    }

    /// Takes `item` off directly. Returns `false` for non-armor.
    pub fn unequip(&self, actor: ActorId, item: &ItemForm, extra: Option<ExtraDataId>) -> bool {
        let Some(armor) = item.as_armor() else {
            return false;
        };
        self.inventory.unequip(actor, armor.id, extra);
        self.inventory.refresh_inventory_ui();
        debug!(%actor, item = %armor.id, "unequipped");
        true
    }
}
