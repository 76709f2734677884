// Watermark derivation for the read model.
//
// The watermark is never stored. It is recomputed from the items present, so a sync that was
// interrupted halfway resumes from the newest item that actually landed.

use crate::modules::search::core::item::Item;
use crate::shared::core::primitives::Timestamp;

pub fn watermark<'a>(items: impl IntoIterator<Item = &'a Item>) -> Option<Timestamp> {
    items.into_iter().map(|item| item.updated_at).max()
}
