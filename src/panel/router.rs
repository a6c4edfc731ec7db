use crate::scene::BlendShapeTarget;
use crate::vrm::{BlendShapeKey, BlendShapeRootKey};

/// Routes slider updates from the panel into the scene.
///
/// Stateless: it resolves names and forwards the call, holding no reference to
/// either the panel or the scene between calls.
pub struct BlendShapeRouter;

impl BlendShapeRouter {
    /// Forwards `value` to `target` for the channel `leaf` under `group`.
    ///
    /// Both names must match a closed enumeration exactly. Anything else is a
    /// stale or unrecognised event (assets may define morph targets the
    /// enumeration does not know) and is dropped.
    pub fn apply<T>(target: &mut T, group: &str, leaf: &str, value: f32)
    where
        T: BlendShapeTarget + ?Sized,
    {
        let Some(root) = BlendShapeRootKey::from_name(group) else {
            log::debug!("Dropping update for unknown group '{group}'");
            return;
        };
        let Some(key) = BlendShapeKey::from_name(leaf) else {
            log::debug!("Dropping update for unknown blend shape '{group}/{leaf}'");
            return;
        };
        target.set_blend_shape(value, key, root);
    }
}
