use log::{debug, trace};

use crate::config::ExtractorConfig;
use crate::frame::{self, FrameError};
use crate::landmarks::LandmarkSet;
use crate::math::{self, Vector3};
use crate::origin;
use crate::topology::{JointSpec, Topology};
use crate::types::{JointRotation, RotationArray};

/// Turns landmark sets into per-joint rotations.
///
/// Holds only configuration, so one extractor can be shared freely across
/// threads and calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationExtractor {
    pub config: ExtractorConfig,
}

impl RotationExtractor {
    pub fn new(config: ExtractorConfig) -> RotationExtractor {
        RotationExtractor { config }
    }

    /// Rotations for every slot of `topology`.
    ///
    /// An empty set yields an all-absent array. Otherwise slots start out
    /// untracked and each topology joint is resolved independently, so a bad
    /// landmark only affects the joints that reference it and their
    /// children. Joints with a parent slot are then re-expressed in the
    /// parent's frame; a child whose parent failed takes the parent's outcome.
    pub fn extract(&self, set: &LandmarkSet, topology: &Topology) -> RotationArray {
        if set.is_absent() {
            trace!("{:?}: no landmarks", topology.kind);
            return RotationArray::absent(topology.kind);
        }

        let mut joints = vec![JointRotation::Untracked; topology.len];
        for joint in topology.joints {
            if let Some(slot) = joints.get_mut(joint.slot) {
                *slot = self.joint_rotation(set, joint);
            }
        }
        let world = joints.clone();
        for joint in topology.joints {
            let Some(parent) = joint.parent.and_then(|p| world.get(p)) else {
                continue;
            };
            if let Some(slot) = joints.get_mut(joint.slot) {
                *slot = match (parent, *slot) {
                    (JointRotation::Tracked(p), JointRotation::Tracked(c)) => {
                        JointRotation::Tracked(math::relative_rotation(p, &c))
                    }
                    (p, JointRotation::Tracked(_)) => {
                        debug!("slot {}: parent slot is {:?}", joint.slot, p);
                        *p
                    }
                    (_, own) => own,
                };
            }
        }
        trace!(
            "{:?}: {} of {} slots tracked",
            topology.kind,
            joints.iter().filter(|j| j.is_tracked()).count(),
            topology.len
        );

        RotationArray::new(topology.kind, joints)
    }

    fn joint_rotation(&self, set: &LandmarkSet, joint: &JointSpec) -> JointRotation {
        let Some(points) = self.anchor_points(set, joint) else {
            debug!("slot {}: landmark index out of range for {} points", joint.slot, set.len());
            return JointRotation::Untracked;
        };
        match frame::build_frame(&points, &self.config.world_up(), self.config.epsilon) {
            Ok(f) => JointRotation::Tracked(f.to_quaternion()),
            Err(FrameError::NonFinite) => {
                debug!("slot {}: non-finite landmark", joint.slot);
                JointRotation::Malformed
            }
            Err(e) => {
                debug!("slot {}: {}", joint.slot, e);
                JointRotation::Degenerate
            }
        }
    }

    /// Anchor centroids of a joint, or `None` when an index is out of range.
    fn anchor_points(&self, set: &LandmarkSet, joint: &JointSpec) -> Option<Vec<Vector3>> {
        joint.anchors
            .iter()
            .map(|anchor| {
                origin::centroid(set, anchor)
                    .map(|p| math::to_na(self.config.coordinate_system.apply(p)))
            })
            .collect()
    }
}
