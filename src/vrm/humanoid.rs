//! Humanoid bone taxonomy.
//!
//! A fixed naming convention for skeletal joints used to retarget animations
//! across character rigs. The set combines the joint names emitted by common
//! GLB rigs (`spine1`, `leftHandIndex2`, ...) with the VRM humanoid bone names
//! (`hips`, `leftUpperArm`, ...).

named_enum! {
    /// A humanoid skeletal joint identifier.
    pub enum HumanoidBone: "humanoid bone" {
        // GLB rigs
        /// Shoulder
        LeftArm => "leftArm",
        RightArm => "rightArm",
        /// Elbow
        LeftForeArm => "leftForeArm",
        RightForeArm => "rightForeArm",
        /// Hip. Spelled the way the source rigs export it.
        LeftThig => "leftThig",
        RightThig => "rightThig",
        Spine => "spine",
        Spine1 => "spine1",
        Spine2 => "spine2",

        LeftHandThumb1 => "leftHandThumb1",
        LeftHandThumb2 => "leftHandThumb2",
        LeftHandThumb3 => "leftHandThumb3",
        LeftHandIndex1 => "leftHandIndex1",
        LeftHandIndex2 => "leftHandIndex2",
        LeftHandIndex3 => "leftHandIndex3",
        LeftHandMiddle1 => "leftHandMiddle1",
        LeftHandMiddle2 => "leftHandMiddle2",
        LeftHandMiddle3 => "leftHandMiddle3",
        LeftHandRing1 => "leftHandRing1",
        LeftHandRing2 => "leftHandRing2",
        LeftHandRing3 => "leftHandRing3",
        LeftHandPinky1 => "leftHandPinky1",
        LeftHandPinky2 => "leftHandPinky2",
        LeftHandPinky3 => "leftHandPinky3",

        RightHandThumb1 => "rightHandThumb1",
        RightHandThumb2 => "rightHandThumb2",
        RightHandThumb3 => "rightHandThumb3",
        RightHandIndex1 => "rightHandIndex1",
        RightHandIndex2 => "rightHandIndex2",
        RightHandIndex3 => "rightHandIndex3",
        RightHandMiddle1 => "rightHandMiddle1",
        RightHandMiddle2 => "rightHandMiddle2",
        RightHandMiddle3 => "rightHandMiddle3",
        RightHandRing1 => "rightHandRing1",
        RightHandRing2 => "rightHandRing2",
        RightHandRing3 => "rightHandRing3",
        RightHandPinky1 => "rightHandPinky1",
        RightHandPinky2 => "rightHandPinky2",
        RightHandPinky3 => "rightHandPinky3",

        // VRM
        Hips => "hips",
        LeftUpperLeg => "leftUpperLeg",
        RightUpperLeg => "rightUpperLeg",
        LeftLowerLeg => "leftLowerLeg",
        RightLowerLeg => "rightLowerLeg",
        LeftFoot => "leftFoot",
        RightFoot => "rightFoot",
        Chest => "chest",
        UpperChest => "upperChest",
        Neck => "neck",
        Head => "head",
        LeftShoulder => "leftShoulder",
        RightShoulder => "rightShoulder",
        LeftUpperArm => "leftUpperArm",
        RightUpperArm => "rightUpperArm",
        LeftLowerArm => "leftLowerArm",
        RightLowerArm => "rightLowerArm",
        LeftHand => "leftHand",
        RightHand => "rightHand",
        LeftToes => "leftToes",
        RightToes => "rightToes",
        LeftEye => "leftEye",
        RightEye => "rightEye",
        Jaw => "jaw",
        LeftThumbProximal => "leftThumbProximal",
        LeftThumbIntermediate => "leftThumbIntermediate",
        LeftThumbDistal => "leftThumbDistal",
        LeftIndexProximal => "leftIndexProximal",
        LeftIndexIntermediate => "leftIndexIntermediate",
        LeftIndexDistal => "leftIndexDistal",
        LeftMiddleProximal => "leftMiddleProximal",
        LeftMiddleIntermediate => "leftMiddleIntermediate",
        LeftMiddleDistal => "leftMiddleDistal",
        LeftRingProximal => "leftRingProximal",
        LeftRingIntermediate => "leftRingIntermediate",
        LeftRingDistal => "leftRingDistal",
        LeftLittleProximal => "leftLittleProximal",
        LeftLittleIntermediate => "leftLittleIntermediate",
        LeftLittleDistal => "leftLittleDistal",
        RightThumbProximal => "rightThumbProximal",
        RightThumbIntermediate => "rightThumbIntermediate",
        RightThumbDistal => "rightThumbDistal",
        RightIndexProximal => "rightIndexProximal",
        RightIndexIntermediate => "rightIndexIntermediate",
        RightIndexDistal => "rightIndexDistal",
        RightMiddleProximal => "rightMiddleProximal",
        RightMiddleIntermediate => "rightMiddleIntermediate",
        RightMiddleDistal => "rightMiddleDistal",
        RightRingProximal => "rightRingProximal",
        RightRingIntermediate => "rightRingIntermediate",
        RightRingDistal => "rightRingDistal",
        RightLittleProximal => "rightLittleProximal",
        RightLittleIntermediate => "rightLittleIntermediate",
        RightLittleDistal => "rightLittleDistal",
    }
}

impl HumanoidBone {
    /// Parses a VRM humanoid bone name.
    ///
    /// VRM 1.0 uses lower camel case (`leftUpperArm`); some VRM 0.x exporters
    /// write upper camel case (`LeftUpperArm`). Both resolve to the same bone.
    #[must_use]
    pub fn from_vrm_name(name: &str) -> Option<Self> {
        Self::from_name(name).or_else(|| {
            let mut chars = name.chars();
            let first = chars.next()?;
            let lowered: String = first.to_lowercase().chain(chars).collect();
            Self::from_name(&lowered)
        })
    }
}
